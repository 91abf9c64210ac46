use classicrypt::bulk::{bulk_caesar_decrypt, bulk_decrypt, bulk_rail_fence_decrypt, BulkOutcome};
use classicrypt::cipher::polybios::POLYBIOS_ALPHABET;
use classicrypt::cipher::tapir::normalize;
use classicrypt::cipher::{caesar, PolybiosSquare, RailFence, TableShift, Tapir, Vigenere};
use classicrypt::{transform, CipherError, Direction, Method, TextCipher, TransformOptions};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn every_method_roundtrips_through_dispatch() {
    let text = "Sphinx of black quartz, judge my vow";
    for method in Method::ALL {
        let opts = TransformOptions::for_method(method)
            .with_key("Quartz")
            .with_rails(4)
            .with_shift(17);
        let encrypted = transform(Direction::Encrypt, &opts, text).unwrap();
        let decrypted = transform(Direction::Decrypt, &opts, &encrypted).unwrap();
        let expected = match method {
            Method::Polybios => text.to_uppercase().replace('J', "I"),
            Method::Tapir => normalize(text),
            _ => text.to_string(),
        };
        assert_eq!(decrypted, expected, "method {}", method);
    }
}

#[test]
fn empty_text_roundtrips_to_empty() {
    for method in Method::ALL {
        let opts = TransformOptions::for_method(method).with_key("k");
        assert_eq!(transform(Direction::Encrypt, &opts, "").unwrap(), "");
        assert_eq!(transform(Direction::Decrypt, &opts, "").unwrap(), "");
    }
}

#[test]
fn invalid_parameters_fail_explicitly() {
    let empty_key = TransformOptions::for_method(Method::TableShift).with_key("");
    assert!(matches!(
        transform(Direction::Encrypt, &empty_key, "x"),
        Err(CipherError::EmptyKey(Method::TableShift))
    ));

    let no_rails = TransformOptions::for_method(Method::RailFence).with_rails(0);
    assert!(matches!(
        transform(Direction::Decrypt, &no_rails, "x"),
        Err(CipherError::InvalidRailCount(0))
    ));
}

#[test]
fn bulk_caesar_finds_known_plaintext() {
    let plaintext = "Veni, vidi, vici.";
    for shift in 1..=25 {
        let report = bulk_caesar_decrypt(&caesar(plaintext, shift));
        assert_eq!(report.len(), 25);
        assert_eq!(report.find(shift), Some(plaintext));
        let line = format!("Shift {}: {}", shift, plaintext);
        assert!(report.to_string().lines().any(|l| l == line));
    }
}

#[test]
fn bulk_rail_fence_finds_known_plaintext() {
    let plaintext = "Defend the east wall of the castle";
    for rails in 2..=10 {
        let ciphertext = RailFence::new(rails).unwrap().encrypt(plaintext);
        let report = bulk_rail_fence_decrypt(&ciphertext);
        assert_eq!(report.len(), 9);
        assert_eq!(report.find(rails as i64), Some(plaintext));
    }
}

#[test]
fn bulk_dispatch_matches_direct_calls() {
    let BulkOutcome::Report(report) = bulk_decrypt(Method::Caesar, "Uryyb") else {
        panic!("caesar supports bulk");
    };
    assert_eq!(report, bulk_caesar_decrypt("Uryyb"));
    assert_eq!(report.find(13), Some("Hello"));
}

proptest! {
    #[test]
    fn rail_fence_roundtrip(text in ".{0,200}", rails in 1usize..20) {
        let cipher = RailFence::new(rails).unwrap();
        let encrypted = cipher.encrypt(&text);
        prop_assert_eq!(encrypted.chars().count(), text.chars().count());
        prop_assert_eq!(cipher.decrypt(&encrypted), text);
    }

    #[test]
    fn rail_fence_single_rail_identity(text in ".{0,100}") {
        let cipher = RailFence::new(1).unwrap();
        prop_assert_eq!(cipher.encrypt(&text), text.clone());
        prop_assert_eq!(cipher.decrypt(&text), text);
    }

    #[test]
    fn caesar_symmetry(text in ".{0,200}", shift in any::<i64>()) {
        prop_assert_eq!(caesar(&caesar(&text, shift), -(shift.rem_euclid(26))), text);
    }

    #[test]
    fn caesar_identity_shifts(text in ".{0,200}", k in -5i64..5) {
        prop_assert_eq!(caesar(&text, 26 * k), text);
    }

    #[test]
    fn caesar_and_vigenere_preserve_non_letters(text in ".{0,200}", shift in 0i64..26, key in "[a-zA-Z]{1,12}") {
        let vigenere = Vigenere::new(&key).unwrap();
        for encrypted in [caesar(&text, shift), vigenere.encrypt(&text)] {
            for (a, b) in text.chars().zip(encrypted.chars()) {
                if !a.is_ascii_alphabetic() {
                    prop_assert_eq!(a, b);
                } else {
                    prop_assert!(b.is_ascii_alphabetic());
                    prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
                }
            }
        }
    }

    #[test]
    fn vigenere_roundtrip(text in ".{0,200}", key in "[a-zA-Z]{1,16}") {
        let cipher = Vigenere::new(&key).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&text)), text);
    }

    #[test]
    fn polybios_matrix_invariant(key in ".{0,40}") {
        let square = PolybiosSquare::from_key(&key);
        let letters: HashSet<char> = square.rows().iter().flatten().copied().collect();
        let expected: HashSet<char> = POLYBIOS_ALPHABET.chars().collect();
        prop_assert_eq!(letters, expected);
    }

    #[test]
    fn polybios_roundtrip(text in "[a-zA-ZäöüÄÖÜßé ,.!?]{0,120}", key in "[a-zA-Z]{0,12}") {
        let square = PolybiosSquare::from_key(&key);
        let expected = text.to_uppercase().replace('J', "I");
        prop_assert_eq!(square.decrypt(&square.encrypt(&text)), expected);
    }

    #[test]
    fn table_shift_roundtrip(text in ".{0,200}", key in ".{1,16}") {
        let cipher = TableShift::new(&key).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&text)), text);
    }

    #[test]
    fn tapir_roundtrip(text in "[a-zA-Z0-9äÄß .:,/()+=\"-]{0,120}") {
        prop_assert_eq!(Tapir.decrypt(&Tapir.encrypt(&text)), normalize(&text));
    }
}
