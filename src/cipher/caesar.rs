use crate::cipher::{shift_letter, TextCipher};

/// Fixed shift of every Latin letter, case preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }
}

/// Shift every ASCII letter by `shift`; everything else is left in place.
/// Decryption is the same call with the negated shift.
pub fn caesar(text: &str, shift: i64) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

impl TextCipher for Caesar {
    fn encrypt(&self, text: &str) -> String {
        caesar(text, self.shift)
    }

    fn decrypt(&self, text: &str) -> String {
        caesar(text, -self.shift.rem_euclid(26))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world() {
        assert_eq!(caesar("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(caesar("Khoor, Zruog!", -3), "Hello, World!");
    }

    #[test]
    fn test_wraps_around() {
        assert_eq!(caesar("xyz XYZ", 3), "abc ABC");
        assert_eq!(caesar("abc ABC", -3), "xyz XYZ");
    }

    #[test]
    fn test_identity_shifts() {
        let text = "The quick brown fox, 1234!";
        assert_eq!(caesar(text, 0), text);
        assert_eq!(caesar(text, 26), text);
        assert_eq!(caesar(text, -52), text);
    }

    #[test]
    fn test_large_and_negative_shifts() {
        assert_eq!(caesar("abc", 29), caesar("abc", 3));
        assert_eq!(caesar("abc", -23), caesar("abc", 3));
        assert_eq!(caesar("abc", i64::MIN), caesar("abc", i64::MIN.rem_euclid(26)));
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(caesar("Äpfel über Öl", 1), "Äqgfm ücfs Öm");
    }

    #[test]
    fn test_trait_roundtrip() {
        let cipher = Caesar::new(11);
        let encrypted = cipher.encrypt("Attack at dawn.");
        assert_eq!(cipher.decrypt(&encrypted), "Attack at dawn.");
    }
}
