use crate::bulk::{CAESAR_SHIFTS, RAIL_COUNTS};
use crate::cipher::polybios::POLYBIOS_ALPHABET;
use crate::cipher::table_shift::SYMBOLS;
use crate::error::{CipherError, Result};
use crate::method::Method;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const MAX_KEY_LENGTH: usize = 256;

/// A freshly generated parameter for one method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedKey {
    Shift(i64),
    Rails(usize),
    Key(String),
    None,
}

impl fmt::Display for GeneratedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedKey::Shift(shift) => write!(f, "--shift {}", shift),
            GeneratedKey::Rails(rails) => write!(f, "--rails {}", rails),
            GeneratedKey::Key(key) => write!(f, "--key {}", shell_quote(key)),
            GeneratedKey::None => write!(f, "(no key)"),
        }
    }
}

/// Single-quoted for POSIX shells, embedded `'` written as `'\''`
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Random parameter for `method`.
/// `length` applies to string keys; Polybios keys are capped at 25 distinct letters.
pub fn generate_key<R: Rng>(method: Method, length: usize, rng: &mut R) -> Result<GeneratedKey> {
    if length == 0 || length > MAX_KEY_LENGTH {
        return Err(CipherError::InvalidLength(length));
    }

    let key = match method {
        Method::Caesar => GeneratedKey::Shift(rng.gen_range(CAESAR_SHIFTS)),
        Method::RailFence => GeneratedKey::Rails(rng.gen_range(RAIL_COUNTS)),
        Method::Vigenere => GeneratedKey::Key(
            (0..length)
                .map(|_| (b'A' + rng.gen_range(0..26u8)) as char)
                .collect(),
        ),
        Method::Polybios => {
            let mut letters: Vec<char> = POLYBIOS_ALPHABET.chars().collect();
            letters.shuffle(rng);
            GeneratedKey::Key(letters.into_iter().take(length).collect())
        }
        Method::TableShift => {
            let symbols: Vec<char> = SYMBOLS.chars().collect();
            GeneratedKey::Key(
                (0..length)
                    .filter_map(|_| symbols.choose(rng).copied())
                    .collect(),
            )
        }
        Method::Tapir => GeneratedKey::None,
    };
    Ok(key)
}
