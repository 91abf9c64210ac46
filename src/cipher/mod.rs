pub mod caesar;
pub mod polybios;
pub mod rail_fence;
pub mod table_shift;
pub mod tapir;
pub mod vigenere;

pub use caesar::{caesar, Caesar};
pub use polybios::PolybiosSquare;
pub use rail_fence::RailFence;
pub use table_shift::TableShift;
pub use tapir::Tapir;
pub use vigenere::Vigenere;

use crate::error::{CipherError, Result};
use crate::method::Method;
use crate::options::{Direction, TransformOptions};
use tracing::debug;

/// A validated cipher with its key baked in.
/// Encrypt and decrypt are exact inverses over the cipher's domain.
pub trait TextCipher {
    fn encrypt(&self, text: &str) -> String;
    fn decrypt(&self, text: &str) -> String;

    fn apply(&self, direction: Direction, text: &str) -> String {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}

/// Shift an ASCII letter forward by `shift` (0..26), keeping its case
pub(crate) fn shift_letter(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    (base + (c as u8 - base + shift % 26) % 26) as char
}

/// Every supported cipher, one variant per method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    RailFence(RailFence),
    Caesar(Caesar),
    Vigenere(Vigenere),
    Polybios(PolybiosSquare),
    Tapir(Tapir),
    TableShift(TableShift),
}

impl Cipher {
    /// Build the cipher for `options.method`, validating its parameters
    pub fn from_options(options: &TransformOptions) -> Result<Self> {
        let method = options.method;
        let cipher = match method {
            Method::RailFence => Cipher::RailFence(RailFence::new(options.rails)?),
            Method::Caesar => Cipher::Caesar(Caesar::new(options.shift)),
            Method::Vigenere => Cipher::Vigenere(Vigenere::new(require_key(options)?)?),
            Method::Polybios => {
                Cipher::Polybios(PolybiosSquare::from_key(options.key.as_deref().unwrap_or("")))
            }
            Method::Tapir => Cipher::Tapir(Tapir),
            Method::TableShift => Cipher::TableShift(TableShift::new(require_key(options)?)?),
        };
        debug!(method = method.name(), "cipher ready");
        Ok(cipher)
    }

    pub fn method(&self) -> Method {
        match self {
            Cipher::RailFence(_) => Method::RailFence,
            Cipher::Caesar(_) => Method::Caesar,
            Cipher::Vigenere(_) => Method::Vigenere,
            Cipher::Polybios(_) => Method::Polybios,
            Cipher::Tapir(_) => Method::Tapir,
            Cipher::TableShift(_) => Method::TableShift,
        }
    }

    fn inner(&self) -> &dyn TextCipher {
        match self {
            Cipher::RailFence(c) => c,
            Cipher::Caesar(c) => c,
            Cipher::Vigenere(c) => c,
            Cipher::Polybios(c) => c,
            Cipher::Tapir(c) => c,
            Cipher::TableShift(c) => c,
        }
    }
}

impl TextCipher for Cipher {
    fn encrypt(&self, text: &str) -> String {
        self.inner().encrypt(text)
    }

    fn decrypt(&self, text: &str) -> String {
        self.inner().decrypt(text)
    }
}

fn require_key(options: &TransformOptions) -> Result<&str> {
    options
        .key
        .as_deref()
        .ok_or(CipherError::MissingKey(options.method))
}

/// Run one encrypt or decrypt call for the gathered options
pub fn transform(direction: Direction, options: &TransformOptions, text: &str) -> Result<String> {
    let cipher = Cipher::from_options(options)?;
    debug!(
        method = options.method.name(),
        ?direction,
        chars = text.chars().count(),
        "transform"
    );
    Ok(cipher.apply(direction, text))
}
