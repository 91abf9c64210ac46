use crate::cipher::{shift_letter, TextCipher};
use crate::error::{CipherError, Result};
use crate::method::Method;

/// Polyalphabetic shift driven by a repeating letter key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    /// Per-position shifts, 0..26
    shifts: Vec<u8>,
}

impl Vigenere {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey(Method::Vigenere));
        }
        let shifts = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase() as u8 - b'A')
                } else {
                    Err(CipherError::InvalidKey {
                        method: Method::Vigenere,
                        reason: format!("{:?} is not a Latin letter", c),
                    })
                }
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { shifts })
    }

    /// Key positions advance only on letters
    fn shift_text(&self, text: &str, decrypt: bool) -> String {
        let mut key = self.shifts.iter().cycle();
        text.chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                let shift = key.next().copied().unwrap_or(0);
                let shift = if decrypt { (26 - shift) % 26 } else { shift };
                shift_letter(c, shift)
            })
            .collect()
    }
}

impl TextCipher for Vigenere {
    fn encrypt(&self, text: &str) -> String {
        self.shift_text(text, false)
    }

    fn decrypt(&self, text: &str) -> String {
        self.shift_text(text, true)
    }
}
