use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};
use crate::method::Method;

/// Ordered symbol table: uppercase, lowercase, digits, space, punctuation
pub const SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 .,:;!?'\"-()/+=*&%$#@_<>[]";

pub const TABLE_SIZE: usize = 87;

/// Keyed modular shift over the symbol table
///
/// The input character at position `i` pairs with key character
/// `key[i % key.len()]`. Characters missing from the table pass through,
/// and so does any input paired with a key character missing from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShift {
    /// Table index per key position; `None` for characters outside the table
    offsets: Vec<Option<usize>>,
}

fn table() -> Vec<char> {
    SYMBOLS.chars().collect()
}

fn index_of(table: &[char], c: char) -> Option<usize> {
    table.iter().position(|&t| t == c)
}

impl TableShift {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey(Method::TableShift));
        }
        let table = table();
        let offsets = key.chars().map(|c| index_of(&table, c)).collect();
        Ok(Self { offsets })
    }

    fn shift_text(&self, text: &str, decrypt: bool) -> String {
        let table = table();
        text.chars()
            .zip(self.offsets.iter().cycle())
            .map(|(c, offset)| match (index_of(&table, c), offset) {
                (Some(idx), Some(offset)) => {
                    let shifted = if decrypt {
                        (idx + TABLE_SIZE - offset) % TABLE_SIZE
                    } else {
                        (idx + offset) % TABLE_SIZE
                    };
                    table[shifted]
                }
                _ => c,
            })
            .collect()
    }
}

impl TextCipher for TableShift {
    fn encrypt(&self, text: &str) -> String {
        self.shift_text(text, false)
    }

    fn decrypt(&self, text: &str) -> String {
        self.shift_text(text, true)
    }
}
