use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};

/// Zig-zag transposition across a fixed number of rails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    pub fn new(rails: usize) -> Result<Self> {
        if rails == 0 {
            return Err(CipherError::InvalidRailCount(rails));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Rails the path actually visits for `len` characters
    fn used_rails(&self, len: usize) -> usize {
        self.rails.min(len)
    }

    /// Rail index for each of the first `len` positions
    fn path(&self, len: usize) -> ZigZag {
        ZigZag {
            rails: self.rails,
            rail: 0,
            down: true,
            remaining: len,
        }
    }
}

/// Cursor bouncing between rail 0 and the last rail.
/// Direction flips after the cursor lands on either boundary rail.
struct ZigZag {
    rails: usize,
    rail: usize,
    down: bool,
    remaining: usize,
}

impl Iterator for ZigZag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.rail;
        if self.down {
            self.rail += 1;
        } else {
            self.rail -= 1;
        }
        if self.rail == 0 || self.rail == self.rails - 1 {
            self.down = !self.down;
        }
        Some(current)
    }
}

impl TextCipher for RailFence {
    fn encrypt(&self, text: &str) -> String {
        if self.rails == 1 {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();
        let mut rails: Vec<String> = vec![String::new(); self.used_rails(chars.len())];
        for (ch, rail) in chars.iter().zip(self.path(chars.len())) {
            rails[rail].push(*ch);
        }
        rails.concat()
    }

    fn decrypt(&self, text: &str) -> String {
        if self.rails == 1 {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();

        // First pass: how many characters sit on each rail
        let mut lengths = vec![0usize; self.used_rails(chars.len())];
        for rail in self.path(chars.len()) {
            lengths[rail] += 1;
        }

        // Split ciphertext into per-rail runs
        let mut runs = Vec::with_capacity(lengths.len());
        let mut offset = 0;
        for len in lengths {
            runs.push(chars[offset..offset + len].iter());
            offset += len;
        }

        // Second pass: read back along the zig-zag
        self.path(chars.len())
            .filter_map(|rail| runs[rail].next().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_three_rails() {
        let cipher = RailFence::new(3).unwrap();
        let encrypted = cipher.encrypt("WEAREDISCOVEREDFLEEATONCE");
        assert_eq!(encrypted, "WECRLTEERDSOEEFEAOCAIVDEN");
        assert_eq!(cipher.decrypt(&encrypted), "WEAREDISCOVEREDFLEEATONCE");
    }

    #[test]
    fn test_two_rails() {
        let cipher = RailFence::new(2).unwrap();
        assert_eq!(cipher.encrypt("HELLO WORLD"), "HLOWRDEL OL");
        assert_eq!(cipher.decrypt("HLOWRDEL OL"), "HELLO WORLD");
    }

    #[test]
    fn test_single_rail_is_identity() {
        let cipher = RailFence::new(1).unwrap();
        assert_eq!(cipher.encrypt("anything, really"), "anything, really");
        assert_eq!(cipher.decrypt("anything, really"), "anything, really");
    }

    #[test]
    fn test_zero_rails_rejected() {
        assert!(matches!(
            RailFence::new(0),
            Err(CipherError::InvalidRailCount(0))
        ));
    }

    #[test]
    fn test_more_rails_than_characters() {
        let cipher = RailFence::new(10).unwrap();
        // Every character lands on its own rail, in order
        assert_eq!(cipher.encrypt("abc"), "abc");
        assert_eq!(cipher.decrypt("abc"), "abc");
    }

    #[test]
    fn test_huge_rail_count() {
        let cipher = RailFence::new(usize::MAX).unwrap();
        assert_eq!(cipher.encrypt("abc"), "abc");
        assert_eq!(cipher.decrypt("abc"), "abc");
        assert_eq!(cipher.encrypt(""), "");
    }

    #[test]
    fn test_empty_text() {
        let cipher = RailFence::new(4).unwrap();
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt(""), "");
    }

    #[test]
    fn test_zigzag_path() {
        let cipher = RailFence::new(3).unwrap();
        let path: Vec<usize> = cipher.path(8).collect();
        assert_eq!(path, vec![0, 1, 2, 1, 0, 1, 2, 1]);
    }

    #[test]
    fn test_unicode_preserved() {
        let cipher = RailFence::new(3).unwrap();
        let text = "Grüße aus Köln!";
        let encrypted = cipher.encrypt(text);
        assert_eq!(encrypted.chars().count(), text.chars().count());
        assert_eq!(cipher.decrypt(&encrypted), text);
    }
}
