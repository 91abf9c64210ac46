use crate::cipher::TextCipher;
use std::fmt;

/// Latin alphabet with J merged into I
pub const POLYBIOS_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Side length of the square
pub const SIZE: usize = 5;

/// Sentinel emitted for digit groups that do not address a cell
pub const UNRESOLVED: char = '?';

/// 5x5 key-derived letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiosSquare {
    cells: [[char; SIZE]; SIZE],
}

impl PolybiosSquare {
    /// Key letters first (uppercased, J folded to I, first occurrence wins),
    /// then the rest of the alphabet, row-major.
    /// Characters of the key outside A-Z are ignored.
    pub fn from_key(key: &str) -> Self {
        let mut order: Vec<char> = Vec::with_capacity(SIZE * SIZE);
        let candidates = key
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| fold_j(c.to_ascii_uppercase()))
            .chain(POLYBIOS_ALPHABET.chars());
        for c in candidates {
            if !order.contains(&c) {
                order.push(c);
            }
        }

        let mut cells = [[' '; SIZE]; SIZE];
        for (i, c) in order.into_iter().take(SIZE * SIZE).enumerate() {
            cells[i / SIZE][i % SIZE] = c;
        }
        Self { cells }
    }

    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }

    /// Letter at 1-based (row, column)
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        if (1..=SIZE).contains(&row) && (1..=SIZE).contains(&col) {
            Some(self.cells[row - 1][col - 1])
        } else {
            None
        }
    }

    /// 1-based (row, column) of a letter, J resolving to I
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        let letter = fold_j(letter.to_ascii_uppercase());
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|&c| c == letter)
                .map(|c| (r + 1, c + 1))
        })
    }
}

impl Default for PolybiosSquare {
    fn default() -> Self {
        Self::from_key("")
    }
}

fn fold_j(c: char) -> char {
    if c == 'J' {
        'I'
    } else {
        c
    }
}

impl TextCipher for PolybiosSquare {
    /// Input is uppercased first; letters become two digits and every
    /// other character passes through
    fn encrypt(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() * 2);
        for c in text.to_uppercase().chars() {
            match self.position(c) {
                Some((row, col)) => output.push_str(&format!("{}{}", row, col)),
                None => output.push(c),
            }
        }
        output
    }

    fn decrypt(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() / 2);
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            let Some(row) = c.to_digit(10) else {
                output.push(c);
                continue;
            };
            let col = match chars.peek().and_then(|n| n.to_digit(10)) {
                Some(col) => {
                    chars.next();
                    col
                }
                None => {
                    output.push(UNRESOLVED);
                    continue;
                }
            };
            output.push(
                self.letter_at(row as usize, col as usize)
                    .unwrap_or(UNRESOLVED),
            );
        }
        output
    }
}

impl fmt::Display for PolybiosSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        writeln!(f, "  +{}", "-".repeat(SIZE * 2))?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} |", r + 1)?;
            for c in row {
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
