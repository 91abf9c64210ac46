//! Tapir fixed-code table.
//!
//! Letters, common German digraphs, digits and punctuation map to one- or
//! two-digit codes; codes are space separated. Digits share their codes
//! with letters (`66` is both `Ä` and `6`), so the code stream carries a
//! mode: it starts in letter mode and [`FIGURE_SHIFT`] toggles between
//! letter and figure mode. Space and punctuation codes are valid in both.
//! The encoder is greedy: a digraph with its own code (`BE`, `CH`, `DE`,
//! `GE`, `TE`, `UN`) is emitted as that single code, never as two letters.

use crate::cipher::TextCipher;

/// Toggles between letter and figure mode
pub const FIGURE_SHIFT: &str = "82";

/// Emitted for characters and codes outside the table
pub const UNKNOWN: &str = "?";

const LETTERS: &[(&str, &str)] = &[
    ("A", "0"),
    ("E", "1"),
    ("I", "2"),
    ("N", "3"),
    ("R", "4"),
    ("B", "50"),
    ("BE", "51"),
    ("C", "52"),
    ("CH", "53"),
    ("D", "54"),
    ("DE", "55"),
    ("F", "56"),
    ("G", "57"),
    ("GE", "58"),
    ("H", "59"),
    ("J", "60"),
    ("K", "61"),
    ("L", "62"),
    ("M", "63"),
    ("O", "64"),
    ("ß", "65"),
    ("Ä", "66"),
    ("P", "67"),
    ("Q", "68"),
    ("S", "69"),
    ("T", "70"),
    ("TE", "71"),
    ("U", "72"),
    ("UN", "73"),
    ("V", "74"),
    ("W", "76"),
    ("X", "77"),
    ("Y", "78"),
    ("Z", "79"),
];

const FIGURES: &[(char, &str)] = &[
    ('0', "00"),
    ('1', "11"),
    ('2', "22"),
    ('3', "33"),
    ('4', "44"),
    ('5', "55"),
    ('6', "66"),
    ('7', "77"),
    ('8', "88"),
    ('9', "99"),
];

const SHARED: &[(char, &str)] = &[
    (' ', "83"),
    ('.', "89"),
    (':', "90"),
    (',', "91"),
    ('-', "92"),
    ('/', "93"),
    ('(', "94"),
    (')', "95"),
    ('+', "96"),
    ('=', "97"),
    ('"', "98"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Letters,
    Figures,
}

impl Mode {
    fn toggled(self) -> Self {
        match self {
            Mode::Letters => Mode::Figures,
            Mode::Figures => Mode::Letters,
        }
    }
}

/// Keyless Tapir code table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tapir;

/// Uppercase except `ß`, which has no single-character uppercase form
fn upper(text: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c == 'ß' {
            chars.push(c);
        } else {
            chars.extend(c.to_uppercase());
        }
    }
    chars
}

fn letter_code(token: &str) -> Option<&'static str> {
    LETTERS.iter().find(|(t, _)| *t == token).map(|(_, code)| *code)
}

fn char_code(table: &[(char, &'static str)], c: char) -> Option<&'static str> {
    table.iter().find(|(t, _)| *t == c).map(|(_, code)| *code)
}

fn char_for(table: &[(char, &str)], code: &str) -> Option<char> {
    table.iter().find(|(_, k)| *k == code).map(|(c, _)| *c)
}

/// Text as it reads after an encrypt/decrypt round trip: uppercased
/// (`ß` kept) with characters outside the table replaced by `?`
pub fn normalize(text: &str) -> String {
    upper(text)
        .into_iter()
        .map(|c| {
            let mut buf = [0u8; 4];
            let known = letter_code(c.encode_utf8(&mut buf)).is_some()
                || char_code(FIGURES, c).is_some()
                || char_code(SHARED, c).is_some();
            if known {
                c
            } else {
                '?'
            }
        })
        .collect()
}

impl TextCipher for Tapir {
    fn encrypt(&self, text: &str) -> String {
        let chars = upper(text);
        let mut codes: Vec<&str> = Vec::with_capacity(chars.len());
        let mut mode = Mode::Letters;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            // Digraphs take precedence over their single letters
            if i + 1 < chars.len() {
                let digraph: String = chars[i..i + 2].iter().collect();
                if let Some(code) = letter_code(&digraph) {
                    if mode == Mode::Figures {
                        codes.push(FIGURE_SHIFT);
                        mode = Mode::Letters;
                    }
                    codes.push(code);
                    i += 2;
                    continue;
                }
            }

            let mut buf = [0u8; 4];
            if let Some(code) = letter_code(c.encode_utf8(&mut buf)) {
                if mode == Mode::Figures {
                    codes.push(FIGURE_SHIFT);
                    mode = Mode::Letters;
                }
                codes.push(code);
            } else if let Some(code) = char_code(FIGURES, c) {
                if mode == Mode::Letters {
                    codes.push(FIGURE_SHIFT);
                    mode = Mode::Figures;
                }
                codes.push(code);
            } else if let Some(code) = char_code(SHARED, c) {
                codes.push(code);
            } else {
                codes.push(UNKNOWN);
            }
            i += 1;
        }

        codes.join(" ")
    }

    fn decrypt(&self, text: &str) -> String {
        let mut output = String::new();
        let mut mode = Mode::Letters;

        for code in text.split_whitespace() {
            if code == FIGURE_SHIFT {
                mode = mode.toggled();
                continue;
            }
            if let Some(c) = char_for(SHARED, code) {
                output.push(c);
                continue;
            }
            let decoded = match mode {
                Mode::Letters => LETTERS
                    .iter()
                    .find(|(_, k)| *k == code)
                    .map(|(token, _)| token.to_string()),
                Mode::Figures => char_for(FIGURES, code).map(String::from),
            };
            output.push_str(decoded.as_deref().unwrap_or(UNKNOWN));
        }

        output
    }
}
