use crate::cipher::transform;
use crate::error::Result;
use crate::options::{Direction, TransformOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the text to transform comes from
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    /// Literal text given on the command line
    pub text: Option<String>,
    /// File to read when no literal text was given
    pub input: Option<PathBuf>,
}

impl TextSource {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            input: None,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            text: None,
            input: Some(path.into()),
        }
    }

    /// Literal text, then file, then stdin.
    /// One trailing line break is dropped from file and stdin input.
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let raw = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        Ok(trim_line_break(raw))
    }
}

fn trim_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Encrypt or decrypt the source text.
/// Writes to `output` when given and returns the transformed text either way.
pub fn run_transform(
    direction: Direction,
    options: &TransformOptions,
    source: &TextSource,
    output: Option<&Path>,
) -> Result<String> {
    let text = source.read()?;
    let result = transform(direction, options, &text)?;
    if let Some(path) = output {
        std::fs::write(path, &result)?;
    }
    Ok(result)
}
