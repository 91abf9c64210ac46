use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cipher methods known to the transform core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    RailFence,
    #[default]
    Caesar,
    Vigenere,
    Polybios,
    Tapir,
    TableShift,
}

/// Which parameter a method reads from the gathered options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyKind {
    Rails,
    Shift,
    Key,
    OptionalKey,
    None,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::RailFence,
        Method::Caesar,
        Method::Vigenere,
        Method::Polybios,
        Method::Tapir,
        Method::TableShift,
    ];

    /// Canonical command-line name
    pub fn name(self) -> &'static str {
        match self {
            Method::RailFence => "rail-fence",
            Method::Caesar => "caesar",
            Method::Vigenere => "vigenere",
            Method::Polybios => "polybios",
            Method::Tapir => "tapir",
            Method::TableShift => "table-shift",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Method::RailFence => "Rail Fence",
            Method::Caesar => "Caesar",
            Method::Vigenere => "Vigenère",
            Method::Polybios => "Polybios",
            Method::Tapir => "Tapir",
            Method::TableShift => "Table Shift",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            Method::RailFence => KeyKind::Rails,
            Method::Caesar => KeyKind::Shift,
            Method::Vigenere | Method::TableShift => KeyKind::Key,
            Method::Polybios => KeyKind::OptionalKey,
            Method::Tapir => KeyKind::None,
        }
    }

    /// Only the two ciphers with an enumerable keyspace can be brute forced
    pub fn supports_bulk(self) -> bool {
        matches!(self, Method::RailFence | Method::Caesar)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Method {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rail-fence" | "railfence" | "rail" => Ok(Self::RailFence),
            "caesar" | "cäsar" | "shift" => Ok(Self::Caesar),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "polybios" | "polybius" => Ok(Self::Polybios),
            "tapir" => Ok(Self::Tapir),
            "table-shift" | "tableshift" => Ok(Self::TableShift),
            _ => Err(CipherError::UnknownMethod(s.to_string())),
        }
    }
}
