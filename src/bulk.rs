//! Brute-force decryption over small keyspaces.
//!
//! Caesar (shifts 1..=25) and rail fence (rails 2..=10) are the only
//! methods whose keyspace is worth enumerating. Every candidate is returned;
//! picking the right one is left to the reader (or to `codebreaker rank`).

use crate::cipher::{caesar, RailFence, TextCipher};
use crate::method::Method;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::trace;

pub const CAESAR_SHIFTS: RangeInclusive<i64> = 1..=25;
pub const RAIL_COUNTS: RangeInclusive<usize> = 2..=10;

/// Shown when bulk decryption is requested for any other method
pub const UNSUPPORTED_MESSAGE: &str = "Bulk decryption not available for this method.";

/// One decoded candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkCandidate {
    pub param: i64,
    pub text: String,
}

/// All candidates of one bulk search, in ascending parameter order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub method: Method,
    pub label: &'static str,
    pub candidates: Vec<BulkCandidate>,
}

impl BulkReport {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn find(&self, param: i64) -> Option<&str> {
        self.candidates
            .iter()
            .find(|c| c.param == param)
            .map(|c| c.text.as_str())
    }
}

/// One `"<Label> <n>: <text>"` line per candidate, no trailing newline
impl fmt::Display for BulkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}: {}", self.label, candidate.param, candidate.text)?;
        }
        Ok(())
    }
}

/// Result of a bulk request for an arbitrary method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    Report(BulkReport),
    Unsupported(Method),
}

impl fmt::Display for BulkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkOutcome::Report(report) => fmt::Display::fmt(report, f),
            BulkOutcome::Unsupported(_) => f.write_str(UNSUPPORTED_MESSAGE),
        }
    }
}

/// Decode with every shift in 1..=25
pub fn bulk_caesar_decrypt(text: &str) -> BulkReport {
    let candidates = CAESAR_SHIFTS
        .map(|shift| {
            let decoded = caesar(text, -shift);
            trace!(shift, candidate = %decoded, "caesar candidate");
            BulkCandidate {
                param: shift,
                text: decoded,
            }
        })
        .collect();
    BulkReport {
        method: Method::Caesar,
        label: "Shift",
        candidates,
    }
}

/// Decode with every rail count in 2..=10
pub fn bulk_rail_fence_decrypt(text: &str) -> BulkReport {
    let candidates = RAIL_COUNTS
        .filter_map(|rails| RailFence::new(rails).ok())
        .map(|cipher| {
            let decoded = cipher.decrypt(text);
            trace!(rails = cipher.rails(), candidate = %decoded, "rail fence candidate");
            BulkCandidate {
                param: cipher.rails() as i64,
                text: decoded,
            }
        })
        .collect();
    BulkReport {
        method: Method::RailFence,
        label: "Rails",
        candidates,
    }
}

pub fn bulk_decrypt(method: Method, text: &str) -> BulkOutcome {
    match method {
        Method::Caesar => BulkOutcome::Report(bulk_caesar_decrypt(text)),
        Method::RailFence => BulkOutcome::Report(bulk_rail_fence_decrypt(text)),
        other => BulkOutcome::Unsupported(other),
    }
}
