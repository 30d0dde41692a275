//! Crate-level error types.

use std::fmt;

/// Errors produced by the tilepick crate.
///
/// Picking queries themselves never fail; these only surface while
/// loading configuration or building per-tile feature tables.
#[derive(Debug)]
pub enum PickError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Per-feature metadata violates its ordering or length invariants.
    InvalidFeatureData(String),
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidFeatureData(msg) => {
                write!(f, "invalid feature data: {msg}")
            }
        }
    }
}

impl std::error::Error for PickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
