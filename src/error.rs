//! Error types for simprint.

use thiserror::Error;

/// Errors that can occur when comparing or parsing fingerprints.
///
/// Fingerprinting itself never fails; these only cover precondition
/// violations on raw byte slices and hex input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimhashError {
    /// The two byte slices handed to a distance computation differ in length.
    #[error("length mismatch: left has {left} bytes, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A hex string could not be decoded into a 32-byte fingerprint.
    #[error("invalid hex fingerprint: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for SimhashError {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidHex(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimhashError>;
