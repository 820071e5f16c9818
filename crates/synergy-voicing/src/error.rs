//! Error types for synergy-voicing.

use thiserror::Error;

/// Result type alias for voicing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or canonicalizing a voice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// FM algorithm id outside 0..=31.
    #[error("Invalid DX algorithm: {0}. Must be between 0 and 31")]
    InvalidAlgorithm(u8),

    /// Patch type id outside the table's 1-based range.
    #[error("Invalid patch type: {0}")]
    InvalidPatchType(u8),

    /// Algorithm has no routing translation and the policy rejects it.
    #[error("DX algorithm {0} has no routing translation")]
    DegenerateAlgorithm(u8),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Failure from the voice codec during encode or decode.
    #[error("Codec: {0}")]
    Codec(#[from] synergy_vce::Error),
}
