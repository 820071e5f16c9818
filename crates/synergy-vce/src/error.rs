//! Error types for synergy-vce.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or writing the binary voice format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input ended before a complete voice was read.
    #[error("Unexpected end of voice data at byte {offset}")]
    UnexpectedEof { offset: usize },

    /// Declared oscillator count outside 1..=16.
    #[error("Invalid oscillator count: {0}. Must be between 1 and 16")]
    InvalidOscillatorCount(usize),

    /// Envelope point count outside 1..=16.
    #[error("Invalid point count {points} in oscillator {slot}")]
    InvalidPointCount { slot: usize, points: u8 },

    /// Envelope table holds fewer bytes than its point count needs.
    #[error("Envelope table too short in oscillator {slot}: expected {expected} bytes, found {found}")]
    TableTooShort {
        slot: usize,
        expected: usize,
        found: usize,
    },

    /// Voice declares more oscillators than it carries envelopes.
    #[error("Missing envelope for oscillator {slot}")]
    MissingEnvelope { slot: usize },

    /// Voice declares more oscillators than it carries filter records.
    #[error("Missing filter coefficients for oscillator {slot}")]
    MissingFilter { slot: usize },

    #[error("Checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    ChecksumMismatch { expected: u8, found: u8 },

    #[error("{0} trailing bytes after voice data")]
    TrailingBytes(usize),

    /// Template data offset lies outside the bundled blob.
    #[error("Template offset {offset} outside blob of {len} bytes")]
    TemplateOffset { offset: usize, len: usize },
}
