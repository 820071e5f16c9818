//! Centralized error type for the synergize umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Voicing(#[from] synergy_voicing::Error),

    #[error("VCE: {0}")]
    Vce(#[from] synergy_vce::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
