//! Oscillator routing.
//!
//! Writes the OPTCH byte of every oscillator's frequency envelope, either
//! from a named patch type or from a DX-style FM algorithm. Both sources are
//! static translation matrices: one row of sixteen OPTCH bytes per id.
//!
//! Slots a row does not use carry [`OPTCH_UNUSED`].

use crate::config::{DegeneratePolicy, VoicingConfig};
use crate::{Error, Result};
use synergy_vce::{Voice, MAX_OSCILLATORS, OPTCH_UNUSED};
use tracing::{debug, error, warn};

/// Routing row for one patch type or algorithm.
pub type RoutingRow = [u8; MAX_OSCILLATORS];

const U: u8 = OPTCH_UNUSED;

/// Row of a DX algorithm with no translation yet.
const UNMAPPED: RoutingRow = [U; MAX_OSCILLATORS];

/// Number of DX algorithms.
pub const DX_ALGORITHM_COUNT: usize = 32;

/// Patch types, indexed by `patch_type - 1`.
#[rustfmt::skip]
pub static PATCH_TYPE_PER_OSC_TABLE: [RoutingRow; 10] = [
    // 1: sixteen additive carriers
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    // 2: eight two-oscillator FM pairs
    [100, 1, 100, 1, 100, 1, 100, 1, 100, 1, 100, 1, 100, 1, 100, 1],
    // 3: five three-oscillator FM stacks
    [100, 97, 1, 100, 97, 1, 100, 97, 1, 100, 97, 1, 100, 97, 1, U],
    // 4: four four-oscillator FM stacks
    [100, 97, 97, 1, 100, 97, 97, 1, 100, 97, 97, 1, 100, 97, 97, 1],
    // 5: eight ring-modulated pairs
    [100, 33, 100, 33, 100, 33, 100, 33, 100, 33, 100, 33, 100, 33, 100, 33],
    // 6: five pairs of modulators into one carrier
    [100, 76, 1, 100, 76, 1, 100, 76, 1, 100, 76, 1, 100, 76, 1, U],
    // 7: eight additive carriers
    [1, 1, 1, 1, 1, 1, 1, 1, U, U, U, U, U, U, U, U],
    // 8: four two-oscillator FM pairs
    [100, 1, 100, 1, 100, 1, 100, 1, U, U, U, U, U, U, U, U],
    // 9: two four-oscillator FM stacks
    [100, 97, 97, 1, 100, 97, 97, 1, U, U, U, U, U, U, U, U],
    // 10: single carrier
    [1, U, U, U, U, U, U, U, U, U, U, U, U, U, U, U],
];

/// DX algorithms 1..=32 (indexed 0..=31), feedback not modeled.
#[rustfmt::skip]
pub static DX_ALGO_NO_FEEDBACK_PER_OSC_TABLE: [RoutingRow; DX_ALGORITHM_COUNT] = [
    [100, 97, 97, 1, 100, 1, U, U, U, U, U, U, U, U, U, U],   // DX 1
    [100, 97, 97, 1, 100, 1, U, U, U, U, U, U, U, U, U, U],   // DX 2
    [100, 97, 33, 100, 97, 1, U, U, U, U, U, U, U, U, U, U],  // DX 3
    [100, 97, 33, 100, 97, 1, U, U, U, U, U, U, U, U, U, U],  // DX 4
    [100, 76, 76, 1, 100, 76, 76, 1, U, U, U, U, U, U, U, U], // DX 5
    [100, 76, 76, 1, 100, 76, 76, 1, U, U, U, U, U, U, U, U], // DX 6
    [100, 97, 76, 33, 100, 33, U, U, U, U, U, U, U, U, U, U], // DX 7
    [100, 97, 76, 33, 100, 33, U, U, U, U, U, U, U, U, U, U], // DX 8
    [100, 97, 76, 33, 100, 33, U, U, U, U, U, U, U, U, U, U], // DX 9
    UNMAPPED, // DX 10
    UNMAPPED, // DX 11
    UNMAPPED, // DX 12
    UNMAPPED, // DX 13
    UNMAPPED, // DX 14
    UNMAPPED, // DX 15
    UNMAPPED, // DX 16
    UNMAPPED, // DX 17
    UNMAPPED, // DX 18
    UNMAPPED, // DX 19
    UNMAPPED, // DX 20
    UNMAPPED, // DX 21
    UNMAPPED, // DX 22
    UNMAPPED, // DX 23
    UNMAPPED, // DX 24
    UNMAPPED, // DX 25
    UNMAPPED, // DX 26
    UNMAPPED, // DX 27
    UNMAPPED, // DX 28
    UNMAPPED, // DX 29
    UNMAPPED, // DX 30
    UNMAPPED, // DX 31
    UNMAPPED, // DX 32
];

/// Non-fatal conditions reported by a successful routing translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// DX operator feedback was requested but is not modeled.
    UnsupportedFeedback(u8),
    /// The algorithm's row is all placeholders; every slot became unused.
    DegenerateAlgorithm(u8),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::UnsupportedFeedback(amount) => {
                write!(f, "unhandled DX feedback {} ignored", amount)
            }
            Advisory::DegenerateAlgorithm(algorithm) => {
                write!(f, "unhandled DX algorithm {}", algorithm)
            }
        }
    }
}

/// Routing row for a 1-based patch type.
pub fn patch_type_row(patch_type: u8) -> Option<&'static RoutingRow> {
    let index = (patch_type as usize).checked_sub(1)?;
    PATCH_TYPE_PER_OSC_TABLE.get(index)
}

/// Routing row for a 0-based DX algorithm.
pub fn dx_algorithm_row(algorithm: u8) -> Option<&'static RoutingRow> {
    DX_ALGO_NO_FEEDBACK_PER_OSC_TABLE.get(algorithm as usize)
}

/// True when every slot of `row` is unused.
pub fn is_degenerate(row: &RoutingRow) -> bool {
    row.iter().all(|optch| *optch == OPTCH_UNUSED)
}

/// Applies routing rows to a voice under a [`DegeneratePolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingResolver {
    degenerate: DegeneratePolicy,
}

impl RoutingResolver {
    pub fn new(config: &VoicingConfig) -> Self {
        Self {
            degenerate: config.degenerate_algorithms,
        }
    }

    /// Set every oscillator's frequency-envelope OPTCH from a patch type.
    pub fn apply_patch_type(&self, voice: &mut Voice, patch_type: u8) -> Result<()> {
        let row = patch_type_row(patch_type).ok_or(Error::InvalidPatchType(patch_type))?;
        write_row(voice, row);
        Ok(())
    }

    /// Translate a DX algorithm into frequency-envelope OPTCH bytes.
    ///
    /// Nothing is written when `algorithm` is out of range, or when the row
    /// is degenerate and the policy is [`DegeneratePolicy::Reject`].
    pub fn apply_dx_algorithm(
        &self,
        voice: &mut Voice,
        algorithm: u8,
        feedback: u8,
    ) -> Result<Vec<Advisory>> {
        let mut advisories = Vec::new();
        if feedback != 0 {
            warn!("Limitation: unhandled DX feedback: {}", feedback);
            advisories.push(Advisory::UnsupportedFeedback(feedback));
        }

        let row = dx_algorithm_row(algorithm).ok_or(Error::InvalidAlgorithm(algorithm))?;

        if is_degenerate(row) {
            match self.degenerate {
                DegeneratePolicy::Reject => return Err(Error::DegenerateAlgorithm(algorithm)),
                DegeneratePolicy::Apply => {
                    error!("Limitation: unhandled DX algorithm: {}", algorithm);
                    advisories.push(Advisory::DegenerateAlgorithm(algorithm));
                }
            }
        }

        write_row(voice, row);
        Ok(advisories)
    }
}

fn write_row(voice: &mut Voice, row: &RoutingRow) {
    if voice.envelopes.len() < row.len() {
        debug!(
            "Voice has {} envelopes, routing only those slots",
            voice.envelopes.len()
        );
    }
    for (env, optch) in voice.envelopes.iter_mut().zip(row) {
        env.freq_envelope.optch = *optch;
    }
}

/// [`RoutingResolver::apply_patch_type`] with the default policy.
pub fn apply_patch_type(voice: &mut Voice, patch_type: u8) -> Result<()> {
    RoutingResolver::default().apply_patch_type(voice, patch_type)
}

/// [`RoutingResolver::apply_dx_algorithm`] with the default policy.
pub fn apply_dx_algorithm(voice: &mut Voice, algorithm: u8, feedback: u8) -> Result<Vec<Advisory>> {
    RoutingResolver::default().apply_dx_algorithm(voice, algorithm, feedback)
}
