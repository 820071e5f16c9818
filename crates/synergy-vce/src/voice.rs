//! In-memory voice model.
//!
//! A [`Voice`] is one complete patch: a header, one [`Envelope`] pair per
//! oscillator and one [`FilterCoefficients`] record per oscillator. Field
//! names follow the hardware parameter mnemonics (VOITAB, OPTCH, ...) in
//! their doc comments so that dumps can be cross-checked against the
//! hardware documentation.

use serde::{Deserialize, Serialize};

/// Maximum oscillators a voice can declare.
pub const MAX_OSCILLATORS: usize = 16;

/// Maximum breakpoints per envelope.
pub const MAX_POINTS: usize = 16;

/// Bytes per breakpoint in an envelope table.
pub const BYTES_PER_POINT: usize = 4;

/// Table size that holds [`MAX_POINTS`] breakpoints.
pub const MAX_TABLE_LEN: usize = MAX_POINTS * BYTES_PER_POINT;

/// Length of the voice name field.
pub const NAME_LEN: usize = 8;

/// Coefficients per filter record.
pub const FILTER_LEN: usize = 32;

/// Routing byte for an oscillator slot that takes no part in the patch.
pub const OPTCH_UNUSED: u8 = 4;

/// Voice header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceHead {
    /// VNAME - up to 8 ASCII characters.
    pub name: String,
    /// VOITAB - declared oscillator count minus one.
    pub voitab: u8,
    /// VTRANS - transpose.
    pub transpose: i8,
    /// VTCENT - timbre center.
    pub timbre_center: u8,
    /// VTSENS - timbre sensitivity.
    pub timbre_sensitivity: i8,
    /// VIBRAT
    pub vibrato_rate: u8,
    /// VIBDEL
    pub vibrato_delay: u8,
    /// VIBDEP
    pub vibrato_depth: u8,
    /// FILTER - per-oscillator filter selector.
    pub filter: [i8; MAX_OSCILLATORS],
}

impl VoiceHead {
    /// Declared oscillator count (VOITAB + 1).
    pub fn oscillator_count(&self) -> usize {
        self.voitab as usize + 1
    }
}

/// Frequency envelope of one oscillator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreqEnvelope {
    /// OPTCH - how this oscillator's output combines with the others.
    pub optch: u8,
    /// OHARM - harmonic number.
    pub harmonic: i8,
    /// FDETUN - stored detune code.
    pub detune: i8,
    /// FENVL - low-frequency mode flag.
    pub low_freq: u8,
    /// Voice table selector.
    pub table_select: u8,
    /// NPOINTS - breakpoints in use.
    pub npoints: u8,
    pub sustain_point: u8,
    pub loop_point: u8,
    /// Packed breakpoints, four bytes each.
    pub table: Vec<u8>,
}

/// Amplitude envelope of one oscillator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmpEnvelope {
    pub optch: u8,
    /// Voice table selector.
    pub table_select: u8,
    /// NPOINTS - breakpoints in use.
    pub npoints: u8,
    pub sustain_point: u8,
    pub loop_point: u8,
    /// Packed breakpoints, four bytes each.
    pub table: Vec<u8>,
}

/// The envelope pair for one oscillator slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub freq_envelope: FreqEnvelope,
    pub amp_envelope: AmpEnvelope,
}

impl Envelope {
    /// Rewrite the declared point counts without touching the tables.
    pub fn set_point_counts(&mut self, freq_points: u8, amp_points: u8) {
        self.freq_envelope.npoints = freq_points;
        self.amp_envelope.npoints = amp_points;
    }
}

/// One oscillator's filter coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCoefficients(pub [i8; FILTER_LEN]);

impl Default for FilterCoefficients {
    fn default() -> Self {
        Self([0; FILTER_LEN])
    }
}

/// A complete voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub head: VoiceHead,
    pub envelopes: Vec<Envelope>,
    pub filters: Vec<FilterCoefficients>,
}

impl Voice {
    /// Voice name with trailing space or NUL padding removed.
    pub fn name(&self) -> &str {
        self.head.name.trim_end_matches([' ', '\0'])
    }

    pub fn oscillator_count(&self) -> usize {
        self.head.oscillator_count()
    }

    /// Rewrite the declared oscillator count (VOITAB).
    ///
    /// Only the header changes. Envelopes beyond the previous count must
    /// already be provisioned, as they are in a blank voice.
    pub fn set_oscillator_count(&mut self, count: u8) {
        self.head.voitab = count.saturating_sub(1);
    }
}
