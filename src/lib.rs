//! # Synergize - Synergy Voice Editing Core
//!
//! Umbrella crate over the voice editing subsystems:
//! - **synergy-vce** - voice data model and the VCE binary codec
//! - **synergy-voicing** - scale tables, oscillator routing, canonical compaction
//!
//! ## Quick Start
//!
//! ```ignore
//! use synergize::prelude::*;
//!
//! let canon = Canonicalizer::default();
//! let mut voice = canon.blank_voice()?;
//!
//! // Eight oscillators, routed as DX algorithm 5 (0-based 4)
//! voice.set_oscillator_count(8);
//! let advisories = apply_dx_algorithm(&mut voice, 4, 0)?;
//!
//! // Displayed 250ms attack into the first frequency breakpoint
//! voice.envelopes[0].freq_envelope.table[1] = unscale_freq_time_value(250);
//!
//! let bytes = export(&canon, &voice)?;
//! ```

/// Re-export of synergy-vce for direct access
pub use synergy_vce as vce;

/// Re-export of synergy-voicing for direct access
pub use synergy_voicing as voicing;

pub mod error;
pub use error::{Error, Result};

pub use synergy_vce::{
    AmpEnvelope, Envelope, FilterCoefficients, FreqEnvelope, VceCodec, Voice, VoiceCodec,
    VoiceHead, MAX_OSCILLATORS, MAX_POINTS, OPTCH_UNUSED,
};

pub use synergy_voicing::{
    apply_dx_algorithm, apply_patch_type, ceiling_search, nearest_search, scale_detune,
    unscale_amp_env_value, unscale_amp_time_value, unscale_detune, unscale_freq_env_value,
    unscale_freq_time_value, Advisory, Canonicalizer, DegeneratePolicy, RoutingResolver,
    ScaleTable, VoicingConfig, AMP_TIME_SCALE, FREQ_TIME_SCALE, FREQ_VALUE_SCALE,
};

/// Compact `voice` and encode the canonical form for the device.
///
/// The encoded bytes are those of the compacted voice, so exporting the same
/// edit twice yields identical output.
pub fn export<C: VoiceCodec>(canon: &Canonicalizer<C>, voice: &Voice) -> Result<Vec<u8>> {
    let compacted = canon.compact(voice)?;
    let bytes = canon.codec().encode(&compacted, &compacted.head.name)?;
    tracing::debug!("Exported voice {:?}: {} bytes", compacted.name(), bytes.len());
    Ok(bytes)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::export;
    pub use crate::{Error, Result};

    pub use synergy_vce::{Envelope, VceCodec, Voice, VoiceCodec};

    pub use synergy_voicing::{
        apply_dx_algorithm, apply_patch_type, nearest_search, unscale_amp_env_value,
        unscale_amp_time_value, unscale_detune, unscale_freq_env_value, unscale_freq_time_value,
        Advisory, Canonicalizer, DegeneratePolicy, RoutingResolver, VoicingConfig,
        AMP_TIME_SCALE, FREQ_TIME_SCALE, FREQ_VALUE_SCALE,
    };
}
