//! Voice parameter codec for the Synergy synthesizer.
//!
//! Turns what an editor displays into what the hardware stores, and back
//! into a canonical voice for export:
//!
//! - **[`ScaleTable`]** - nonlinear code/value tables with ceiling and nearest search
//! - **[`unscale_detune`]**, **[`unscale_amp_env_value`]** - value remaps
//! - **[`RoutingResolver`]** - per-oscillator OPTCH from patch types or DX algorithms
//! - **[`Canonicalizer`]** - blank voice templates and round-trip compaction
//!
//! # Quick Start
//!
//! ```ignore
//! use synergy_voicing::{apply_dx_algorithm, unscale_freq_time_value, Canonicalizer};
//!
//! let canon = Canonicalizer::default();
//! let mut voice = canon.blank_voice()?;
//! voice.set_oscillator_count(6);
//! apply_dx_algorithm(&mut voice, 0, 0)?;
//! voice.envelopes[0].freq_envelope.table[1] = unscale_freq_time_value(250);
//! println!("{}", canon.to_canonical_text(&voice));
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::{DegeneratePolicy, VoicingConfig};

mod scale;
pub use scale::{
    ceiling_search, checked_unscale_amp_time_value, checked_unscale_freq_time_value,
    nearest_search, unscale_amp_time_value, unscale_freq_time_value, ScaleTable, AMP_TIME_SCALE,
    FREQ_TIME_SCALE, FREQ_VALUE_SCALE,
};

mod transform;
pub use transform::{
    checked_unscale_amp_env_value, checked_unscale_detune, scale_amp_env_value, scale_detune,
    unscale_amp_env_value, unscale_detune, unscale_freq_env_value, AMP_ENV_BIAS,
    DETUNE_LINEAR_LIMIT,
};

mod routing;
pub use routing::{
    apply_dx_algorithm, apply_patch_type, dx_algorithm_row, is_degenerate, patch_type_row,
    Advisory, RoutingResolver, RoutingRow, DX_ALGORITHM_COUNT, DX_ALGO_NO_FEEDBACK_PER_OSC_TABLE,
    PATCH_TYPE_PER_OSC_TABLE,
};

mod canonical;
pub use canonical::Canonicalizer;
