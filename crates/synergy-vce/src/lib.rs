//! Voice data model and binary codec for the Synergy synthesizer.
//!
//! - **[`Voice`]** - header, per-oscillator envelope pairs, filter coefficients
//! - **[`VoiceCodec`]** - encode/decode contract used by the editing core
//! - **[`VceCodec`]** - the VCE binary format
//! - **[`VRAM_EDATA`]** - bundled single-oscillator template voice
//!
//! # Example
//!
//! ```ignore
//! use synergy_vce::{template_bytes, VceCodec, VoiceCodec};
//!
//! let voice = VceCodec.decode(template_bytes()?)?;
//! let bytes = VceCodec.encode(&voice, voice.name())?;
//! ```

pub mod error;
pub use error::{Error, Result};

mod codec;
pub use codec::{vce_checksum, VceCodec, VoiceCodec};

mod template;
pub use template::{template_bytes, OFF_VRAM_EDATA, VRAM_EDATA};

mod voice;
pub use voice::{
    AmpEnvelope, Envelope, FilterCoefficients, FreqEnvelope, Voice, VoiceHead, BYTES_PER_POINT,
    FILTER_LEN, MAX_OSCILLATORS, MAX_POINTS, MAX_TABLE_LEN, NAME_LEN, OPTCH_UNUSED,
};
