//! Blank voices and canonical compaction.
//!
//! Editing works on an over-provisioned voice: sixteen envelopes with
//! full-size tables, so that activating oscillators or breakpoints is only
//! a matter of rewriting VOITAB and NPOINTS. Before export the voice is
//! sent through the codec and back, which keeps exactly what the wire
//! format can carry.

use crate::config::VoicingConfig;
use crate::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::borrow::Cow;
use synergy_vce::{
    FilterCoefficients, VceCodec, Voice, VoiceCodec, MAX_OSCILLATORS, MAX_TABLE_LEN,
    OFF_VRAM_EDATA, VRAM_EDATA,
};

/// Produces blank voices and canonical forms through a [`VoiceCodec`].
#[derive(Debug, Clone)]
pub struct Canonicalizer<C = VceCodec> {
    codec: C,
    config: VoicingConfig,
    blob: Cow<'static, [u8]>,
    offset: usize,
}

impl Default for Canonicalizer<VceCodec> {
    fn default() -> Self {
        Self::new(VceCodec)
    }
}

impl<C: VoiceCodec> Canonicalizer<C> {
    /// Canonicalizer using the bundled template and default config.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            config: VoicingConfig::default(),
            blob: Cow::Borrowed(VRAM_EDATA),
            offset: OFF_VRAM_EDATA,
        }
    }

    pub fn with_config(codec: C, config: VoicingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(codec)
        })
    }

    /// Replace the template blob; voice data starts at `offset`.
    pub fn with_template(mut self, blob: impl Into<Cow<'static, [u8]>>, offset: usize) -> Self {
        self.blob = blob.into();
        self.offset = offset;
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn config(&self) -> &VoicingConfig {
        &self.config
    }

    /// Decode the template and provision it for editing.
    ///
    /// The template's first envelope is replicated into all sixteen slots,
    /// every envelope table is replaced by a zeroed 64-byte buffer, and the
    /// filter records are filled up to sixteen.
    pub fn blank_voice(&self) -> Result<Voice> {
        let bytes = self
            .blob
            .get(self.offset..)
            .ok_or(synergy_vce::Error::TemplateOffset {
                offset: self.offset,
                len: self.blob.len(),
            })?;
        let mut voice = self.codec.decode(bytes)?;

        let first = voice
            .envelopes
            .first()
            .cloned()
            .ok_or(synergy_vce::Error::MissingEnvelope { slot: 0 })?;
        voice.envelopes.truncate(1);
        voice.envelopes.resize(MAX_OSCILLATORS, first);
        for env in &mut voice.envelopes {
            env.amp_envelope.table = vec![0; MAX_TABLE_LEN];
            env.freq_envelope.table = vec![0; MAX_TABLE_LEN];
        }
        voice
            .filters
            .resize(MAX_OSCILLATORS, FilterCoefficients::default());

        Ok(voice)
    }

    /// Encode then decode, dropping whatever the wire format cannot carry.
    pub fn compact(&self, voice: &Voice) -> Result<Voice> {
        let bytes = self.codec.encode(voice, &voice.head.name)?;
        tracing::debug!("Compacting voice {:?} through {} bytes", voice.name(), bytes.len());
        Ok(self.codec.decode(&bytes)?)
    }

    /// Indented JSON of the compacted voice.
    ///
    /// Never fails: errors come back as `ERROR: ...` text for display.
    pub fn to_canonical_text(&self, voice: &Voice) -> String {
        match self.canonical_text(voice) {
            Ok(text) => text,
            Err(message) => {
                tracing::warn!("Canonical text unavailable: {}", message);
                format!("ERROR: {}", message)
            }
        }
    }

    fn canonical_text(&self, voice: &Voice) -> std::result::Result<String, String> {
        let compacted = self.compact(voice).map_err(|e| e.to_string())?;

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.config.text_indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        compacted.serialize(&mut ser).map_err(|e| e.to_string())?;
        String::from_utf8(buf).map_err(|e| e.to_string())
    }
}
