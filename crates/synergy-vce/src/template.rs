//! Bundled reference voice.
//!
//! [`VRAM_EDATA`] mirrors an editor-RAM snapshot: a short preamble followed
//! by a single-oscillator default voice starting at [`OFF_VRAM_EDATA`].

use crate::error::{Error, Result};

/// Byte offset of the voice data within [`VRAM_EDATA`].
pub const OFF_VRAM_EDATA: usize = 16;

#[rustfmt::skip]
pub static VRAM_EDATA: &[u8] = &[
    // preamble
    0x53, 0x59, 0x4e, 0x45, 0x52, 0x47, 0x59, 0x20, 0x56, 0x52, 0x41, 0x4d,
    0x00, 0x01, 0x00, 0x00,
    // VNAME "DEFAULT "
    0x44, 0x45, 0x46, 0x41, 0x55, 0x4c, 0x54, 0x20,
    // VOITAB VTRANS VTCENT VTSENS VIBRAT VIBDEL VIBDEP
    0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00,
    // FILTER
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // oscillator 1 frequency envelope
    0x01, 0x01, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // oscillator 1 amplitude envelope
    0x00, 0x00, 0x03, 0x02, 0x00,
    0x37, 0x00, 0x00, 0x00, 0x7f, 0x7f, 0x08, 0x08, 0x37, 0x37, 0x10, 0x10,
    // oscillator 1 filter
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // checksum
    0x67,
];

/// The encoded template voice, without the preamble.
pub fn template_bytes() -> Result<&'static [u8]> {
    VRAM_EDATA
        .get(OFF_VRAM_EDATA..)
        .ok_or(Error::TemplateOffset {
            offset: OFF_VRAM_EDATA,
            len: VRAM_EDATA.len(),
        })
}
