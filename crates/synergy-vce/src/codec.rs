//! Binary VCE reader/writer.
//!
//! Wire layout, all single bytes:
//!
//! ```text
//! VNAME[8] VOITAB VTRANS VTCENT VTSENS VIBRAT VIBDEL VIBDEP FILTER[16]
//! per oscillator:
//!   OPTCH OHARM FDETUN FENVL TABSEL NPOINTS SUSTAIN LOOP  table[NPOINTS*4]
//!   OPTCH TABSEL NPOINTS SUSTAIN LOOP                     table[NPOINTS*4]
//! per oscillator:
//!   filter[32]
//! checksum
//! ```
//!
//! The writer emits exactly VOITAB+1 envelopes and filter records and only
//! the meaningful `NPOINTS * 4` bytes of each table, so anything the
//! in-memory model over-provisions is dropped on the way out.

use crate::error::{Error, Result};
use crate::voice::{
    AmpEnvelope, Envelope, FilterCoefficients, FreqEnvelope, Voice, VoiceHead, BYTES_PER_POINT,
    FILTER_LEN, MAX_OSCILLATORS, MAX_POINTS, NAME_LEN,
};

/// Encode/decode contract between the editing core and a voice file format.
pub trait VoiceCodec {
    /// Parse a complete voice from `bytes`.
    fn decode(&self, bytes: &[u8]) -> Result<Voice>;

    /// Serialize `voice` under `name`.
    fn encode(&self, voice: &Voice, name: &str) -> Result<Vec<u8>>;
}

/// The Synergy VCE binary format.
#[derive(Debug, Clone, Copy, Default)]
pub struct VceCodec;

impl VoiceCodec for VceCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Voice> {
        read_vce(bytes)
    }

    fn encode(&self, voice: &Voice, name: &str) -> Result<Vec<u8>> {
        write_vce(voice, name)
    }
}

/// 7-bit two's complement of the byte sum.
pub fn vce_checksum(data: &[u8]) -> u8 {
    let sum: u32 = data.iter().map(|b| *b as u32).sum();
    let checksum = !((sum & 0xff) as u8) & 0x7f;
    checksum + 1
}

// ---------------------------------------------------------------------------
// VceReader - cursor over a byte slice
// ---------------------------------------------------------------------------

struct VceReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> VceReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8> {
        let v = *self
            .data
            .get(self.pos)
            .ok_or(Error::UnexpectedEof { offset: self.pos })?;
        self.pos += 1;
        Ok(v)
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.pos + n > self.data.len() {
            return Err(Error::UnexpectedEof { offset: self.pos });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[i8; N]> {
        let mut out = [0i8; N];
        for (dst, src) in out.iter_mut().zip(self.read_bytes(N)?) {
            *dst = *src as i8;
        }
        Ok(out)
    }

    fn read_npoints(&mut self, slot: usize) -> Result<u8> {
        let npoints = self.read_u8()?;
        check_npoints(slot, npoints)?;
        Ok(npoints)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

fn read_vce(bytes: &[u8]) -> Result<Voice> {
    let Some((&stored, body)) = bytes.split_last() else {
        return Err(Error::UnexpectedEof { offset: 0 });
    };
    let mut r = VceReader::new(body);

    let head = read_head(&mut r)?;
    let count = head.oscillator_count();

    let mut envelopes = Vec::with_capacity(count);
    for slot in 0..count {
        envelopes.push(read_envelope(&mut r, slot)?);
    }

    let mut filters = Vec::with_capacity(count);
    for _ in 0..count {
        filters.push(FilterCoefficients(r.read_array::<FILTER_LEN>()?));
    }

    if r.remaining() > 0 {
        return Err(Error::TrailingBytes(r.remaining()));
    }

    let expected = vce_checksum(body);
    if expected != stored {
        return Err(Error::ChecksumMismatch {
            expected,
            found: stored,
        });
    }

    Ok(Voice {
        head,
        envelopes,
        filters,
    })
}

fn read_head(r: &mut VceReader) -> Result<VoiceHead> {
    let name = r.read_bytes(NAME_LEN)?.iter().map(|b| *b as char).collect();
    let voitab = r.read_u8()?;
    if voitab as usize >= MAX_OSCILLATORS {
        return Err(Error::InvalidOscillatorCount(voitab as usize + 1));
    }
    Ok(VoiceHead {
        name,
        voitab,
        transpose: r.read_i8()?,
        timbre_center: r.read_u8()?,
        timbre_sensitivity: r.read_i8()?,
        vibrato_rate: r.read_u8()?,
        vibrato_delay: r.read_u8()?,
        vibrato_depth: r.read_u8()?,
        filter: r.read_array::<MAX_OSCILLATORS>()?,
    })
}

fn read_envelope(r: &mut VceReader, slot: usize) -> Result<Envelope> {
    let optch = r.read_u8()?;
    let harmonic = r.read_i8()?;
    let detune = r.read_i8()?;
    let low_freq = r.read_u8()?;
    let table_select = r.read_u8()?;
    let npoints = r.read_npoints(slot)?;
    let sustain_point = r.read_u8()?;
    let loop_point = r.read_u8()?;
    let table = r.read_bytes(npoints as usize * BYTES_PER_POINT)?.to_vec();
    let freq_envelope = FreqEnvelope {
        optch,
        harmonic,
        detune,
        low_freq,
        table_select,
        npoints,
        sustain_point,
        loop_point,
        table,
    };

    let optch = r.read_u8()?;
    let table_select = r.read_u8()?;
    let npoints = r.read_npoints(slot)?;
    let sustain_point = r.read_u8()?;
    let loop_point = r.read_u8()?;
    let table = r.read_bytes(npoints as usize * BYTES_PER_POINT)?.to_vec();
    let amp_envelope = AmpEnvelope {
        optch,
        table_select,
        npoints,
        sustain_point,
        loop_point,
        table,
    };

    Ok(Envelope {
        freq_envelope,
        amp_envelope,
    })
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

fn write_vce(voice: &Voice, name: &str) -> Result<Vec<u8>> {
    let head = &voice.head;
    let count = head.oscillator_count();
    if count > MAX_OSCILLATORS {
        return Err(Error::InvalidOscillatorCount(count));
    }

    let mut out = Vec::with_capacity(256);
    out.extend_from_slice(&name_field(name));
    out.push(head.voitab);
    out.push(head.transpose as u8);
    out.push(head.timbre_center);
    out.push(head.timbre_sensitivity as u8);
    out.push(head.vibrato_rate);
    out.push(head.vibrato_delay);
    out.push(head.vibrato_depth);
    out.extend(head.filter.iter().map(|f| *f as u8));

    for slot in 0..count {
        let env = voice
            .envelopes
            .get(slot)
            .ok_or(Error::MissingEnvelope { slot })?;

        let freq = &env.freq_envelope;
        out.extend_from_slice(&[
            freq.optch,
            freq.harmonic as u8,
            freq.detune as u8,
            freq.low_freq,
            freq.table_select,
            freq.npoints,
            freq.sustain_point,
            freq.loop_point,
        ]);
        out.extend_from_slice(points(slot, freq.npoints, &freq.table)?);

        let amp = &env.amp_envelope;
        out.extend_from_slice(&[
            amp.optch,
            amp.table_select,
            amp.npoints,
            amp.sustain_point,
            amp.loop_point,
        ]);
        out.extend_from_slice(points(slot, amp.npoints, &amp.table)?);
    }

    for slot in 0..count {
        let filter = voice.filters.get(slot).ok_or(Error::MissingFilter { slot })?;
        out.extend(filter.0.iter().map(|c| *c as u8));
    }

    out.push(vce_checksum(&out));
    tracing::debug!("Encoded voice {:?}: {} oscillators, {} bytes", name, count, out.len());
    Ok(out)
}

/// The meaningful prefix of an envelope table.
fn points(slot: usize, npoints: u8, table: &[u8]) -> Result<&[u8]> {
    check_npoints(slot, npoints)?;
    let expected = npoints as usize * BYTES_PER_POINT;
    table.get(..expected).ok_or(Error::TableTooShort {
        slot,
        expected,
        found: table.len(),
    })
}

fn check_npoints(slot: usize, npoints: u8) -> Result<()> {
    if npoints == 0 || npoints as usize > MAX_POINTS {
        return Err(Error::InvalidPointCount {
            slot,
            points: npoints,
        });
    }
    Ok(())
}

/// VNAME: one byte per character (Latin-1), space padded, truncated to 8.
///
/// Decoded names map every byte to the char of the same code point, so a
/// decoded name is written back byte for byte. Chars above U+00FF become `?`.
fn name_field(name: &str) -> [u8; NAME_LEN] {
    let mut field = [b' '; NAME_LEN];
    for (dst, c) in field.iter_mut().zip(name.chars()) {
        *dst = u8::try_from(c).unwrap_or(b'?');
    }
    field
}
