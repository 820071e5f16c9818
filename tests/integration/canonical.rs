//! Compaction contract against injected codecs

use crate::helpers::*;
use synergize::prelude::*;
use synergize::{vce, voicing};

/// Canonicalizer over [`PaddingCodec`], templated from the bundled voice.
fn padding_canonicalizer() -> Canonicalizer<PaddingCodec> {
    let template = VceCodec.decode(vce::template_bytes().unwrap()).unwrap();
    let json = serde_json::to_vec(&template).unwrap();
    Canonicalizer::new(PaddingCodec::default()).with_template(json, 0)
}

fn pad_tables(voice: &mut Voice) {
    for env in &mut voice.envelopes {
        let used = env.freq_envelope.npoints as usize * 4;
        env.freq_envelope.table[used..].fill(PAD);
        let used = env.amp_envelope.npoints as usize * 4;
        env.amp_envelope.table[used..].fill(PAD);
    }
}

#[test]
fn test_blank_voice_through_injected_codec() {
    let canon = padding_canonicalizer();
    let voice = canon.blank_voice().unwrap();
    assert_eq!(voice.envelopes.len(), 16);
    assert_eq!(voice.filters.len(), 16);
    assert_eq!(canon.codec().decodes.get(), 1);
    assert_eq!(canon.codec().encodes.get(), 0);
}

#[test]
fn test_compact_encodes_then_decodes_once() {
    let canon = padding_canonicalizer();
    let voice = canon.blank_voice().unwrap();
    canon.compact(&voice).unwrap();
    assert_eq!(canon.codec().encodes.get(), 1);
    assert_eq!(canon.codec().decodes.get(), 2);
}

#[test]
fn test_compact_trims_known_padding() {
    let canon = padding_canonicalizer();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(3);
    pad_tables(&mut voice);

    let compacted = canon.compact(&voice).unwrap();
    assert_eq!(compacted.envelopes.len(), 3);
    assert_eq!(compacted.filters.len(), 3);
    for env in &compacted.envelopes {
        assert_eq!(env.freq_envelope.table, vec![0; 4]);
        assert_eq!(env.amp_envelope.table, vec![0; 12]);
    }
}

#[test]
fn test_compact_idempotent_with_injected_codec() {
    let canon = padding_canonicalizer();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(5);
    apply_patch_type(&mut voice, 3).unwrap();
    pad_tables(&mut voice);

    let once = canon.compact(&voice).unwrap();
    let twice = canon.compact(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_canonical_text_never_fails() {
    let canon = Canonicalizer::new(FailingCodec);
    let voice = canon.blank_voice().unwrap();

    assert_eq!(
        canon.compact(&voice),
        Err(voicing::Error::Codec(vce::Error::MissingFilter { slot: 3 }))
    );
    assert_eq!(
        canon.to_canonical_text(&voice),
        "ERROR: Codec: Missing filter coefficients for oscillator 3"
    );
}

#[test]
fn test_canonical_text_matches_compacted_voice() {
    let canon = Canonicalizer::default();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(4);
    apply_dx_algorithm(&mut voice, 6, 0).unwrap();

    let text = canon.to_canonical_text(&voice);
    let parsed: Voice = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, canon.compact(&voice).unwrap());
}
