//! End-to-end editing through the VCE codec

use crate::helpers::*;
use synergize::prelude::*;
use synergize::{vce, voicing, OPTCH_UNUSED};

#[test]
fn test_blank_voice_is_fully_provisioned() {
    let voice = blank();
    assert_eq!(voice.envelopes.len(), 16);
    assert_eq!(voice.filters.len(), 16);
    assert!(voice.envelopes.iter().all(|e| {
        e.amp_envelope.table.len() == 64 && e.freq_envelope.table.len() == 64
    }));
}

#[test]
fn test_dx_edit_exports_routing() {
    let canon = Canonicalizer::default();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(6);

    let advisories = apply_dx_algorithm(&mut voice, 2, 0).unwrap();
    assert!(advisories.is_empty());

    let bytes = export(&canon, &voice).unwrap();
    let decoded = VceCodec.decode(&bytes).unwrap();
    assert_eq!(decoded.envelopes.len(), 6);
    assert_eq!(routing(&decoded), vec![100, 97, 33, 100, 97, 1]);
}

#[test]
fn test_feedback_is_ignored_with_advisory() {
    init_tracing();
    let mut voice = blank();
    let advisories = apply_dx_algorithm(&mut voice, 0, 5).unwrap();
    assert_eq!(advisories, vec![Advisory::UnsupportedFeedback(5)]);
    assert_eq!(
        routing(&voice),
        voicing::DX_ALGO_NO_FEEDBACK_PER_OSC_TABLE[0].to_vec()
    );
}

#[test]
fn test_invalid_algorithm_leaves_voice_unmodified() {
    let mut voice = blank();
    apply_patch_type(&mut voice, 2).unwrap();
    let before = voice.clone();

    let err = apply_dx_algorithm(&mut voice, 32, 0).unwrap_err();
    assert_eq!(err, voicing::Error::InvalidAlgorithm(32));
    assert_eq!(voice, before);

    let err: Error = err.into();
    assert_eq!(err.to_string(), "Invalid DX algorithm: 32. Must be between 0 and 31");
}

#[test]
fn test_patch_type_then_algorithm_overwrites_routing() {
    let mut voice = blank();
    apply_patch_type(&mut voice, 1).unwrap();
    assert_eq!(routing(&voice), vec![1; 16]);

    apply_dx_algorithm(&mut voice, 8, 0).unwrap();
    assert_eq!(&routing(&voice)[..6], &[100, 97, 76, 33, 100, 33]);
    assert!(routing(&voice)[6..].iter().all(|b| *b == OPTCH_UNUSED));
}

#[test]
fn test_rejecting_resolver_keeps_previous_routing() {
    let config = VoicingConfig {
        degenerate_algorithms: DegeneratePolicy::Reject,
        ..Default::default()
    };
    let resolver = RoutingResolver::new(&config);
    let mut voice = blank();
    resolver.apply_patch_type(&mut voice, 5).unwrap();
    let before = routing(&voice);

    assert!(resolver.apply_dx_algorithm(&mut voice, 31, 0).is_err());
    assert_eq!(routing(&voice), before);
}

#[test]
fn test_displayed_values_round_into_exported_tables() {
    let canon = Canonicalizer::default();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(2);
    voice.envelopes[1].set_point_counts(2, 2);

    let freq = &mut voice.envelopes[1].freq_envelope;
    freq.table[0] = unscale_freq_env_value(40);
    freq.table[1] = unscale_freq_time_value(20);
    freq.table[4] = FREQ_VALUE_SCALE.nearest_code(100);
    freq.table[5] = unscale_freq_time_value(1_000_000);
    freq.detune = unscale_detune(100);

    let amp = &mut voice.envelopes[1].amp_envelope;
    amp.table[0] = unscale_amp_env_value(10);
    amp.table[1] = unscale_amp_time_value(41);

    let decoded = VceCodec.decode(&export(&canon, &voice).unwrap()).unwrap();
    let env = &decoded.envelopes[1];
    assert_eq!(env.freq_envelope.table, vec![40, 16, 0, 0, 38, 84, 0, 0]);
    assert_eq!(env.freq_envelope.detune, 32);
    assert_eq!(&env.amp_envelope.table[..2], &[65, 41]);
    assert_eq!(env.amp_envelope.table.len(), 8);
}

#[test]
fn test_export_is_stable() {
    let canon = Canonicalizer::default();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(3);
    voice.head.name = "BRASS".to_string();
    apply_patch_type(&mut voice, 3).unwrap();

    let first = export(&canon, &voice).unwrap();
    let second = export(&canon, &VceCodec.decode(&first).unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(&first[..8], b"BRASS   ");
}

#[test]
fn test_export_reports_codec_errors() {
    let canon = Canonicalizer::default();
    let mut voice = canon.blank_voice().unwrap();
    voice.envelopes[0].set_point_counts(17, 1);
    assert_eq!(
        export(&canon, &voice).unwrap_err(),
        Error::Voicing(voicing::Error::Codec(vce::Error::InvalidPointCount {
            slot: 0,
            points: 17
        }))
    );
}

#[test]
fn test_canonical_text_lists_only_active_oscillators() {
    let canon = Canonicalizer::default();
    let mut voice = canon.blank_voice().unwrap();
    voice.set_oscillator_count(2);

    let text = canon.to_canonical_text(&voice);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["envelopes"].as_array().unwrap().len(), 2);
    assert_eq!(value["filters"].as_array().unwrap().len(), 2);
    assert_eq!(value["head"]["voitab"], 1);
}
