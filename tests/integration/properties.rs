//! Randomized edits keep compaction idempotent

use crate::helpers::*;
use proptest::prelude::*;
use synergize::prelude::*;
use synergize::{MAX_OSCILLATORS, MAX_POINTS};

#[derive(Debug, Clone)]
struct Edit {
    oscillators: u8,
    points: Vec<(u8, u8)>,
    tables: Vec<u8>,
    algorithm: Option<u8>,
    patch_type: Option<u8>,
}

fn edit() -> impl Strategy<Value = Edit> {
    (
        1..=MAX_OSCILLATORS as u8,
        proptest::collection::vec((1..=MAX_POINTS as u8, 1..=MAX_POINTS as u8), MAX_OSCILLATORS),
        proptest::collection::vec(any::<u8>(), 64),
        proptest::option::of(0u8..32),
        proptest::option::of(1u8..=10),
    )
        .prop_map(|(oscillators, points, tables, algorithm, patch_type)| Edit {
            oscillators,
            points,
            tables,
            algorithm,
            patch_type,
        })
}

fn apply(edit: &Edit) -> Voice {
    let mut voice = blank();
    voice.set_oscillator_count(edit.oscillators);
    for (env, (freq, amp)) in voice.envelopes.iter_mut().zip(&edit.points) {
        env.set_point_counts(*freq, *amp);
        env.freq_envelope.table.copy_from_slice(&edit.tables);
        env.amp_envelope.table.copy_from_slice(&edit.tables);
    }
    if let Some(patch_type) = edit.patch_type {
        apply_patch_type(&mut voice, patch_type).unwrap();
    }
    if let Some(algorithm) = edit.algorithm {
        apply_dx_algorithm(&mut voice, algorithm, 0).unwrap();
    }
    voice
}

proptest! {
    #[test]
    fn test_compact_is_idempotent(edit in edit()) {
        let canon = Canonicalizer::default();
        let once = canon.compact(&apply(&edit)).unwrap();
        let twice = canon.compact(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.envelopes.len(), edit.oscillators as usize);
    }

    #[test]
    fn test_compacted_tables_match_point_counts(edit in edit()) {
        let canon = Canonicalizer::default();
        let compacted = canon.compact(&apply(&edit)).unwrap();
        for (env, (freq, amp)) in compacted.envelopes.iter().zip(&edit.points) {
            prop_assert_eq!(env.freq_envelope.table.len(), *freq as usize * 4);
            prop_assert_eq!(env.amp_envelope.table.len(), *amp as usize * 4);
            prop_assert_eq!(&env.freq_envelope.table[..], &edit.tables[..*freq as usize * 4]);
        }
    }
}
