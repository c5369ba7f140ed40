//! Tests for checkpoint save/restore
//!
//! A restored generator must continue exactly where the original left off.

use caucus_rng_core_rs::rng::compute_params_hash;
use caucus_rng_core_rs::{Generator, GeneratorConfig, GeneratorSnapshot, RngError};

#[test]
fn test_restore_continues_sequence() {
    let mut original = Generator::new(12345u64, 67890u64);
    for _ in 0..37 {
        original.random_up_to(6).unwrap();
    }

    let snapshot = original.snapshot().unwrap();
    let mut restored = Generator::restore(&snapshot, GeneratorConfig::default()).unwrap();

    assert_eq!(restored.state(), original.state());
    for limit in 1..500 {
        assert_eq!(
            original.random_up_to(limit).unwrap(),
            restored.random_up_to(limit).unwrap()
        );
    }
    assert_eq!(original.random_real(), restored.random_real());
    assert_eq!(original.coin_flip(), restored.coin_flip());
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut original = Generator::new("precinct-seed-1", None::<u64>);
    let snapshot = original.snapshot().unwrap();

    let json = snapshot.to_json().unwrap();
    let parsed = GeneratorSnapshot::from_json(&json).unwrap();
    assert_eq!(parsed, snapshot);

    let mut restored = Generator::restore(&parsed, GeneratorConfig::default()).unwrap();
    assert_eq!(original.random_up_to(6), restored.random_up_to(6));
}

#[test]
fn test_restore_starts_with_empty_log() {
    let mut original = Generator::with_config(9u64, 9u64, GeneratorConfig::diagnostic());
    original.random_up_to(6).unwrap();

    let snapshot = original.snapshot().unwrap();
    let restored = Generator::restore(&snapshot, GeneratorConfig::diagnostic()).unwrap();

    assert!(restored.is_recording());
    assert!(restored.summarize().is_empty());
}

#[test]
fn test_restore_rejects_mismatched_params() {
    let snapshot = GeneratorSnapshot {
        state1: 100,
        state2: 200,
        params_hash: "deadbeef".to_string(),
    };

    let err = Generator::restore(&snapshot, GeneratorConfig::default()).unwrap_err();
    assert_eq!(
        err,
        RngError::SnapshotMismatch {
            expected: compute_params_hash().unwrap(),
            actual: "deadbeef".to_string(),
        }
    );
}

#[test]
fn test_restore_rejects_out_of_range_state() {
    let snapshot = GeneratorSnapshot {
        state1: 4_294_967_291,
        state2: 200,
        params_hash: compute_params_hash().unwrap(),
    };

    let err = Generator::restore(&snapshot, GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, RngError::InvalidState { .. }));
}

#[test]
fn test_malformed_snapshot_json() {
    let err = GeneratorSnapshot::from_json(r#"{"state1": 1}"#).unwrap_err();
    assert!(matches!(err, RngError::Serialization(_)));
}
