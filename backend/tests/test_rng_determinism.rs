//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seeds MUST produce the same sequence,
//! today and in every future release. The golden vectors below are pinned.

use caucus_rng_core_rs::{Generator, MAX_LIMIT};

#[test]
fn test_golden_vector_up_to_six() {
    let mut rng = Generator::new(12345u64, 67890u64);
    let values: Vec<u64> = (0..5).map(|_| rng.random_up_to(6).unwrap()).collect();
    assert_eq!(values, vec![4, 4, 0, 4, 5]);
}

#[test]
fn test_golden_vector_up_to_hundred() {
    let mut rng = Generator::new(12345u64, 67890u64);
    let values: Vec<u64> = (0..5).map(|_| rng.random_up_to(100).unwrap()).collect();
    assert_eq!(values, vec![40, 62, 98, 10, 31]);
}

#[test]
fn test_golden_vector_single_seed() {
    let mut rng = Generator::from_seed(12345u64);
    let values: Vec<u64> = (0..5).map(|_| rng.random_up_to(6).unwrap()).collect();
    assert_eq!(values, vec![0, 1, 5, 0, 4]);
}

#[test]
fn test_golden_vector_reals() {
    let mut rng = Generator::new(12345u64, 67890u64);
    assert_eq!(rng.random_real(), 0.5854020762576808);
    assert_eq!(rng.random_real(), 0.7032859829857824);
    assert_eq!(rng.random_real(), 0.4062896839606609);
}

#[test]
fn test_golden_vector_coin_flips() {
    let mut rng = Generator::from_seed(42u64);
    let draws: Vec<u64> = (0..10).map(|_| rng.random_up_to(2).unwrap()).collect();
    assert_eq!(draws, vec![0, 0, 1, 0, 0, 0, 0, 1, 0, 1]);

    let mut rng = Generator::from_seed(42u64);
    let signs: Vec<i32> = (0..10).map(|_| rng.coin_flip().sign()).collect();
    assert_eq!(signs, vec![-1, -1, 1, -1, -1, -1, -1, 1, -1, 1]);
}

#[test]
fn test_seeded_states() {
    assert_eq!(Generator::new(12345u64, 67890u64).state(), (12346, 67891));
    assert_eq!(Generator::new(1u64, 1u64).state(), (2, 2));
    assert_eq!(Generator::new(u64::MAX, u64::MAX).state(), (36, 324));
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = Generator::new(12345u64, 67890u64);
    let mut rng2 = Generator::new(54321u64, 9876u64);

    let seq1: Vec<u64> = (0..20).map(|_| rng1.random_up_to(1000).unwrap()).collect();
    let seq2: Vec<u64> = (0..20).map(|_| rng2.random_up_to(1000).unwrap()).collect();

    assert_ne!(seq1, seq2, "Different seeds should produce different values");
}

#[test]
fn test_rng_long_sequence_determinism() {
    let mut rng1 = Generator::new(42u64, 4242u64);
    let mut rng2 = Generator::new(42u64, 4242u64);

    // Mixed limits, including the largest supported one
    for i in 0..1000u64 {
        let limit = match i % 4 {
            0 => 2,
            1 => 6,
            2 => 1 + i,
            _ => MAX_LIMIT,
        };
        let val1 = rng1.random_up_to(limit).unwrap();
        let val2 = rng2.random_up_to(limit).unwrap();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_rng_state_advances() {
    let mut rng = Generator::new(12345u64, 67890u64);
    let initial_state = rng.state();

    rng.random_up_to(6).unwrap();

    assert_ne!(initial_state, rng.state(), "RNG state should advance");
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = Generator::new(12345u64, 67890u64);
    let values: Vec<u64> = (0..100).map(|_| rng.random_up_to(MAX_LIMIT).unwrap()).collect();

    let unique_count = values
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert!(
        unique_count > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        unique_count
    );
}
