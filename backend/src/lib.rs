//! Caucus RNG Core - Reproducible Random Draws
//!
//! Deterministic pseudo-random generator whose output is bit-identical on every
//! platform and across releases. Caucus tooling stores seeds rather than
//! results and replays them to reconstruct past randomized decisions (coin-flip
//! tie-breaks, ordering of equal counts), so reproducibility is the contract.
//!
//! # Architecture
//!
//! - **rng**: seeding, the dual-lattice core draw, derived draws, checkpoints
//! - **diagnostics**: opt-in log of accepted draws and its tabulation
//! - **config**: generator configuration
//!
//! # Critical Invariants
//!
//! 1. Same seeds + same call sequence → same results
//! 2. `1 <= state_i < mod_i` after seeding and after every step
//! 3. Diagnostics observe draws but never influence them
//!
//! # Example
//!
//! ```rust
//! use caucus_rng_core_rs::{Coin, Generator};
//!
//! let mut rng = Generator::new(12345u64, 67890u64);
//! let rolls: Vec<u64> = (0..5).map(|_| rng.random_up_to(6).unwrap()).collect();
//! assert_eq!(rolls, vec![4, 4, 0, 4, 5]);
//!
//! let flip = rng.coin_flip();
//! assert!(flip == Coin::Heads || flip == Coin::Tails);
//! ```

// Module declarations
pub mod config;
pub mod diagnostics;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use diagnostics::{chi_square, SampleLog, SampleRecord, Summary};
pub use rng::{
    Coin, Generator, GeneratorSnapshot, RawSeed, RngError, Seed, FIRST, MAX_LIMIT, SECOND,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn caucus_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyGenerator>()?;
    Ok(())
}
