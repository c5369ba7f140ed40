//! Deterministic random number generation
//!
//! Two multiplicative LCG lattices combined through rejection sampling.
//! CRITICAL: All randomness consumed by the caucus tools MUST go through this
//! module, and its output MUST stay bit-identical across releases.

mod checkpoint;
mod error;
mod generator;
mod lattice;
mod seed;

pub use checkpoint::{compute_params_hash, GeneratorSnapshot};
pub use error::RngError;
pub use generator::{Coin, Generator};
pub use lattice::{in_biased_tail, DualLattice, LatticeParams, FIRST, MAX_LIMIT, SECOND};
pub use seed::{parse_seed, resolve_seeds, wall_clock_millis, RawSeed, Seed};
