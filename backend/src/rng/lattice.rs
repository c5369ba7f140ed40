//! Dual multiplicative lattice state
//!
//! Two independent Lehmer-style LCGs, `state = state * multiplier mod modulus`,
//! advanced in lock step. Both moduli are the two largest primes below 2^32 and
//! both multipliers are prime primitive roots of their modulus, so each lattice
//! visits every value in `[1, modulus)` before repeating.
//!
//! # Arithmetic
//!
//! Multipliers are kept below 2^21 so that `state * multiplier < 2^53`. The
//! products are therefore exact in IEEE doubles as well as in `u64`, which lets
//! the sequence be reproduced in environments without 64-bit integers.
//!
//! # Critical Invariants
//!
//! - `1 <= state < modulus` for both lattices, after seeding and after every step
//! - Every call to [`DualLattice::advance`] steps BOTH lattices exactly once
//!
//! A [`DualLattice`] can only be built through [`DualLattice::seeded`] or the
//! range-checked [`DualLattice::from_states`], always with [`FIRST`] and
//! [`SECOND`]. It is not deserializable; stored state goes through
//! `GeneratorSnapshot`.
//!
//! ```compile_fail
//! use caucus_rng_core_rs::rng::DualLattice;
//!
//! let lattices: DualLattice = serde_json::from_str("{}").unwrap();
//! ```

use serde::Serialize;

use super::seed::RawSeed;

/// Fixed modulus/multiplier pair of one lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatticeParams {
    pub modulus: u64,
    pub multiplier: u64,
}

/// First lattice: 2^32 - 5
pub const FIRST: LatticeParams = LatticeParams {
    modulus: 4_294_967_291,
    multiplier: 1_000_037,
};

/// Second lattice: 2^32 - 17
pub const SECOND: LatticeParams = LatticeParams {
    modulus: 4_294_967_279,
    multiplier: 1_500_007,
};

/// Largest `limit` accepted by the core draw.
///
/// Also the denominator used for uniform reals. Above this bound the
/// rejection test can hold for every state pair and the draw never returns.
pub const MAX_LIMIT: u64 = SECOND.modulus - 1;

/// One linear congruential lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Lattice {
    params: LatticeParams,
    state: u64,
}

impl Lattice {
    /// Seed a lattice: `state = (raw mod (modulus - 1)) + 1`
    fn seeded(params: LatticeParams, raw: RawSeed) -> Self {
        Self {
            params,
            state: raw.reduce(params.modulus),
        }
    }

    /// Rebuild a lattice from a stored state, rejecting out-of-range values
    fn from_state(params: LatticeParams, state: u64) -> Option<Self> {
        (1..params.modulus)
            .contains(&state)
            .then_some(Self { params, state })
    }

    /// Advance one step and return the new state
    fn step(&mut self) -> u64 {
        self.state = self.state * self.params.multiplier % self.params.modulus;
        self.state
    }

    fn state(&self) -> u64 {
        self.state
    }
}

/// The generator's complete mutable state: both lattices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DualLattice {
    first: Lattice,
    second: Lattice,
}

impl DualLattice {
    /// Seed both lattices from already-resolved raw seeds.
    ///
    /// Any `RawSeed`, including non-finite or negative `Wide` values, reduces
    /// into `[1, modulus)`.
    pub fn seeded(seed_a: RawSeed, seed_b: RawSeed) -> Self {
        Self {
            first: Lattice::seeded(FIRST, seed_a),
            second: Lattice::seeded(SECOND, seed_b),
        }
    }

    /// Rebuild from stored states; `None` if either is out of range
    pub fn from_states(state1: u64, state2: u64) -> Option<Self> {
        Some(Self {
            first: Lattice::from_state(FIRST, state1)?,
            second: Lattice::from_state(SECOND, state2)?,
        })
    }

    /// Step both lattices once and return `(state1, state2)`
    pub fn advance(&mut self) -> (u64, u64) {
        (self.first.step(), self.second.step())
    }

    pub fn states(&self) -> (u64, u64) {
        (self.first.state(), self.second.state())
    }
}

/// Rejection test for a freshly advanced state pair.
///
/// A pair is discarded when both states sit below `limit` and both fall in
/// the short tail `[0, modulus mod limit)` of their lattice. `limit` must be
/// non-zero.
pub fn in_biased_tail(state1: u64, state2: u64, limit: u64) -> bool {
    state1 < limit
        && state2 < limit
        && state1 < FIRST.modulus % limit
        && state2 < SECOND.modulus % limit
}
