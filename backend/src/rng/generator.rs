//! Combined-lattice generator with rejection sampling
//!
//! Every draw advances both lattices once, then either accepts the pair and
//! returns `(state1 + state2) mod limit`, or discards it and advances again.
//! A pair is discarded only when both states fall in the short tail of their
//! lattice for this `limit` (see [`in_biased_tail`]).
//!
//! # Determinism
//!
//! Same seeds + same sequence of calls → same results, on every platform.
//! The consuming application relies on this to reconstruct past tie-breaks
//! from stored seeds, so the arithmetic here must never change.
//!
//! # Threading
//!
//! A `Generator` is plain owned state. Share one across threads only behind
//! external synchronization; independent streams need independent instances.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::checkpoint::{self, GeneratorSnapshot};
use super::error::RngError;
use super::lattice::{in_biased_tail, DualLattice, MAX_LIMIT};
use super::seed::{resolve_seeds, wall_clock_millis, Seed};
use crate::config::GeneratorConfig;
use crate::diagnostics::{SampleLog, SampleRecord, Summary};

/// Outcome of a coin flip
///
/// Encoded as `+1` (heads) / `-1` (tails) for three-way comparators. There is
/// no "equal" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    /// `+1` for heads, `-1` for tails
    pub fn sign(self) -> i32 {
        match self {
            Coin::Heads => 1,
            Coin::Tails => -1,
        }
    }

    /// `Greater` for heads, `Less` for tails
    pub fn to_ordering(self) -> Ordering {
        match self {
            Coin::Heads => Ordering::Greater,
            Coin::Tails => Ordering::Less,
        }
    }
}

/// Deterministic combined-lattice generator
///
/// # Example
/// ```
/// use caucus_rng_core_rs::Generator;
///
/// let mut rng = Generator::new(12345u64, 67890u64);
/// let value = rng.random_up_to(6).unwrap(); // [0, 6)
/// assert_eq!(value, 4);
///
/// let real = rng.random_real();
/// assert!((0.0..1.0).contains(&real));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    lattices: DualLattice,
    /// Present only when sample recording is enabled
    log: Option<SampleLog>,
}

impl Generator {
    /// Create a generator with the default configuration (no recording)
    pub fn new(seed_a: impl Into<Seed>, seed_b: impl Into<Seed>) -> Self {
        Self::with_config(seed_a, seed_b, GeneratorConfig::default())
    }

    /// Create a generator from a single seed; seed B defaults to seed A
    pub fn from_seed(seed_a: impl Into<Seed>) -> Self {
        Self::new(seed_a, Seed::Missing)
    }

    /// Create a generator with an explicit configuration
    pub fn with_config(
        seed_a: impl Into<Seed>,
        seed_b: impl Into<Seed>,
        config: GeneratorConfig,
    ) -> Self {
        Self::with_clock(seed_a, seed_b, config, wall_clock_millis)
    }

    /// Create a generator reading the fallback seed from `clock`.
    ///
    /// `clock` is only called when seed A is missing or unusable.
    pub fn with_clock<F>(
        seed_a: impl Into<Seed>,
        seed_b: impl Into<Seed>,
        config: GeneratorConfig,
        clock: F,
    ) -> Self
    where
        F: FnOnce() -> u64,
    {
        let (raw_a, raw_b) = resolve_seeds(&seed_a.into(), &seed_b.into(), clock);
        let lattices = DualLattice::seeded(raw_a, raw_b);
        log::debug!(
            "generator seeded: state1={} state2={}",
            lattices.states().0,
            lattices.states().1
        );
        Self::from_lattices(lattices, config)
    }

    /// Restore a generator from a checkpoint.
    ///
    /// The restored generator starts with an empty sample log.
    pub fn restore(
        snapshot: &GeneratorSnapshot,
        config: GeneratorConfig,
    ) -> Result<Self, RngError> {
        let lattices = checkpoint::validate_snapshot(snapshot)?;
        Ok(Self::from_lattices(lattices, config))
    }

    fn from_lattices(lattices: DualLattice, config: GeneratorConfig) -> Self {
        Self {
            lattices,
            log: config.record_samples.then(SampleLog::new),
        }
    }

    /// Capture the current state for later [`Generator::restore`]
    pub fn snapshot(&self) -> Result<GeneratorSnapshot, RngError> {
        GeneratorSnapshot::capture(&self.lattices)
    }

    /// Uniform integer in `[0, limit)`.
    ///
    /// # Errors
    ///
    /// - `ZeroLimit` if `limit == 0`
    /// - `LimitTooLarge` if `limit > MAX_LIMIT`
    ///
    /// Invalid limits are rejected before any state changes.
    pub fn random_up_to(&mut self, limit: u64) -> Result<u64, RngError> {
        if limit == 0 {
            return Err(RngError::ZeroLimit);
        }
        if limit > MAX_LIMIT {
            return Err(RngError::LimitTooLarge {
                limit,
                max: MAX_LIMIT,
            });
        }
        Ok(self.draw(limit))
    }

    /// [`Generator::random_up_to`] for an untyped numeric limit.
    ///
    /// The limit is normalized to `floor(abs(limit))` first; NaN and
    /// infinities are rejected with `NonFiniteLimit`.
    pub fn random_up_to_value(&mut self, limit: f64) -> Result<u64, RngError> {
        if !limit.is_finite() {
            return Err(RngError::NonFiniteLimit);
        }
        let limit = limit.abs().floor();
        if limit > MAX_LIMIT as f64 {
            return Err(RngError::LimitTooLarge {
                limit: limit.min(u64::MAX as f64) as u64,
                max: MAX_LIMIT,
            });
        }
        self.random_up_to(limit as u64)
    }

    /// Uniform real in `[0, 1)` with resolution `1 / MAX_LIMIT`
    pub fn random_real(&mut self) -> f64 {
        self.draw(MAX_LIMIT) as f64 / MAX_LIMIT as f64
    }

    /// Fair coin: draw 0 is tails, draw 1 is heads
    pub fn coin_flip(&mut self) -> Coin {
        match self.draw(2) {
            0 => Coin::Tails,
            _ => Coin::Heads,
        }
    }

    /// Random `Less`/`Greater` for tie-breaking inside `sort_by`; never `Equal`
    pub fn tie_break(&mut self) -> Ordering {
        self.coin_flip().to_ordering()
    }

    /// Tabulate recorded draws: limit -> (result -> count).
    ///
    /// Empty when recording is disabled.
    pub fn summarize(&self) -> Summary {
        self.log.as_ref().map(SampleLog::summarize).unwrap_or_default()
    }

    /// Recorded draws in call order (empty when recording is disabled)
    pub fn samples(&self) -> &[SampleRecord] {
        match &self.log {
            Some(log) => log.samples(),
            None => &[],
        }
    }

    /// Discarded draws observed while recording
    pub fn rejected_draws(&self) -> u64 {
        self.log.as_ref().map_or(0, SampleLog::rejected)
    }

    /// Drop all recorded draws; the sequence is unaffected
    pub fn clear_samples(&mut self) {
        if let Some(log) = self.log.as_mut() {
            log.clear();
        }
    }

    pub fn is_recording(&self) -> bool {
        self.log.is_some()
    }

    /// Current `(state1, state2)`
    pub fn state(&self) -> (u64, u64) {
        self.lattices.states()
    }

    /// Core draw. `limit` must be in `[1, MAX_LIMIT]`.
    fn draw(&mut self, limit: u64) -> u64 {
        loop {
            let (state1, state2) = self.lattices.advance();

            if in_biased_tail(state1, state2, limit) {
                log::trace!(
                    "rejected draw: limit={} state1={} state2={}",
                    limit,
                    state1,
                    state2
                );
                if let Some(log) = self.log.as_mut() {
                    log.record_rejection();
                }
                continue;
            }

            let result = (state1 + state2) % limit;
            if let Some(log) = self.log.as_mut() {
                log.record(SampleRecord { limit, result });
            }
            return result;
        }
    }
}
