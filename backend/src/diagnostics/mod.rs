//! Sample log for testing and debugging
//!
//! Records every accepted draw as a [`SampleRecord`] and tabulates them into a
//! [`Summary`]. The log is purely observational: nothing in the generator
//! reads it back, so enabling or disabling it never changes the sequence.
//!
//! The log grows without bound while recording is enabled. Callers running
//! long-lived generators should leave recording off (the default) or call
//! [`SampleLog::clear`] themselves.
//!
//! # Example
//!
//! ```rust
//! use caucus_rng_core_rs::diagnostics::{SampleLog, SampleRecord};
//!
//! let mut log = SampleLog::new();
//! log.record(SampleRecord { limit: 6, result: 3 });
//! log.record(SampleRecord { limit: 6, result: 3 });
//! log.record(SampleRecord { limit: 2, result: 0 });
//!
//! let summary = log.summarize();
//! assert_eq!(summary[&6][&3], 2);
//! assert_eq!(summary[&2][&0], 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tabulated draws: limit -> (result -> count)
pub type Summary = BTreeMap<u64, BTreeMap<u64, u64>>;

/// One accepted draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Bound that was requested
    pub limit: u64,
    /// Value that was returned, in `[0, limit)`
    pub result: u64,
}

/// Append-only log of accepted draws, in call order
#[derive(Debug, Clone, Default)]
pub struct SampleLog {
    samples: Vec<SampleRecord>,
    rejected: u64,
}

impl SampleLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted draw
    pub fn record(&mut self, sample: SampleRecord) {
        self.samples.push(sample);
    }

    /// Count a draw that the rejection test discarded
    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    /// Get the number of accepted draws logged
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get all accepted draws in call order
    pub fn samples(&self) -> &[SampleRecord] {
        &self.samples
    }

    /// Number of discarded draws since the log was created or cleared
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Tabulate accepted draws per limit and result
    pub fn summarize(&self) -> Summary {
        let mut summary = Summary::new();
        for sample in &self.samples {
            *summary
                .entry(sample.limit)
                .or_default()
                .entry(sample.result)
                .or_insert(0) += 1;
        }
        summary
    }

    /// Clear all records and the rejection count
    pub fn clear(&mut self) {
        self.samples.clear();
        self.rejected = 0;
    }
}

/// Pearson chi-square statistic of the draws recorded for `limit`.
///
/// Every result in `[0, limit)` is an expected bucket; results never drawn
/// count as zero observations. Returns `None` when `limit < 2` or nothing was
/// drawn for it. The statistic has `limit - 1` degrees of freedom.
pub fn chi_square(summary: &Summary, limit: u64) -> Option<f64> {
    if limit < 2 {
        return None;
    }
    let counts = summary.get(&limit)?;
    let total: u64 = counts.values().sum();
    if total == 0 {
        return None;
    }

    let expected = total as f64 / limit as f64;
    let observed: f64 = counts
        .values()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta / expected
        })
        .sum();
    // each empty bucket contributes (0 - e)^2 / e = e
    let empty_buckets = limit.saturating_sub(counts.len() as u64);

    Some(observed + empty_buckets as f64 * expected)
}
