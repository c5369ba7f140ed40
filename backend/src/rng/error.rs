//! Errors raised by the generator
//!
//! Seeding never fails (bad seeds fall back to defaults). Everything that can
//! fail is a caller precondition on a draw, a malformed configuration, or a
//! checkpoint that does not belong to this parameter set.

use thiserror::Error;

/// Errors that can occur while drawing, configuring or restoring a generator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RngError {
    #[error("limit must be at least 1")]
    ZeroLimit,

    #[error("limit {limit} exceeds the maximum supported limit {max}")]
    LimitTooLarge { limit: u64, max: u64 },

    #[error("limit must be a finite number")]
    NonFiniteLimit,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot parameter hash mismatch: expected {expected}, got {actual}")]
    SnapshotMismatch { expected: String, actual: String },

    #[error("Snapshot state out of range: state1={state1}, state2={state2}")]
    InvalidState { state1: u64, state2: u64 },
}
