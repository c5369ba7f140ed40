//! Checkpoint - Save/Restore Generator State
//!
//! A snapshot holds the two lattice states plus a hash of the lattice
//! parameters. Restoring builds a fresh generator that continues the exact
//! sequence the original would have produced.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restored generator == original generator, draw for draw
//! - **Parameter Matching**: a snapshot only restores under the same constants
//! - **State Range**: restored states satisfy `1 <= state_i < mod_i`

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::RngError;
use super::lattice::{DualLattice, LatticeParams, FIRST, SECOND};

/// Serializable generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    pub state1: u64,
    pub state2: u64,

    /// SHA256 hash of the lattice parameters (for validation)
    pub params_hash: String,
}

impl GeneratorSnapshot {
    /// Capture the given lattice states
    pub fn capture(lattices: &DualLattice) -> Result<Self, RngError> {
        let (state1, state2) = lattices.states();
        Ok(Self {
            state1,
            state2,
            params_hash: compute_params_hash()?,
        })
    }

    pub fn to_json(&self) -> Result<String, RngError> {
        serde_json::to_string(self).map_err(|e| RngError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json).map_err(|e| RngError::Serialization(e.to_string()))
    }
}

#[derive(Serialize)]
struct ParamsRecord {
    first: LatticeParams,
    second: LatticeParams,
}

/// Compute deterministic SHA256 hash of the lattice parameters
///
/// `serde_json::Value` objects keep their keys sorted, so the JSON text is
/// canonical regardless of field declaration order.
pub fn compute_params_hash() -> Result<String, RngError> {
    let record = ParamsRecord {
        first: FIRST,
        second: SECOND,
    };

    let value = serde_json::to_value(&record)
        .map_err(|e| RngError::Serialization(format!("Params serialization failed: {}", e)))?;
    let json = serde_json::to_string(&value)
        .map_err(|e| RngError::Serialization(format!("Params serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

/// Validate a snapshot and rebuild its lattices
pub fn validate_snapshot(snapshot: &GeneratorSnapshot) -> Result<DualLattice, RngError> {
    let expected = compute_params_hash()?;
    if snapshot.params_hash != expected {
        return Err(RngError::SnapshotMismatch {
            expected,
            actual: snapshot.params_hash.clone(),
        });
    }

    DualLattice::from_states(snapshot.state1, snapshot.state2).ok_or(RngError::InvalidState {
        state1: snapshot.state1,
        state2: snapshot.state2,
    })
}
