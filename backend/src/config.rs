//! Generator configuration
//!
//! The only tunable is whether accepted draws are recorded for diagnostics.
//! Recording has no effect on the generated sequence; it only controls
//! whether [`crate::Generator::summarize`] has anything to report.

use serde::{Deserialize, Serialize};

use crate::rng::RngError;

/// Generator configuration
///
/// # Example
/// ```
/// use caucus_rng_core_rs::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{"record_samples": true}"#).unwrap();
/// assert_eq!(config, GeneratorConfig::diagnostic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Record every accepted draw (off by default; the log grows without bound)
    pub record_samples: bool,
}

impl GeneratorConfig {
    /// Configuration with sample recording enabled, for tests and debugging
    pub fn diagnostic() -> Self {
        Self {
            record_samples: true,
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json).map_err(|e| RngError::InvalidConfig(e.to_string()))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, RngError> {
        serde_json::to_string(self).map_err(|e| RngError::Serialization(e.to_string()))
    }
}
