use serde::{Deserialize, Serialize};

/// Engine limits for shell model computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest number of shells a single computation may generate.
    ///
    /// Decay factors very close to one with a distant outer temperature can
    /// call for an enormous number of shells. Such parameter sets are
    /// rejected before any shell is generated.
    pub max_layers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_layers: 100_000,
        }
    }
}
