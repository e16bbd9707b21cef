//! Preset avatar catalog configuration.

use serde::{Deserialize, Serialize};

/// Avatar catalog overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AvatarConfig {
    /// Replaces the built-in preset catalog when non-empty.
    pub presets: Vec<String>,
    /// Seed for a reproducible shuffle. Unset means OS entropy.
    pub seed: Option<u64>,
}
