//! Configuration schema types for IntroConnect.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod avatars;
mod system;

pub use api::*;
pub use avatars::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntroConfig {
    pub api: ApiConfig,
    pub avatars: AvatarConfig,
    pub logging: LoggingConfig,
}
