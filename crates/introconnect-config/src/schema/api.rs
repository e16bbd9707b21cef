//! API client configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Build mode the client is running in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    Development,
    #[default]
    Production,
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(ApiMode::Development),
            "production" | "prod" => Ok(ApiMode::Production),
            other => Err(format!("unknown api mode '{other}'")),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Development => write!(f, "development"),
            ApiMode::Production => write!(f, "production"),
        }
    }
}

/// Where the HTTP client sends requests.
///
/// In development the backend runs on its own port; in production the
/// frontend sits behind a reverse proxy that serves the API under `/api`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub mode: ApiMode,
    pub dev_base_url: String,
    pub prod_base_url: String,
    /// Send cookies with every request.
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: ApiMode::Production,
            dev_base_url: "http://localhost:5001/api".into(),
            prod_base_url: "/api".into(),
            with_credentials: true,
        }
    }
}

impl ApiConfig {
    /// Base URL for the configured mode.
    pub fn base_url(&self) -> &str {
        self.base_url_for(self.mode)
    }

    /// Base URL for an explicit mode, ignoring `self.mode`.
    pub fn base_url_for(&self, mode: ApiMode) -> &str {
        match mode {
            ApiMode::Development => &self.dev_base_url,
            ApiMode::Production => &self.prod_base_url,
        }
    }
}
