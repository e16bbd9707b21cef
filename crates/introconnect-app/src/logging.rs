//! Subscriber setup for the binary.
//!
//! Logging is installed before the config file is read so that load and
//! validation events are captured. When neither `--log-level` nor `RUST_LOG`
//! pins the filter, the configured level is swapped in afterwards through a
//! reload handle.

use introconnect_config::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Where the active filter directive came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSource {
    Cli(String),
    Env(String),
    /// Default level until the config file says otherwise.
    Provisional,
}

impl FilterSource {
    /// `--log-level` wins, then `RUST_LOG`.
    pub fn resolve(cli: Option<&str>, env: Option<String>) -> Self {
        if let Some(directive) = cli {
            return FilterSource::Cli(directive.to_string());
        }
        match env {
            Some(directive) if !directive.trim().is_empty() => FilterSource::Env(directive),
            _ => FilterSource::Provisional,
        }
    }

    pub fn from_env(cli: Option<&str>) -> Self {
        Self::resolve(cli, std::env::var(EnvFilter::DEFAULT_ENV).ok())
    }

    pub fn directive(&self) -> &str {
        match self {
            FilterSource::Cli(d) | FilterSource::Env(d) => d,
            FilterSource::Provisional => LogLevel::default().directive(),
        }
    }

    pub fn follows_config(&self) -> bool {
        matches!(self, FilterSource::Provisional)
    }
}

/// Registry with a reloadable filter and a `fmt` layer writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> (impl Subscriber + Send + Sync, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

pub fn init(source: &FilterSource) -> FilterHandle {
    let filter = EnvFilter::new(source.directive());
    let (subscriber, handle) = subscriber(filter, std::io::stderr);
    subscriber.init();
    handle
}

/// Swap in the configured level unless the filter was pinned on startup.
pub fn apply_config_level(handle: &FilterHandle, source: &FilterSource, level: LogLevel) {
    if !source.follows_config() {
        return;
    }
    if let Err(e) = handle.reload(EnvFilter::new(level.directive())) {
        tracing::warn!("could not apply configured log level: {e}");
    }
}
