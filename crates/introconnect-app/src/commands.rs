//! Subcommand implementations. Output goes to the supplied writer so the
//! commands can be exercised without a terminal.

use std::io::Write;
use std::path::Path;

use introconnect_common::{Result, SocialError};
use introconnect_config::{config_to_json, AvatarConfig, IntroConfig};
use introconnect_social::{AvatarCatalog, AvatarPool, FriendRequests};
use tracing::{debug, info};

use crate::cli::Command;

pub fn run(command: &Command, config: &IntroConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Badge { file, breakdown } => badge(file, *breakdown, out),
        Command::Avatars {
            count,
            seed,
            current,
        } => avatars(&config.avatars, *count, seed.or(config.avatars.seed), current, out),
        Command::ApiUrl { mode } => {
            let mode = mode.unwrap_or(config.api.mode);
            writeln!(out, "{}", config.api.base_url_for(mode))?;
            Ok(())
        }
        Command::Config => {
            writeln!(out, "{}", config_to_json(config))?;
            Ok(())
        }
    }
}

fn badge(file: &Path, breakdown: bool, out: &mut impl Write) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let requests: FriendRequests = serde_json::from_str(&content)?;
    let counts = requests.unread();
    info!(
        incoming = counts.incoming,
        accepted = counts.accepted,
        "computed unread badge"
    );

    if breakdown {
        writeln!(out, "incoming: {}", counts.incoming)?;
        writeln!(out, "accepted: {}", counts.accepted)?;
        writeln!(out, "total: {}", counts.total())?;
    } else {
        writeln!(out, "{}", counts.total())?;
    }
    Ok(())
}

fn avatars(
    config: &AvatarConfig,
    count: usize,
    seed: Option<u64>,
    current: &str,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = catalog_from_config(config)?;
    debug!(size = catalog.len(), ?seed, "avatar catalog ready");

    let mut pool = match seed {
        Some(seed) => AvatarPool::seeded(catalog, seed),
        None => AvatarPool::with_entropy(catalog),
    };

    let mut preview = current.to_owned();
    for _ in 0..count {
        let next = pool.pick_next(&preview);
        writeln!(out, "{next}")?;
        preview = next.into_string();
    }
    Ok(())
}

/// Configured presets, or the built-in catalog when none are set.
pub fn catalog_from_config(
    config: &AvatarConfig,
) -> std::result::Result<AvatarCatalog, SocialError> {
    if config.presets.is_empty() {
        Ok(AvatarCatalog::builtin())
    } else {
        AvatarCatalog::new(config.presets.iter().map(String::as_str))
    }
}
