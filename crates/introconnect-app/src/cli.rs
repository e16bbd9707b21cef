use std::path::PathBuf;

use clap::{Parser, Subcommand};
use introconnect_config::ApiMode;

/// IntroConnect: notification badge and avatar tools.
#[derive(Parser, Debug)]
#[command(name = "introconnect", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, introconnect=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the unread notification count for a friend-requests JSON file.
    Badge {
        /// JSON document with `incomingReqs` and `acceptedReqs`.
        file: PathBuf,

        /// Also print the incoming/accepted split.
        #[arg(long)]
        breakdown: bool,
    },

    /// Draw avatars from a shuffled pool, one per line.
    Avatars {
        /// How many avatars to draw.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Shuffle seed; overrides `avatars.seed` from the config.
        #[arg(long)]
        seed: Option<u64>,

        /// Avatar currently shown in the preview.
        #[arg(long, default_value = "")]
        current: String,
    },

    /// Print the API base URL.
    ApiUrl {
        /// development or production; defaults to `api.mode`.
        #[arg(long)]
        mode: Option<ApiMode>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
