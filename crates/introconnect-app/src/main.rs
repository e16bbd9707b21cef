mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use introconnect_config::IntroConfig;

fn main() -> ExitCode {
    let args = cli::parse();

    let source = logging::FilterSource::from_env(args.log_level.as_deref());
    let filter = logging::init(&source);

    tracing::info!("IntroConnect v{} starting...", env!("CARGO_PKG_VERSION"));

    let loaded = introconnect_config::load_config(args.config.as_deref());
    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            IntroConfig::default()
        }
    };
    logging::apply_config_level(&filter, &source, config.logging.level);
    tracing::debug!(mode = %config.api.mode, "config ready");

    let stdout = std::io::stdout();
    match commands::run(&args.command, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
