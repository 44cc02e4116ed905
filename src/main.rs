// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use dupe_names::config::Config;
use dupe_names::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config and argument problems are reported after logging is up, so they reach the log file too
    let config = Config::load().await;

    let (log_file_path, _guard) = logging::setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let config = config.inspect_err(|e| tracing::error!("Failed to load config: {e}"))?;

    if args.list_config {
        commands::handle_list_config_command(&config);
        return Ok(());
    }

    commands::validate_args(&args)?;

    commands::handle_match_command(&args, &config)
        .await
        .inspect_err(|e| {
            if e.is_io_boundary() {
                tracing::error!("I/O failure: {e}");
            } else {
                tracing::error!("{e}");
            }
        })
}
