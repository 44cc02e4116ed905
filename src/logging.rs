use crate::cli::Args;
use dupe_names::config::Config;
use dupe_names::constants::LOG_FILE_NAME;
use dupe_names::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits a log file path into its directory and file name.
///
/// `--log-file` wins over the config value; with neither, the platform log
/// directory and the default file name are used.
pub fn resolve_log_location(args: &Args, config: Option<&Config>) -> (String, String) {
    let config_log_path = config.and_then(|config| config.log_file_path.as_ref());
    match args.log_file.as_ref().or(config_log_path) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging configuration for the application.
///
/// - Always logs to a daily rolling file
/// - `--debug` raises the level to debug and mirrors output to stderr
///   (stdout stays clean for a report written to `-`)
/// - `RUST_LOG` directives are honored on top of the defaults
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config: Option<&Config>,
) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if args.debug { "debug" } else { "info" };
    let directive: Directive = format!("dupe_names={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(EnvFilter::from_default_env().add_directive(directive.clone()));

    let registry = tracing_subscriber::registry().with(file_layer);

    let result = if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_filter(EnvFilter::from_default_env().add_directive(directive)),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    result.map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
