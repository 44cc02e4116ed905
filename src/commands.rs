use crate::cli::Args;
use dupe_names::config::Config;
use dupe_names::constants::STDIO_MARKER;
use dupe_names::error::AppError;
use dupe_names::pipeline;
use std::path::Path;
use tracing::{error, info};

/// Validates command line argument combinations.
///
/// Returns an error if the report would overwrite the input list.
/// Rejections are logged, so call this once logging is set up.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if let (Some(input), Some(output)) = (&args.input, &args.output)
        && input != STDIO_MARKER
        && same_file(input, output)
    {
        let error = AppError::config_error(format!(
            "Output '{output}' is the same file as input '{input}'"
        ));
        error!("Invalid arguments: {error}");
        return Err(error);
    }
    Ok(())
}

fn same_file(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (Path::new(a).canonicalize(), Path::new(b).canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Handles the default command: match the input list and write the report.
pub async fn handle_match_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let (Some(input), Some(output)) = (args.input.as_deref(), args.output.as_deref()) else {
        return Err(AppError::config_error("Both INPUT and OUTPUT are required"));
    };

    let settings = config.match_settings(args.threshold);
    info!(
        "Matching {input} -> {output} (threshold {}, {} suffixes)",
        settings.threshold,
        settings.suffixes.len()
    );

    let outcome = pipeline::run(input, output, settings).await?;
    info!("Found {} probable duplicate pairs", outcome.matches.len());

    Ok(())
}
