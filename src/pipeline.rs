//! End-to-end run: read names, match them, write the report.

use crate::error::AppError;
use crate::io::{read_names, write_report};
use crate::matching::{MatchOutcome, MatchSettings, PairMatcher};
use std::time::Instant;
use tracing::info;

/// Runs the whole pipeline for one input and one output.
///
/// # Arguments
/// * `input` - Path of the name list, or `-` for stdin
/// * `output` - Path of the report, or `-` for stdout
/// * `settings` - Threshold, suffixes and parallelism for the matcher
///
/// # Returns
/// * `Ok(MatchOutcome)` - The ranked matches that were written, with scan counters
/// * `Err(AppError)` - Reading the input or writing the report failed
///
/// # Example
/// ```no_run
/// use dupe_names::matching::MatchSettings;
/// use dupe_names::pipeline::run;
///
/// # async fn example() -> Result<(), dupe_names::AppError> {
/// let outcome = run("companies.txt", "duplicates.txt", MatchSettings::default()).await?;
/// println!("{} probable duplicates", outcome.matches.len());
/// # Ok(())
/// # }
/// ```
pub async fn run(
    input: &str,
    output: &str,
    settings: MatchSettings,
) -> Result<MatchOutcome, AppError> {
    let names = read_names(input).await?;
    let name_count = names.len();

    let started = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || {
        let matcher = PairMatcher::new(settings);
        let records = matcher.prepare(&names);
        matcher.match_records(&records)
    })
    .await?;

    info!(
        "Matched {name_count} names in {:?}: {}",
        started.elapsed(),
        outcome.stats
    );

    write_report(output, &outcome.matches).await?;
    Ok(outcome)
}
