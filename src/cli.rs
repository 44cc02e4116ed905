use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Flag probable duplicate names in a list
///
/// Reads one name per line, normalizes each one (lowercase, letters and digits
/// only, trailing business suffix such as "Inc" or "LLC" removed) and compares
/// every pair with Jaro-Winkler similarity. Pairs whose numbers differ, like
/// "Store 1" and "Store 2", are never reported.
///
/// Use `-` as INPUT or OUTPUT to read from stdin or write to stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// File with one name per line, or `-` for stdin
    #[arg(required_unless_present = "list_config")]
    pub input: Option<String>,

    /// Where to write the report, or `-` for stdout
    #[arg(required_unless_present = "list_config")]
    pub output: Option<String>,

    /// Minimum similarity (0.0-1.0) for a pair to be reported.
    /// Overrides the config file and DUPE_NAMES_THRESHOLD. Defaults to 0.99.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true, help_heading = "Matching")]
    pub threshold: Option<f64>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log at debug level and mirror log output to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
