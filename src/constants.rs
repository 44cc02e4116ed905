//! Application-wide constants and default configuration values
//!
//! This module centralizes the matching defaults and file locations so the
//! config layer, the CLI and the tests agree on them.

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "dupe_names";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "dupe_names.log";

/// Identifier meaning "standard input" for the input and "standard output" for the report
pub const STDIO_MARKER: &str = "-";

/// Matching defaults
pub mod matching {
    /// Minimum Jaro-Winkler score for a pair to be reported
    pub const DEFAULT_THRESHOLD: f64 = 0.99;

    /// Business suffixes stripped from the end of a normalized name, tried in this order
    pub const DEFAULT_SUFFIXES: [&str; 9] = [
        "inc", "llc", "ltd", "corp", "company", "co", "com", "llp", "plc",
    ];

    /// Lists shorter than this are always scanned on the calling thread.
    /// Below it the rayon fan-out costs more than the comparisons.
    pub const PARALLEL_MIN_NAMES: usize = 256;
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const THRESHOLD: &str = "DUPE_NAMES_THRESHOLD";
    pub const LOG_FILE: &str = "DUPE_NAMES_LOG_FILE";
    pub const PARALLEL: &str = "DUPE_NAMES_PARALLEL";
}

/// Report formatting
pub mod report {
    /// Decimal places used when printing a similarity score
    pub const SCORE_PRECISION: usize = 2;
}
