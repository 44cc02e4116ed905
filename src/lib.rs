//! Duplicate entity name detection
//!
//! This library flags probable duplicates in a list of names (company names,
//! vendors, customers) by normalizing each name and scoring every pair with
//! Jaro-Winkler similarity. Pairs whose numeric tokens differ are never matched.
//!
//! # Examples
//!
//! ```rust
//! use dupe_names::matching::{MatchSettings, PairMatcher};
//! use dupe_names::io::render_report;
//!
//! let matcher = PairMatcher::new(MatchSettings::default());
//! let matches = matcher.find_matches(&["Acme Inc", "ACME INC", "Acme 1", "Acme 2"]);
//!
//! assert_eq!(
//!     render_report(&matches),
//!     "Similarity 1.00:\nAcme Inc\nACME INC\n\n"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod matching;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use matching::{Match, MatchSettings, NameRecord, Normalizer, PairMatcher};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
