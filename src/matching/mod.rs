//! Duplicate name matching pipeline.
//!
//! - `normalize`: canonical keys for raw names
//! - `conflict`: numeric-token conflicts that veto a pair outright
//! - `similarity`: Jaro-Winkler scoring of canonical keys
//! - `pairs`: lazy enumeration of unordered position pairs
//! - `matcher`: the all-pairs scan that ties the above together
//!
//! Everything here is pure and infallible; I/O lives in [`crate::io`].

mod conflict;
mod matcher;
mod models;
mod normalize;
mod pairs;
mod similarity;

pub use conflict::{NumericTokens, has_fundamental_conflict};
pub use matcher::{MatchSettings, PairMatcher};
pub use models::{Match, MatchOutcome, MatchStats, NameRecord};
pub use normalize::Normalizer;
pub use pairs::{PairIndices, pair_count};
pub use similarity::similarity;
