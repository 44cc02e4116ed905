use super::normalize::Normalizer;
use std::fmt;
use std::ops::AddAssign;

/// A name from the input together with its canonical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    original: String,
    key: String,
}

impl NameRecord {
    /// Builds a record, normalizing the name once.
    pub fn new(original: impl Into<String>, normalizer: &Normalizer) -> Self {
        let original = original.into();
        let key = normalizer.normalize(&original);
        Self { original, key }
    }

    /// The name exactly as it appeared in the input.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The canonical key used for similarity scoring.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A pair of input names judged to be probable duplicates.
///
/// `first` always comes from the earlier input position.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub first: String,
    pub second: String,
    pub score: f64,
}

impl Match {
    pub fn new(first: impl Into<String>, second: impl Into<String>, score: f64) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            score,
        }
    }
}

/// Counters collected while scanning pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Unordered position pairs visited
    pub pairs: u64,
    /// Pairs skipped because both originals were the same text
    pub skipped_identical: u64,
    /// Pairs skipped because their numeric tokens differ
    pub skipped_conflict: u64,
    /// Pairs that reached the similarity scorer
    pub scored: u64,
    /// Scored pairs at or above the threshold
    pub matched: u64,
}

impl AddAssign for MatchStats {
    fn add_assign(&mut self, other: Self) {
        self.pairs += other.pairs;
        self.skipped_identical += other.skipped_identical;
        self.skipped_conflict += other.skipped_conflict;
        self.scored += other.scored;
        self.matched += other.matched;
    }
}

impl fmt::Display for MatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pairs, {} identical, {} conflicting, {} scored, {} matched",
            self.pairs, self.skipped_identical, self.skipped_conflict, self.scored, self.matched
        )
    }
}

/// Ranked matches plus the counters from the scan that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub matches: Vec<Match>,
    pub stats: MatchStats,
}
