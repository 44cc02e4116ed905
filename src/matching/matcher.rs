//! All-pairs duplicate detection over a name list.

use super::conflict::NumericTokens;
use super::models::{Match, MatchOutcome, MatchStats, NameRecord};
use super::normalize::Normalizer;
use super::pairs::{PairIndices, pair_count};
use super::similarity::similarity;
use crate::constants::matching::{DEFAULT_THRESHOLD, PARALLEL_MIN_NAMES};
use rayon::prelude::*;
use tracing::debug;

/// Settings for a matching run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSettings {
    /// Minimum score for a pair to be reported. Not range-checked.
    pub threshold: f64,
    /// Business suffixes stripped during normalization, in the order they are tried
    pub suffixes: Vec<String>,
    /// Scan rows on the rayon pool for large lists
    pub parallel: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            suffixes: Normalizer::default().suffixes().to_vec(),
            parallel: true,
        }
    }
}

/// A record with the data every pair comparison needs, computed once.
struct Prepared<'a> {
    record: &'a NameRecord,
    numbers: NumericTokens,
}

/// Compares every pair of names and ranks the probable duplicates.
#[derive(Debug, Clone)]
pub struct PairMatcher {
    normalizer: Normalizer,
    threshold: f64,
    parallel: bool,
}

impl PairMatcher {
    pub fn new(settings: MatchSettings) -> Self {
        Self {
            normalizer: Normalizer::new(settings.suffixes),
            threshold: settings.threshold,
            parallel: settings.parallel,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalizes raw names into records, in input order.
    pub fn prepare<S: AsRef<str>>(&self, names: &[S]) -> Vec<NameRecord> {
        names
            .iter()
            .map(|name| NameRecord::new(name.as_ref(), &self.normalizer))
            .collect()
    }

    /// Finds probable duplicates among raw names.
    ///
    /// # Examples
    /// ```
    /// use dupe_names::matching::{MatchSettings, PairMatcher};
    ///
    /// let matcher = PairMatcher::new(MatchSettings::default());
    /// let matches = matcher.find_matches(&["Acme Inc", "Acme Co", "Acme 1", "Acme 2"]);
    ///
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].first, "Acme Inc");
    /// assert_eq!(matches[0].second, "Acme Co");
    /// assert_eq!(matches[0].score, 1.0);
    /// ```
    pub fn find_matches<S: AsRef<str>>(&self, names: &[S]) -> Vec<Match> {
        self.match_records(&self.prepare(names)).matches
    }

    /// Scans all pairs of records and returns the ranked matches with scan counters.
    ///
    /// Matches are sorted by score, highest first. Equal scores keep the order
    /// in which their pairs were enumerated, whether or not the scan ran in parallel.
    pub fn match_records(&self, records: &[NameRecord]) -> MatchOutcome {
        let prepared: Vec<Prepared<'_>> = records
            .iter()
            .map(|record| Prepared {
                record,
                numbers: NumericTokens::extract(&record.original().to_lowercase()),
            })
            .collect();

        let len = prepared.len();
        let parallel = self.parallel && len >= PARALLEL_MIN_NAMES;
        debug!(
            "Scanning {} pairs over {len} names (parallel: {parallel})",
            pair_count(len)
        );

        let (mut matches, stats) = if parallel {
            let rows: Vec<(Vec<Match>, MatchStats)> = (0..len)
                .into_par_iter()
                .map(|i| self.scan(&prepared, PairIndices::row(len, i)))
                .collect();
            merge_rows(rows)
        } else {
            self.scan(&prepared, PairIndices::new(len))
        };

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        debug!("Scan finished: {stats}");

        MatchOutcome { matches, stats }
    }

    fn scan(
        &self,
        prepared: &[Prepared<'_>],
        pairs: impl Iterator<Item = (usize, usize)>,
    ) -> (Vec<Match>, MatchStats) {
        let mut matches = Vec::new();
        let mut stats = MatchStats::default();

        for (i, j) in pairs {
            stats.pairs += 1;
            let (a, b) = (&prepared[i], &prepared[j]);

            if a.record.original() == b.record.original() {
                stats.skipped_identical += 1;
                continue;
            }
            if a.numbers != b.numbers {
                stats.skipped_conflict += 1;
                continue;
            }

            stats.scored += 1;
            let score = similarity(a.record.key(), b.record.key());
            if score >= self.threshold {
                stats.matched += 1;
                matches.push(Match::new(a.record.original(), b.record.original(), score));
            }
        }

        (matches, stats)
    }
}

impl Default for PairMatcher {
    fn default() -> Self {
        Self::new(MatchSettings::default())
    }
}

fn merge_rows(rows: Vec<(Vec<Match>, MatchStats)>) -> (Vec<Match>, MatchStats) {
    let mut matches = Vec::new();
    let mut stats = MatchStats::default();
    for (row_matches, row_stats) in rows {
        matches.extend(row_matches);
        stats += row_stats;
    }
    (matches, stats)
}
