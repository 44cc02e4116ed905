//! Numeric-token conflict detection.
//!
//! Two names that carry different numbers ("Acme 1" and "Acme 2") usually
//! refer to different entities even when their canonical keys are nearly
//! identical. Such pairs are rejected before they are scored.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("numeric token pattern is valid"));

/// The distinct maximal digit runs found in a name.
///
/// Comparison is set equality: repeated numbers collapse, order is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericTokens(BTreeSet<String>);

impl NumericTokens {
    /// Extracts the numeric tokens of a (lowercased) name.
    ///
    /// # Examples
    /// ```
    /// use dupe_names::matching::NumericTokens;
    ///
    /// let tokens = NumericTokens::extract("corp123west 7 123");
    /// assert_eq!(tokens.len(), 2);
    /// assert!(tokens.contains("123"));
    /// assert!(tokens.contains("7"));
    /// ```
    pub fn extract(name: &str) -> Self {
        Self(
            NUMERIC_TOKEN
                .find_iter(name)
                .map(|m| m.as_str().to_string())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

/// Returns true when two lowercased names must never be matched.
///
/// # Arguments
/// * `name1` - First name, already lowercased
/// * `name2` - Second name, already lowercased
///
/// # Returns
/// * `bool` - True if the sets of numeric tokens differ
///
/// # Examples
/// ```
/// use dupe_names::matching::has_fundamental_conflict;
///
/// assert!(has_fundamental_conflict("acme 1", "acme 2"));
/// assert!(!has_fundamental_conflict("acme 1 1", "acme 1"));
/// assert!(!has_fundamental_conflict("acme inc", "acme co"));
/// ```
pub fn has_fundamental_conflict(name1: &str, name2: &str) -> bool {
    NumericTokens::extract(name1) != NumericTokens::extract(name2)
}
