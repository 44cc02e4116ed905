//! Canonical key derivation for raw entity names.
//!
//! A canonical key is the lowercase ASCII alphanumeric core of a name with a
//! trailing business suffix removed. Keys are only ever used for similarity
//! scoring; reports always show the original text.

use crate::constants::matching::DEFAULT_SUFFIXES;

/// Reduces raw names to canonical comparison keys.
///
/// The suffix list is part of the value so tests and config can swap it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    suffixes: Vec<String>,
}

impl Normalizer {
    /// Creates a normalizer that strips the given business suffixes.
    ///
    /// Suffixes are tried in the order given, each at most once.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured suffixes in the order they are tried.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Produces the canonical key for a raw name.
    ///
    /// # Arguments
    /// * `raw` - The name as it appeared in the input
    ///
    /// # Returns
    /// * `String` - Lowercase ASCII letters and digits only, with one trailing
    ///   occurrence of each configured suffix removed. May be empty.
    ///
    /// # Examples
    /// ```
    /// use dupe_names::matching::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.normalize("Acme, Inc."), "acme");
    /// assert_eq!(normalizer.normalize("ABC Corp"), "abc");
    /// assert_eq!(normalizer.normalize("Corp ABC"), "corpabc");
    /// assert_eq!(normalizer.normalize("Ünïcödé ™"), "ncd");
    /// ```
    pub fn normalize(&self, raw: &str) -> String {
        let mut key: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();

        for suffix in &self.suffixes {
            if key.ends_with(suffix.as_str()) {
                key.truncate(key.len() - suffix.len());
            }
        }

        key
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES)
    }
}
