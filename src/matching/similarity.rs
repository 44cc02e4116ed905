//! Jaro-Winkler scoring of canonical keys.

use strsim::jaro_winkler;

/// Scores two canonical keys in `[0.0, 1.0]`, 1.0 meaning identical.
///
/// `strsim` matches characters greedily starting from its first argument, so
/// the keys are passed in a fixed order to keep the score symmetric.
///
/// # Examples
/// ```
/// use dupe_names::matching::similarity;
///
/// assert_eq!(similarity("acme", "acme"), 1.0);
/// assert_eq!(similarity("acme", ""), 0.0);
/// assert_eq!(similarity("", ""), 1.0);
/// assert!(similarity("acme", "acne") > 0.8);
/// ```
pub fn similarity(key1: &str, key2: &str) -> f64 {
    let (first, second) = if key1 <= key2 {
        (key1, key2)
    } else {
        (key2, key1)
    };
    jaro_winkler(first, second)
}
