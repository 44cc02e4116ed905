//! Lazy enumeration of unordered position pairs.

/// Yields every `(i, j)` with `i < j < len` exactly once, in row-major order:
/// `(0, 1), (0, 2), …, (1, 2), …`.
///
/// The iterator is `Clone`, so a sequence can be restarted from any point.
/// [`PairIndices::row`] covers a single `i`, which lets rows be handed out to
/// worker threads and concatenated back in order.
///
/// # Examples
/// ```
/// use dupe_names::matching::PairIndices;
///
/// let pairs: Vec<_> = PairIndices::new(3).collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
///
/// let row: Vec<_> = PairIndices::row(4, 1).collect();
/// assert_eq!(row, vec![(1, 2), (1, 3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairIndices {
    len: usize,
    i: usize,
    j: usize,
    end_row: usize,
}

impl PairIndices {
    /// All pairs over `len` positions.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            i: 0,
            j: 1,
            end_row: len,
        }
    }

    /// Only the pairs whose first position is `i`.
    pub fn row(len: usize, i: usize) -> Self {
        Self {
            len,
            i,
            j: i + 1,
            end_row: (i + 1).min(len),
        }
    }

    fn remaining(&self) -> usize {
        if self.i >= self.end_row {
            return 0;
        }
        // rest of the current row, then full rows i+1..end_row
        let current = self.len.saturating_sub(self.j);
        let rows_after = (self.i + 1..self.end_row)
            .map(|row| self.len - row - 1)
            .sum::<usize>();
        current + rows_after
    }
}

impl Iterator for PairIndices {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.end_row {
            if self.j < self.len {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairIndices {}

/// Number of unordered pairs over `len` positions.
pub fn pair_count(len: usize) -> u64 {
    let len = len as u64;
    len * len.saturating_sub(1) / 2
}
