//! Ordered relevance alignment between a predicted and an ideal ranking.
//!
//! The aligner walks the predicted ranking once and keeps a cursor into the
//! ideal ranking. A predicted item is relevant (label `1`) when it can be
//! found at or after the cursor; the cursor then moves past the match, so an
//! ideal slot is consumed at most once and matches never move backwards.
//!
//! On a miss the cursor rolls back to just after the last successful match
//! instead of staying where the failed scan stopped. Consecutive misses can
//! therefore rescan the same part of the ideal ranking.

use serde::{Deserialize, Serialize};

/// Relevance label of a predicted item found in the ideal ranking.
pub const RELEVANT: u8 = 1;
/// Relevance label of a predicted item with no aligned ideal position.
pub const NOT_RELEVANT: u8 = 0;

/// Binary relevance labels produced by [`compute_relevance_scores`].
///
/// Both sequences have the length of the predicted ranking. `ideal` is all
/// ones regardless of the ideal ranking's own length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelevanceScores {
    /// One label per predicted position.
    pub predicted: Vec<u8>,
    /// Labels of the ideal ordering, sized to the predicted ranking.
    pub ideal: Vec<u8>,
}

impl RelevanceScores {
    /// Splits the labels into `(predicted, ideal)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.predicted, self.ideal)
    }

    /// Number of predicted positions labelled relevant.
    #[must_use]
    #[allow(clippy::naive_bytecount)]
    pub fn matches(&self) -> usize {
        self.predicted.iter().filter(|&&rel| rel == RELEVANT).count()
    }

    /// Length of both label sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicted.len()
    }

    /// Returns true if the predicted ranking was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicted.is_empty()
    }
}

/// Scan state threaded through the predicted ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentCursor {
    /// Next ideal position a scan starts from.
    next: usize,
    /// Ideal position of the most recent match (0 before any match).
    last_matched: usize,
}

impl AlignmentCursor {
    /// Creates a cursor positioned at the start of the ideal ranking.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ideal position the next scan will start from.
    #[must_use]
    pub fn position(&self) -> usize {
        self.next
    }

    /// Labels one predicted item and advances (or rolls back) the cursor.
    pub fn step<T: PartialEq>(&mut self, item: &T, ideal: &[T]) -> u8 {
        // Exhausted: stay put, every remaining item is a miss.
        if self.next >= ideal.len() {
            return NOT_RELEVANT;
        }

        match ideal[self.next..].iter().position(|candidate| candidate == item) {
            Some(offset) => {
                let matched = self.next + offset;
                self.last_matched = matched;
                self.next = matched + 1;
                RELEVANT
            }
            None => {
                self.next = self.last_matched + 1;
                NOT_RELEVANT
            }
        }
    }
}

/// Derives binary relevance labels for `predicted` by aligning it against
/// `ideal`.
///
/// Item identifiers only need equality. Duplicates are allowed in either
/// ranking; each ideal occurrence satisfies at most one predicted item.
///
/// # Example
///
/// ```rust
/// use ndcg_core::metrics::compute_relevance_scores;
///
/// let scores = compute_relevance_scores(&[1, 2, 6, 7, 4], &[1, 8, 2, 3, 4]);
/// assert_eq!(scores.predicted, vec![1, 1, 0, 0, 1]);
/// assert_eq!(scores.ideal, vec![1, 1, 1, 1, 1]);
/// ```
#[must_use]
pub fn compute_relevance_scores<T: PartialEq>(predicted: &[T], ideal: &[T]) -> RelevanceScores {
    let (_, labels) = predicted.iter().fold(
        (AlignmentCursor::new(), Vec::with_capacity(predicted.len())),
        |(mut cursor, mut labels), item| {
            labels.push(cursor.step(item, ideal));
            (cursor, labels)
        },
    );

    RelevanceScores {
        predicted: labels,
        ideal: vec![RELEVANT; predicted.len()],
    }
}
