//! End-to-end evaluation of a predicted ranking against an ideal one.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PRECISION;
use crate::metrics::{compute_relevance_scores, dcg_at_k, ndcg_at_k};

/// Result of aligning and scoring one pair of rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Predicted ranking, rendered for display.
    pub predicted_ranking: Vec<String>,
    /// Ideal ranking, rendered for display.
    pub ideal_ranking: Vec<String>,
    /// Binary relevance of each predicted position.
    pub predicted_relevance: Vec<u8>,
    /// Ideal relevance labels (all ones, sized to the predicted ranking).
    pub ideal_relevance: Vec<u8>,
    /// Cutoff rank used for scoring.
    pub k: usize,
    /// DCG@k of the predicted labels.
    pub dcg: f64,
    /// DCG@k of the ideal labels.
    pub idcg: f64,
    /// NDCG@k (0.0 when `idcg` is zero).
    pub ndcg: f64,
}

/// Aligns `predicted` against `ideal` and scores the result at `k`.
///
/// `k == None` uses the length of the predicted ranking.
///
/// # Example
///
/// ```rust
/// use ndcg_core::evaluate;
///
/// let eval = evaluate(&[7], &[7], None);
/// assert_eq!(eval.k, 1);
/// assert!((eval.ndcg - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn evaluate<T: PartialEq + Display>(
    predicted: &[T],
    ideal: &[T],
    k: Option<usize>,
) -> Evaluation {
    let scores = compute_relevance_scores(predicted, ideal);
    let k = k.unwrap_or(predicted.len());

    let dcg = dcg_at_k(&scores.predicted, k);
    let idcg = dcg_at_k(&scores.ideal, k);
    let ndcg = ndcg_at_k(&scores.predicted, &scores.ideal, k);

    tracing::debug!(
        k,
        predicted_len = predicted.len(),
        ideal_len = ideal.len(),
        matches = scores.matches(),
        ndcg,
        "ranking evaluated"
    );

    let (predicted_relevance, ideal_relevance) = scores.into_parts();
    Evaluation {
        predicted_ranking: predicted.iter().map(ToString::to_string).collect(),
        ideal_ranking: ideal.iter().map(ToString::to_string).collect(),
        predicted_relevance,
        ideal_relevance,
        k,
        dcg,
        idcg,
        ndcg,
    }
}

/// Renders a sequence as `[a, b, c]`.
pub(crate) fn format_list<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

impl Evaluation {
    /// Three-line report with the score at `precision` decimal places.
    #[must_use]
    pub fn summary(&self, precision: usize) -> String {
        format!(
            "Predicted Relevance: {}\nIdeal Relevance: {}\nNDCG score at k={}: {:.*}",
            format_list(&self.predicted_relevance),
            format_list(&self.ideal_relevance),
            self.k,
            precision,
            self.ndcg
        )
    }

    /// Both rankings, one per line, as printed before a random check.
    #[must_use]
    pub fn rankings(&self) -> String {
        format!(
            "Predicted Ranking: {}\nIdeal Ranking: {}",
            format_list(&self.predicted_ranking),
            format_list(&self.ideal_ranking)
        )
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(DEFAULT_PRECISION))
    }
}
