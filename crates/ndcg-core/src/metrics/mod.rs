//! Ranking quality metrics.
//!
//! This module provides:
//! - **Relevance alignment**: binary labels for a predicted ranking, derived
//!   by an ordered, consume-once scan of the ideal ranking
//! - **DCG@k / NDCG@k**: position-discounted gain and its normalized form
//!
//! # Example
//!
//! ```rust
//! use ndcg_core::metrics::{compute_relevance_scores, ndcg_at_k};
//!
//! let predicted = vec![1, 2, 6, 7, 4];
//! let ideal = vec![1, 8, 2, 3, 4];
//!
//! let scores = compute_relevance_scores(&predicted, &ideal);
//! let ndcg = ndcg_at_k(&scores.predicted, &scores.ideal, predicted.len());
//! assert!(ndcg > 0.0 && ndcg < 1.0);
//! ```

mod alignment;
mod gain;

pub use alignment::{
    compute_relevance_scores, AlignmentCursor, RelevanceScores, NOT_RELEVANT, RELEVANT,
};
pub use gain::{dcg_at_k, ndcg_at_k};
