//! # ndcg-core
//!
//! Ranking-quality metrics: Discounted Cumulative Gain (DCG) and its
//! normalized form (NDCG) at a cutoff rank `k`.
//!
//! Relevance labels for a predicted ranking are derived by aligning it
//! against an ideal ranking with an ordered, consume-once scan. The labels
//! then feed the gain scorer.
//!
//! ## Features
//!
//! - **Relevance alignment**: binary labels from any `PartialEq` item type
//! - **DCG@k / NDCG@k**: `(2^rel - 1) / log2(i + 1)` gains, graded relevance
//! - **Evaluation reports**: serializable results with a text summary
//! - **Random checks**: seeded generation of distinct-item rankings
//! - **Layered config**: defaults, TOML file and `NDCG_` environment
//!
//! ## Quick Start
//!
//! ```rust
//! use ndcg_core::metrics::{compute_relevance_scores, ndcg_at_k};
//!
//! let predicted = [1, 2, 6, 7, 4];
//! let ideal = [1, 8, 2, 3, 4];
//!
//! let scores = compute_relevance_scores(&predicted, &ideal);
//! assert_eq!(scores.predicted, vec![1, 1, 0, 0, 1]);
//!
//! let ndcg = ndcg_at_k(&scores.predicted, &scores.ideal, predicted.len());
//! println!("NDCG score at k=5: {ndcg:.4}");
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::float_cmp,
        clippy::unwrap_used
    )
)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod sampling;

pub use config::{EvalConfig, OutputFormat, RandomConfig};
pub use error::{Error, Result};
pub use evaluation::{evaluate, Evaluation};
pub use metrics::{compute_relevance_scores, dcg_at_k, ndcg_at_k, RelevanceScores};
pub use sampling::RankingSampler;
