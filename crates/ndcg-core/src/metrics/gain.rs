//! Discounted Cumulative Gain scoring.
//!
//! # Formula
//!
//! `DCG@k = Σ (2^rel_i - 1) / log2(i + 1)` for 1-based positions `i` in `1..=k`
//! `NDCG@k = DCG@k(predicted) / DCG@k(ideal)`

/// Gain of a single relevance value: `2^rel - 1`.
#[inline]
fn gain(relevance: f64) -> f64 {
    2.0_f64.powf(relevance) - 1.0
}

/// Logarithmic discount for a 1-based rank: `log2(rank + 1)`.
#[inline]
fn discount(rank: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let rank = rank as f64;
    (rank + 1.0).log2()
}

/// Calculates DCG@k over the leading `k` relevance values.
///
/// Relevance is graded and read as `f64`, so binary `u8` labels and real
/// valued grades both work. `k == 0` scores 0.0; a `k` beyond the sequence
/// length uses the whole sequence.
///
/// # Example
///
/// ```rust
/// use ndcg_core::metrics::dcg_at_k;
///
/// let dcg = dcg_at_k(&[1u8, 1, 0], 3);
/// assert!((dcg - (1.0 + 1.0 / 3f64.log2())).abs() < 1e-12);
/// ```
#[must_use]
pub fn dcg_at_k<R: Copy + Into<f64>>(relevance: &[R], k: usize) -> f64 {
    relevance
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, &rel)| gain(rel.into()) / discount(i + 1))
        .sum()
}

/// Calculates NDCG@k: predicted DCG normalized by ideal DCG.
///
/// Returns 0.0 when the ideal DCG is exactly zero (`k == 0` or no ideal
/// labels) instead of dividing by zero.
#[must_use]
pub fn ndcg_at_k<R: Copy + Into<f64>>(
    predicted_relevance: &[R],
    ideal_relevance: &[R],
    k: usize,
) -> f64 {
    let idcg = dcg_at_k(ideal_relevance, k);
    if idcg == 0.0 {
        return 0.0;
    }

    dcg_at_k(predicted_relevance, k) / idcg
}
