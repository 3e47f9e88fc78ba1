//! Command handlers for the `ndcg` binary.
//!
//! Each handler returns the rendered output instead of printing it.

use anyhow::Context;
use ndcg_core::config::parse_ranking;
use ndcg_core::{evaluate, EvalConfig, Evaluation, OutputFormat, RankingSampler};

/// Predicted ordering of the built-in example.
pub const EXAMPLE_PREDICTED: [u32; 5] = [1, 2, 6, 7, 4];
/// Ideal ordering of the built-in example.
pub const EXAMPLE_IDEAL: [u32; 5] = [1, 8, 2, 3, 4];

fn render(config: &EvalConfig, eval: &Evaluation, with_rankings: bool) -> anyhow::Result<String> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(eval).context("failed to serialize evaluation")
        }
        OutputFormat::Text if with_rankings => Ok(format!(
            "{}\n{}",
            eval.rankings(),
            eval.summary(config.precision)
        )),
        OutputFormat::Text => Ok(eval.summary(config.precision)),
    }
}

pub fn cmd_example(config: &EvalConfig, k: Option<usize>) -> anyhow::Result<String> {
    let eval = evaluate(&EXAMPLE_PREDICTED, &EXAMPLE_IDEAL, k);
    render(config, &eval, false)
}

pub fn cmd_score(
    config: &EvalConfig,
    predicted: &str,
    ideal: &str,
    k: Option<usize>,
) -> anyhow::Result<String> {
    let predicted = parse_ranking(predicted).context("invalid --predicted ranking")?;
    let ideal = parse_ranking(ideal).context("invalid --ideal ranking")?;
    let eval = evaluate(&predicted, &ideal, k);
    render(config, &eval, false)
}

pub fn cmd_random(config: &EvalConfig, k: Option<usize>) -> anyhow::Result<String> {
    let mut sampler = RankingSampler::from_config(&config.random);
    let eval = sampler
        .random_evaluation(config.random.length, config.random.max_value, k)
        .context("failed to generate random rankings")?;
    render(config, &eval, true)
}
