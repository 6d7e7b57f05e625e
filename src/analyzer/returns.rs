use crate::model::{AnalysisError, MIN_ANALYSIS_POINTS, ReturnStats, RiskCategory};
use tracing::{debug, warn};

/// Simple per-step returns: `(p[i] - p[i-1]) / p[i-1]`.
///
/// A zero divisor is not special-cased and yields `inf` or `NaN`.
pub fn daily_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Computes mean daily return, population std dev of the returns and the
/// resulting risk category.
pub fn analyze(prices: &[f64]) -> Result<ReturnStats, AnalysisError> {
    if prices.len() < MIN_ANALYSIS_POINTS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_ANALYSIS_POINTS,
            found: prices.len(),
        });
    }

    for (index, _) in prices[..prices.len() - 1]
        .iter()
        .enumerate()
        .filter(|(_, p)| **p == 0.0)
    {
        warn!("Zero price at index {} used as divisor; returns will be non-finite", index);
    }

    let returns = daily_returns(prices);
    let count = returns.len() as f64;
    let mean_return = returns.iter().sum::<f64>() / count;
    // Population variance over the returns, no Bessel correction.
    let variance = returns
        .iter()
        .map(|r| (r - mean_return).powi(2))
        .sum::<f64>()
        / count;
    let std_dev = variance.sqrt();
    let category = RiskCategory::classify(std_dev);

    debug!(
        "Return analysis: n = {}, mean = {:.6}, std_dev = {:.6}, category = {}",
        prices.len(),
        mean_return,
        std_dev,
        category
    );

    Ok(ReturnStats {
        returns,
        mean_return,
        std_dev,
        category,
    })
}
