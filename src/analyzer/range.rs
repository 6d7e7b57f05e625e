use crate::model::{AnalysisError, MIN_ANALYSIS_POINTS, RangeStats};

/// Sorts a copy of `prices` ascending and derives min, max and spread.
/// The caller's series keeps its chronological order.
pub fn analyze_range(prices: &[f64]) -> Result<RangeStats, AnalysisError> {
    if prices.len() < MIN_ANALYSIS_POINTS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_ANALYSIS_POINTS,
            found: prices.len(),
        });
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    Ok(RangeStats {
        sorted,
        min,
        max,
        spread: max - min,
    })
}
