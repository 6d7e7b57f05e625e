// Analyzer module: aggregates the return/risk, range and growth calculations.

pub mod growth;
pub mod range;
pub mod returns;

use crate::model::{AnalysisError, RangeStats, ReturnStats};

pub use growth::project_growth;

/// Trait defining the interface for a price series analyzer.
pub trait Analyzer {
    fn analyze(&self, prices: &[f64]) -> Result<ReturnStats, AnalysisError>;
    fn analyze_range(&self, prices: &[f64]) -> Result<RangeStats, AnalysisError>;
}

/// Default analyzer. Stateless; every call works only on its arguments.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for AnalyzerImpl {
    fn analyze(&self, prices: &[f64]) -> Result<ReturnStats, AnalysisError> {
        returns::analyze(prices)
    }

    fn analyze_range(&self, prices: &[f64]) -> Result<RangeStats, AnalysisError> {
        range::analyze_range(prices)
    }
}
