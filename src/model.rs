// Core structs: PriceSeries, ReturnStats, RangeStats and the error types
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Default number of price points a series may hold.
pub const DEFAULT_CAPACITY: usize = 100;

/// Minimum number of points needed for return or range analysis.
pub const MIN_ANALYSIS_POINTS: usize = 2;

/// Chronologically ordered daily prices. Index 0 is the earliest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<f64>,
    capacity: usize,
}

impl PriceSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a series from `values`, keeping at most `capacity` of them.
    /// Returns the series and how many values were dropped.
    pub fn from_values(values: Vec<f64>, capacity: usize) -> (Self, usize) {
        let mut points = values;
        let dropped = points.len().saturating_sub(capacity);
        points.truncate(capacity);
        (Self { points, capacity }, dropped)
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_analyzable(&self) -> bool {
        self.points.len() >= MIN_ANALYSIS_POINTS
    }
}

/// Risk band derived from the standard deviation of daily returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    HighVolatility,
    BalancedRisk,
    Conservative,
}

impl RiskCategory {
    pub const HIGH_THRESHOLD: f64 = 0.05;
    pub const BALANCED_THRESHOLD: f64 = 0.02;

    /// Both bounds are strict: a std dev of exactly 0.05 is Balanced,
    /// exactly 0.02 is Conservative. NaN compares false and lands in Conservative.
    pub fn classify(std_dev: f64) -> Self {
        if std_dev > Self::HIGH_THRESHOLD {
            RiskCategory::HighVolatility
        } else if std_dev > Self::BALANCED_THRESHOLD {
            RiskCategory::BalancedRisk
        } else {
            RiskCategory::Conservative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::HighVolatility => "High Volatility Asset",
            RiskCategory::BalancedRisk => "Balanced Risk Asset",
            RiskCategory::Conservative => "Conservative/Stable Asset",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of the return/risk analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStats {
    pub returns: Vec<f64>,
    pub mean_return: f64,
    pub std_dev: f64,
    pub category: RiskCategory,
}

/// Output of the range analysis. `sorted` is an ascending copy of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeStats {
    pub sorted: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub spread: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("'{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("at least {required} price points are required, got {found}")]
    InsufficientData { required: usize, found: usize },

    #[error("projection horizon of {years} years exceeds the limit of {limit}")]
    HorizonTooLong { years: i64, limit: i64 },

    #[error("principal must be a non-negative number, got {0}")]
    InvalidPrincipal(f64),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("end of input")]
    Eof,

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
