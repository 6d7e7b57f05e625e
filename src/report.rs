use crate::model::{ReportError, ReturnStats};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HEADER: &str = "INVESTMENT PERFORMANCE SUMMARY";
const DIVIDER: &str = "------------------------------";

/// Writes the summary of the latest return analysis to a flat file.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(stats: &ReturnStats) -> String {
        format!(
            "{}\n{}\nMean Return: {:.4}\nRisk Factor: {:.4}\nRisk Category: {}\n",
            HEADER, DIVIDER, stats.mean_return, stats.std_dev, stats.category
        )
    }

    /// Overwrites the report file; previous contents never survive.
    pub fn save(&self, stats: &ReturnStats) -> Result<(), ReportError> {
        fs::write(&self.path, Self::render(stats)).map_err(|source| {
            warn!("Report write to {} failed: {}", self.path.display(), source);
            ReportError::Io {
                path: self.path.clone(),
                source,
            }
        })?;
        info!("Report saved to {}", self.path.display());
        Ok(())
    }
}
