use crate::analyzer::{Analyzer, AnalyzerImpl, project_growth};
use crate::config::AppConfig;
use crate::model::{AnalysisError, LoadError, PriceSeries, RangeStats, ReportError, ReturnStats};
use crate::parser::load_prices;
use crate::report::ReportWriter;
use tracing::info;

/// What a successful load brought in.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub truncated: usize,
    pub rejected_token: Option<String>,
}

/// State of one interactive run: the configuration and the loaded series.
///
/// Created once at startup and dropped on exit. Only [`Session::load`]
/// replaces the series; every other operation reads it.
pub struct Session {
    config: AppConfig,
    series: PriceSeries,
    analyzer: AnalyzerImpl,
    report_writer: ReportWriter,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let series = PriceSeries::with_capacity(config.max_points);
        let report_writer = ReportWriter::new(&config.report_path);
        Self {
            config,
            series,
            analyzer: AnalyzerImpl::new(),
            report_writer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Replaces the series with the contents of the prices file.
    /// On error the previous series is kept.
    pub fn load(&mut self) -> Result<LoadSummary, LoadError> {
        let outcome = load_prices(&self.config.prices_path, self.config.max_points)?;
        self.series = outcome.series;
        Ok(LoadSummary {
            loaded: self.series.len(),
            truncated: outcome.truncated,
            rejected_token: outcome.rejected_token,
        })
    }

    pub fn analyze(&self) -> Result<ReturnStats, AnalysisError> {
        self.analyzer.analyze(self.series.points())
    }

    pub fn analyze_range(&self) -> Result<RangeStats, AnalysisError> {
        self.analyzer.analyze_range(self.series.points())
    }

    pub fn save_report(&self, stats: &ReturnStats) -> Result<(), ReportError> {
        self.report_writer.save(stats)
    }

    pub fn report_path(&self) -> &std::path::Path {
        self.report_writer.path()
    }

    /// Growth projection with the configured horizon limit applied.
    pub fn project_growth(&self, principal: f64, rate: f64, years: i64) -> Result<f64, AnalysisError> {
        if principal.is_nan() || principal < 0.0 {
            return Err(AnalysisError::InvalidPrincipal(principal));
        }
        if years > self.config.max_growth_years {
            return Err(AnalysisError::HorizonTooLong {
                years,
                limit: self.config.max_growth_years,
            });
        }
        let value = project_growth(principal, rate, years);
        info!("Projected {:.2} at {} over {} years: {:.2}", principal, rate, years, value);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session_in(dir: &tempfile::TempDir) -> Session {
        Session::new(AppConfig {
            prices_path: dir.path().join("prices.txt").to_string_lossy().into_owned(),
            report_path: dir.path().join("report.txt").to_string_lossy().into_owned(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn range_analysis_keeps_chronological_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("prices.txt"), "100 80 120").unwrap();
        let mut session = session_in(&dir);
        session.load().unwrap();

        let before = session.analyze().unwrap();
        let range = session.analyze_range().unwrap();
        let after = session.analyze().unwrap();

        assert_eq!(range.sorted, vec![80.0, 100.0, 120.0]);
        assert_eq!(session.series().points(), &[100.0, 80.0, 120.0]);
        assert_eq!(before, after);
    }

    #[test]
    fn failed_load_keeps_previous_series() {
        let dir = tempfile::tempdir().unwrap();
        let prices = dir.path().join("prices.txt");
        fs::write(&prices, "1 2 3").unwrap();
        let mut session = session_in(&dir);
        session.load().unwrap();

        fs::remove_file(&prices).unwrap();
        assert!(matches!(session.load(), Err(LoadError::NotFound(_))));
        assert_eq!(session.series().len(), 3);
    }

    #[test]
    fn load_replaces_series() {
        let dir = tempfile::tempdir().unwrap();
        let prices = dir.path().join("prices.txt");
        let mut session = session_in(&dir);

        fs::write(&prices, "1 2 3 4").unwrap();
        session.load().unwrap();
        fs::write(&prices, "9").unwrap();
        let summary = session.load().unwrap();

        assert_eq!(summary.loaded, 1);
        assert_eq!(session.series().points(), &[9.0]);
        assert!(session.analyze().is_err());
    }

    #[test]
    fn growth_limits() {
        let session = Session::new(AppConfig {
            max_growth_years: 50,
            ..AppConfig::default()
        });

        assert!(session.project_growth(1000.0, 0.07, 50).is_ok());
        assert_eq!(session.project_growth(1000.0, 0.07, -5).unwrap(), 1000.0);
        assert_eq!(
            session.project_growth(1000.0, 0.07, 51),
            Err(AnalysisError::HorizonTooLong { years: 51, limit: 50 })
        );
        assert!(matches!(
            session.project_growth(-1.0, 0.07, 1),
            Err(AnalysisError::InvalidPrincipal(_))
        ));
    }

    #[test]
    fn growth_rejects_nan_principal() {
        let session = Session::new(AppConfig::default());
        assert!(matches!(
            session.project_growth(f64::NAN, 0.07, 3),
            Err(AnalysisError::InvalidPrincipal(p)) if p.is_nan()
        ));
    }
}
