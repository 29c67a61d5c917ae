//! Report generation for scores, audits and anchor distributions.
//!
//! Three output formats are provided:
//! - Summary: compact colored terminal output
//! - JSON: structured data wrapped in a tool/version envelope
//! - SARIF: CI/CD code-scanning dashboards

mod json;
mod sarif;
mod summary;
mod types;

pub use json::JsonReporter;
pub use sarif::SarifReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ScoredDocument};

use crate::anchors::DistributionReport;
use crate::audit::AuditReport;
use crate::model::AnchorDistribution;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Report for one or more scored documents
    fn generate_score_report(
        &self,
        documents: &[ScoredDocument],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Report for a full audit of one document
    fn generate_audit_report(
        &self,
        source: &str,
        audit: &AuditReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Report for an anchor distribution check
    fn generate_distribution_report(
        &self,
        distribution: &AnchorDistribution,
        report: &DistributionReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a score report to a writer
    fn write_score_report(
        &self,
        documents: &[ScoredDocument],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_score_report(documents, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Build the reporter for a format.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Sarif => Box::new(SarifReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Sarif] {
            assert_eq!(create_reporter(format, false).format(), format);
        }
    }

    #[test]
    fn test_write_score_report_to_buffer() {
        let scorer = crate::quality::ContentScorer::new(&crate::config::EngineConfig::default())
            .unwrap();
        let documents = vec![ScoredDocument {
            source: "article.html".to_string(),
            report: scorer.calculate_score(&crate::model::ContentDocument::default()),
        }];
        let mut buffer = Vec::new();
        JsonReporter::new()
            .write_score_report(&documents, &ReportConfig::default(), &mut buffer)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["documents"][0]["source"], "article.html");
    }
}
