//! Report type definitions.

use crate::quality::ScoreReport;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief human-readable summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// SARIF 2.1.0 for CI/CD
    Sarif,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Sarif => write!(f, "sarif"),
        }
    }
}

/// Options shared by every reporter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Threshold below which a score is reported as failing
    pub min_score: Option<u32>,
}

impl ReportConfig {
    #[must_use]
    pub const fn with_min_score(mut self, min_score: Option<u32>) -> Self {
        self.min_score = min_score;
        self
    }

    /// Whether a score passes the configured threshold.
    #[must_use]
    pub fn passes(&self, score: u32) -> bool {
        self.min_score.map_or(true, |min| score >= min)
    }
}

/// A score report tagged with where the document came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// File path or other identifier
    pub source: String,
    pub report: ScoreReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let name = format.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(format.to_string(), name);
        }
    }

    #[test]
    fn test_min_score_threshold() {
        let config = ReportConfig::default();
        assert!(config.passes(0));
        let config = config.with_min_score(Some(70));
        assert!(config.passes(70));
        assert!(!config.passes(69));
    }
}
