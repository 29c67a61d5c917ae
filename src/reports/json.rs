//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoredDocument};
use crate::anchors::DistributionReport;
use crate::audit::AuditReport;
use crate::model::AnchorDistribution;
use serde::Serialize;
use serde_json::{json, Value};

/// JSON report generator
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Wrap any serializable result in the tool/version envelope.
    pub fn envelope<T: Serialize>(&self, kind: &str, report: &T) -> Result<String, ReportError> {
        self.render(&json!({
            "tool": "seo-compliance",
            "version": env!("CARGO_PKG_VERSION"),
            "kind": kind,
            "report": report,
        }))
    }

    fn render(&self, value: &Value) -> Result<String, ReportError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_score_report(
        &self,
        documents: &[ScoredDocument],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let entries: Vec<Value> = documents
            .iter()
            .map(|doc| {
                json!({
                    "source": doc.source,
                    "passed": config.passes(doc.report.total_score),
                    "report": doc.report,
                })
            })
            .collect();
        self.render(&json!({
            "tool": "seo-compliance",
            "version": env!("CARGO_PKG_VERSION"),
            "kind": "score",
            "minScore": config.min_score,
            "documents": entries,
        }))
    }

    fn generate_audit_report(
        &self,
        source: &str,
        audit: &AuditReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&json!({
            "tool": "seo-compliance",
            "version": env!("CARGO_PKG_VERSION"),
            "kind": "audit",
            "source": source,
            "passed": audit.passes(config.min_score.unwrap_or(0)),
            "report": audit,
        }))
    }

    fn generate_distribution_report(
        &self,
        distribution: &AnchorDistribution,
        report: &DistributionReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&json!({
            "tool": "seo-compliance",
            "version": env!("CARGO_PKG_VERSION"),
            "kind": "anchors",
            "distribution": distribution,
            "report": report,
        }))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
