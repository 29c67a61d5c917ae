//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod anchor;
mod audit;
mod check;
mod score;

pub use anchor::{run_anchor_next, run_anchor_validate, AnchorNextConfig};
pub use audit::{run_audit, AuditConfig};
pub use check::{run_density, run_eeat, run_headers, run_snippet, EeatOverrides};
pub use score::{run_score, ScoreConfig};

use crate::pipeline::{should_use_color, write_output, OutputTarget};
use crate::reports::{JsonReporter, ReportFormat, SummaryReporter};
use anyhow::{bail, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Output options shared by every command
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: ReportFormat,
    pub file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

impl OutputOptions {
    #[must_use]
    pub fn target(&self) -> OutputTarget {
        OutputTarget::from_option(self.file.clone())
    }

    /// Whether summaries should carry ANSI colors.
    #[must_use]
    pub fn colored(&self) -> bool {
        should_use_color(self.no_color, &self.target())
    }

    fn summary_reporter(&self) -> SummaryReporter {
        if self.colored() {
            SummaryReporter::new()
        } else {
            SummaryReporter::new().no_color()
        }
    }

    /// Write already rendered text to the configured target.
    pub fn emit(&self, content: &str) -> Result<()> {
        write_output(content, &self.target(), self.quiet)
    }
}

/// Render a single-check result as a summary or a JSON envelope.
fn emit_check<T: Serialize>(
    options: &OutputOptions,
    kind: &str,
    report: &T,
    summary: impl FnOnce(&SummaryReporter) -> String,
) -> Result<()> {
    let text = match options.format {
        ReportFormat::Summary => summary(&options.summary_reporter()),
        ReportFormat::Json => JsonReporter::new().envelope(kind, report)?,
        ReportFormat::Sarif => {
            bail!("SARIF output is only available for score, audit and anchor validate")
        }
    };
    options.emit(&text)
}
