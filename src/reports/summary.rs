//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoredDocument};
use crate::anchors::{DistributionReport, Severity};
use crate::audit::AuditReport;
use crate::model::AnchorDistribution;
use crate::quality::{Grade, Priority, ScoreReport};
use crate::validators::{DensityReport, DensityStatus, EeatReport, EeatStatus, HeaderReport};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn score_color(score: u32) -> &'static str {
    match score {
        70..=u32::MAX => "green",
        50..=69 => "yellow",
        _ => "red",
    }
}

const fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::APlus | Grade::A | Grade::B => "green",
        Grade::C | Grade::D => "yellow",
        Grade::F => "red",
    }
}

/// Summary reporter for shell output
#[derive(Debug, Clone, Copy)]
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, title: &str, lines: &mut Vec<String>) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
    }

    fn score_lines(&self, source: &str, report: &ScoreReport, config: &ReportConfig) -> Vec<String> {
        let mut lines = Vec::new();
        self.header(&format!("SEO Score: {source}"), &mut lines);

        lines.push(format!(
            "{}  {}/100  {}  {}",
            self.color("Total:", "cyan"),
            report.total_score,
            self.color(report.grade.letter(), grade_color(report.grade)),
            report.grade_description
        ));
        if !report.keyword.is_empty() {
            lines.push(format!("{}  {}", self.color("Keyword:", "cyan"), report.keyword));
        }
        if !config.passes(report.total_score) {
            lines.push(self.color(
                &format!(
                    "Below minimum score ({})",
                    config.min_score.unwrap_or_default()
                ),
                "red",
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Criteria:", "bold"));
        for (criterion, result) in &report.criteria {
            lines.push(format!(
                "  {:<18} {}",
                criterion.label(),
                self.color(&format!("{:>3}", result.score), score_color(result.score))
            ));
            for issue in &result.issues {
                lines.push(format!("      {}", self.color(issue, "dim")));
            }
        }

        if !report.suggestions.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Suggestions:", "bold"));
            for suggestion in &report.suggestions {
                let tag = match suggestion.priority {
                    Priority::High => self.color("[HIGH]", "red"),
                    Priority::Medium => self.color("[MEDIUM]", "yellow"),
                };
                lines.push(format!(
                    "  {tag} {}: {}",
                    suggestion.criterion.label(),
                    suggestion.message
                ));
            }
        }
        lines
    }

    /// Render a density check.
    #[must_use]
    pub fn density(&self, keyword: &str, report: &DensityReport) -> String {
        let status_color = match report.status {
            DensityStatus::Optimal => "green",
            DensityStatus::TooLow | DensityStatus::TooHigh => "yellow",
        };
        let mut lines = Vec::new();
        self.header(&format!("Keyword Density: {keyword}"), &mut lines);
        lines.push(format!(
            "{}  {:.2}% ({} occurrences in {} words)",
            self.color("Density:", "cyan"),
            report.density,
            report.occurrences,
            report.word_count
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Status:", "cyan"),
            self.color(report.status.name(), status_color)
        ));
        lines.push(report.message.clone());
        lines.join("\n")
    }

    /// Render a header hierarchy check.
    #[must_use]
    pub fn headers(&self, report: &HeaderReport) -> String {
        let mut lines = Vec::new();
        self.header("Header Hierarchy", &mut lines);
        lines.push(format!(
            "{}  {}",
            self.color("Valid:", "cyan"),
            if report.valid {
                self.color("yes", "green")
            } else {
                self.color("no", "red")
            }
        ));
        let counts: Vec<String> = report
            .level_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(level, count)| format!("H{}={count}", level + 1))
            .collect();
        lines.push(format!(
            "{}  {} ({})",
            self.color("Headings:", "cyan"),
            report.total_headers,
            if counts.is_empty() {
                "none".to_string()
            } else {
                counts.join(", ")
            }
        ));
        for issue in &report.issues {
            lines.push(format!("  {} {issue}", self.color("!", "red")));
        }
        lines.join("\n")
    }

    /// Render an E-E-A-T check.
    #[must_use]
    pub fn eeat(&self, report: &EeatReport) -> String {
        let status_color = match report.status {
            EeatStatus::Excellent => "green",
            EeatStatus::Good => "yellow",
            EeatStatus::Poor => "red",
        };
        let signals = &report.signals;
        let mut lines = Vec::new();
        self.header("E-E-A-T", &mut lines);
        lines.push(format!(
            "{}  {}/100  {}",
            self.color("Score:", "cyan"),
            report.score,
            self.color(&report.status.to_string(), status_color)
        ));
        lines.push(format!(
            "{}  experience={} statistics={} author={} external_links={} stale={}",
            self.color("Signals:", "cyan"),
            signals.has_experience,
            signals.statistics,
            signals.has_author,
            signals.external_links,
            signals
                .stale
                .map_or_else(|| "unknown".to_string(), |s| s.to_string())
        ));
        for issue in &report.issues {
            lines.push(format!("  - {issue}"));
        }
        lines.join("\n")
    }

    fn distribution_lines(
        &self,
        distribution: Option<&AnchorDistribution>,
        report: &DistributionReport,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        self.header("Anchor Distribution", &mut lines);
        if let Some(distribution) = distribution {
            let shares: Vec<String> = distribution
                .iter()
                .map(|(anchor_type, pct)| format!("{anchor_type}={pct:.1}%"))
                .collect();
            lines.push(format!(
                "{}  {}",
                self.color("Current:", "cyan"),
                if shares.is_empty() {
                    "empty".to_string()
                } else {
                    shares.join(", ")
                }
            ));
        }
        lines.push(format!(
            "{}  {}",
            self.color("Compliant:", "cyan"),
            if report.compliant {
                self.color("yes", "green")
            } else {
                self.color("no", "red")
            }
        ));
        for issue in &report.issues {
            let color = match issue.severity {
                Severity::Critical | Severity::High => "red",
                Severity::Medium => "yellow",
            };
            lines.push(format!(
                "  {} {}",
                self.color(&format!("[{}]", issue.severity), color),
                issue.message
            ));
        }
        lines
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_score_report(
        &self,
        documents: &[ScoredDocument],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut sections: Vec<String> = documents
            .iter()
            .map(|doc| self.score_lines(&doc.source, &doc.report, config).join("\n"))
            .collect();

        if documents.len() > 1 {
            let failing = documents
                .iter()
                .filter(|doc| !config.passes(doc.report.total_score))
                .count();
            let average = documents
                .iter()
                .map(|doc| f64::from(doc.report.total_score))
                .sum::<f64>()
                / documents.len() as f64;
            sections.push(format!(
                "{}  {} documents, average {:.1}, {} below threshold",
                self.color("Overall:", "bold"),
                documents.len(),
                average,
                failing
            ));
        }
        Ok(sections.join("\n\n"))
    }

    fn generate_audit_report(
        &self,
        source: &str,
        audit: &AuditReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let keyword = audit.score.keyword.as_str();
        let mut sections = vec![
            self.score_lines(source, &audit.score, config).join("\n"),
            format!(
                "{}\n{}  {}",
                self.density(keyword, &audit.density),
                self.color("In first 100 words:", "cyan"),
                if audit.keyword_in_intro { "yes" } else { "no" }
            ),
            self.headers(&audit.hierarchy),
            self.eeat(&audit.eeat),
        ];
        if let Some(anchors) = &audit.anchors {
            sections.push(self.distribution_lines(None, anchors).join("\n"));
        }
        if !audit.related_terms.is_empty() {
            let mut lines = Vec::new();
            self.header("Related Terms", &mut lines);
            for term in &audit.related_terms {
                let mark = if term.present {
                    self.color("✓", "green")
                } else {
                    self.color("✗", "red")
                };
                lines.push(format!(
                    "  {mark} {} ({} occurrences, {:.2}%)",
                    term.term, term.occurrences, term.density
                ));
            }
            sections.push(lines.join("\n"));
        }
        Ok(sections.join("\n\n"))
    }

    fn generate_distribution_report(
        &self,
        distribution: &AnchorDistribution,
        report: &DistributionReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        Ok(self.distribution_lines(Some(distribution), report).join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::model::{AnchorType, ContentDocument};
    use crate::quality::ContentScorer;
    use crate::anchors::AnchorBalancer;

    fn scored() -> ScoredDocument {
        let scorer = ContentScorer::new(&EngineConfig::default()).unwrap();
        let doc = ContentDocument::new("Guide vélo", "<h1>Guide vélo</h1><p>Un vélo.</p>")
            .with_keyword("vélo");
        ScoredDocument {
            source: "guide.html".to_string(),
            report: scorer.calculate_score(&doc),
        }
    }

    #[test]
    fn test_plain_summary_has_no_escape_codes() {
        let reporter = SummaryReporter::new().no_color();
        let text = reporter
            .generate_score_report(&[scored()], &ReportConfig::default())
            .unwrap();
        assert!(text.contains("SEO Score: guide.html"));
        assert!(text.contains("Meta description"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_threshold_line() {
        let reporter = SummaryReporter::new().no_color();
        let config = ReportConfig::default().with_min_score(Some(101));
        let text = reporter.generate_score_report(&[scored()], &config).unwrap();
        assert!(text.contains("Below minimum score (101)"));
    }

    #[test]
    fn test_multi_document_overall_line() {
        let reporter = SummaryReporter::new().no_color();
        let text = reporter
            .generate_score_report(&[scored(), scored()], &ReportConfig::default())
            .unwrap();
        assert!(text.contains("2 documents"));
    }

    #[test]
    fn test_distribution_summary() {
        let balancer = AnchorBalancer::new(&EngineConfig::default()).unwrap();
        let distribution = AnchorDistribution::new().with(AnchorType::Exact, 40.0);
        let report = balancer.validate_distribution(&distribution);
        let text = SummaryReporter::new()
            .no_color()
            .generate_distribution_report(&distribution, &report, &ReportConfig::default())
            .unwrap();
        assert!(text.contains("exact=40.0%"));
        assert!(text.contains("Compliant:  no"));
        assert!(text.contains("[critical]"));
    }

    #[test]
    fn test_colored_output() {
        let text = SummaryReporter::new().headers(&HeaderReport {
            valid: true,
            issues: Vec::new(),
            h1_count: 1,
            total_headers: 1,
            skips: Vec::new(),
            level_counts: [1, 0, 0, 0, 0, 0],
        });
        assert!(text.contains("\x1b[32myes\x1b[0m"));
        assert!(text.contains("H1=1"));
    }
}
