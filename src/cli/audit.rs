//! Audit command handler.
//!
//! Runs every engine over one document through [`SeoAuditor`].

use super::OutputOptions;
use crate::audit::SeoAuditor;
use crate::config::EngineConfig;
use crate::enrichment::StaticGenerator;
use crate::pipeline::{exit_codes, load_distribution, load_document};
use crate::reports::{create_reporter, ReportConfig};
use anyhow::Result;
use std::path::PathBuf;

/// Audit command configuration
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub path: PathBuf,
    /// Inline spec or JSON/YAML file with the current anchor distribution
    pub distribution: Option<String>,
    /// Related terms to check coverage for
    pub related: Vec<String>,
    pub keyword: Option<String>,
    pub min_score: Option<u32>,
    pub output: OutputOptions,
}

/// Run the audit command, returning the desired exit code.
pub fn run_audit(engine: &EngineConfig, config: AuditConfig) -> Result<i32> {
    let auditor = SeoAuditor::new(engine.clone())?;

    let mut doc = load_document(&config.path)?;
    if let Some(keyword) = &config.keyword {
        doc.primary_keyword.clone_from(keyword);
    }
    let distribution = config
        .distribution
        .as_deref()
        .map(load_distribution)
        .transpose()?;
    let generator = StaticGenerator::new().with_fallback(config.related.iter().cloned());

    if !config.output.quiet {
        tracing::info!("Auditing {}", config.path.display());
    }
    let audit = auditor.audit(&doc, distribution.as_ref(), &generator);

    let report_config = ReportConfig::default().with_min_score(config.min_score);
    let source = config.path.display().to_string();
    let reporter = create_reporter(config.output.format, config.output.colored());
    let text = reporter.generate_audit_report(&source, &audit, &report_config)?;
    config.output.emit(&text)?;

    if audit.passes(config.min_score.unwrap_or(0)) {
        Ok(exit_codes::SUCCESS)
    } else {
        tracing::error!("Audit of {source} did not pass");
        Ok(exit_codes::THRESHOLD_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AuditConfig) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.html");
        std::fs::write(
            &path,
            "<h1>Vélo électrique</h1><p>Le vélo électrique et sa batterie.</p>",
        )
        .unwrap();
        let config = AuditConfig {
            path,
            distribution: None,
            related: vec!["batterie".to_string(), "cadre".to_string()],
            keyword: Some("vélo électrique".to_string()),
            min_score: None,
            output: OutputOptions {
                format: ReportFormat::Json,
                file: Some(dir.path().join("audit.json")),
                no_color: true,
                quiet: true,
            },
        };
        (dir, config)
    }

    #[test]
    fn test_audit_writes_related_coverage() {
        let (dir, config) = setup();
        assert_eq!(
            run_audit(&EngineConfig::default(), config).unwrap(),
            exit_codes::SUCCESS
        );
        let written = std::fs::read_to_string(dir.path().join("audit.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["kind"], "audit");
        assert_eq!(value["report"]["relatedTerms"][0]["present"], true);
        assert_eq!(value["report"]["relatedTerms"][1]["present"], false);
    }

    #[test]
    fn test_non_compliant_distribution_fails() {
        let (_dir, mut config) = setup();
        config.distribution = Some("exact=40".to_string());
        assert_eq!(
            run_audit(&EngineConfig::default(), config).unwrap(),
            exit_codes::THRESHOLD_FAILED
        );
    }
}
