//! Anchor command handlers.
//!
//! `anchor next` picks the anchor text for the next internal link and
//! `anchor validate` audits the current distribution.

use super::OutputOptions;
use crate::anchors::{AnchorBalancer, RandomSource};
use crate::config::EngineConfig;
use crate::pipeline::{exit_codes, load_distribution};
use crate::reports::{create_reporter, JsonReporter, ReportConfig, ReportFormat};
use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// `anchor next` configuration
#[derive(Debug, Clone)]
pub struct AnchorNextConfig {
    pub keyword: String,
    pub platform: String,
    /// Inline spec or JSON/YAML file; empty means no links yet
    pub distribution: Option<String>,
    /// Link target substituted into naked-URL anchors
    pub url: Option<String>,
    /// Seed for reproducible draws
    pub seed: Option<u64>,
    pub output: OutputOptions,
}

/// Run `anchor next`.
pub fn run_anchor_next(engine: &EngineConfig, config: AnchorNextConfig) -> Result<i32> {
    let balancer = AnchorBalancer::new(engine)?;
    let current = match config.distribution.as_deref() {
        Some(spec) => load_distribution(spec)?,
        None => crate::model::AnchorDistribution::new(),
    };

    let mut rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let decision = balancer.next_anchor(&config.keyword, &config.platform, &current, rng.as_mut());
    let text = config
        .url
        .as_deref()
        .map_or_else(|| decision.text.clone(), |url| decision.resolve(url));

    let rendered = match config.output.format {
        ReportFormat::Summary => text,
        ReportFormat::Json => JsonReporter::new().envelope(
            "anchor",
            &serde_json::json!({
                "type": decision.anchor_type,
                "text": text,
            }),
        )?,
        ReportFormat::Sarif => bail!("SARIF output is not available for anchor next"),
    };
    config.output.emit(&rendered)?;
    Ok(exit_codes::SUCCESS)
}

/// Run `anchor validate`. Non-compliant distributions fail the threshold.
pub fn run_anchor_validate(
    engine: &EngineConfig,
    distribution: &str,
    output: &OutputOptions,
) -> Result<i32> {
    let balancer = AnchorBalancer::new(engine)?;
    let current = load_distribution(distribution)?;
    let report = balancer.validate_distribution(&current);

    let reporter = create_reporter(output.format, output.colored());
    let text = reporter.generate_distribution_report(&current, &report, &ReportConfig::default())?;
    output.emit(&text)?;

    if report.compliant {
        Ok(exit_codes::SUCCESS)
    } else {
        if let Some(severity) = report.worst_severity() {
            tracing::warn!(
                "Anchor distribution is not compliant ({} issue(s), worst: {severity})",
                report.issues.len()
            );
        }
        Ok(exit_codes::THRESHOLD_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn output(dir: &TempDir, format: ReportFormat) -> OutputOptions {
        OutputOptions {
            format,
            file: Some(dir.path().join("out.txt")),
            no_color: true,
            quiet: true,
        }
    }

    fn read(dir: &TempDir) -> String {
        std::fs::read_to_string(dir.path().join("out.txt")).unwrap()
    }

    #[test]
    fn test_next_fills_largest_gap() {
        let dir = TempDir::new().unwrap();
        let config = AnchorNextConfig {
            keyword: "vélo électrique".to_string(),
            platform: "Cyclo".to_string(),
            distribution: Some("exact=15,partial=10,branded=20,generic=20,naked=10,image=10".to_string()),
            url: None,
            seed: Some(7),
            output: output(&dir, ReportFormat::Json),
        };
        run_anchor_next(&EngineConfig::default(), config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&read(&dir)).unwrap();
        assert_eq!(value["report"]["type"], "partial");
        assert!(value["report"]["text"]
            .as_str()
            .unwrap()
            .contains("vélo électrique"));
    }

    #[test]
    fn test_next_resolves_naked_url() {
        let dir = TempDir::new().unwrap();
        let config = AnchorNextConfig {
            keyword: "vélo".to_string(),
            platform: "Cyclo".to_string(),
            distribution: Some("exact=15,partial=25,branded=20,generic=20,naked=0,image=10".to_string()),
            url: Some("https://cyclo.example/velo".to_string()),
            seed: None,
            output: output(&dir, ReportFormat::Summary),
        };
        run_anchor_next(&EngineConfig::default(), config).unwrap();
        assert_eq!(read(&dir).trim(), "https://cyclo.example/velo");
    }

    #[test]
    fn test_validate_exit_codes() {
        let dir = TempDir::new().unwrap();
        let engine = EngineConfig::default();
        let balanced = "exact=15,partial=25,branded=20,generic=20,naked=10,image=10";
        assert_eq!(
            run_anchor_validate(&engine, balanced, &output(&dir, ReportFormat::Summary)).unwrap(),
            exit_codes::SUCCESS
        );
        assert_eq!(
            run_anchor_validate(&engine, "exact=35", &output(&dir, ReportFormat::Sarif)).unwrap(),
            exit_codes::THRESHOLD_FAILED
        );
        assert!(read(&dir).contains("SEO-ANCHORS"));
    }
}
