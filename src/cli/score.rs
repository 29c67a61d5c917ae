//! Score command handler.
//!
//! Implements the `score` subcommand: loads every document, scores them in
//! parallel and reports against an optional minimum.

use super::OutputOptions;
use crate::config::EngineConfig;
use crate::pipeline::{exit_codes, load_document};
use crate::quality::ContentScorer;
use crate::reports::{create_reporter, ReportConfig, ScoredDocument};
use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

/// Score command configuration
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub paths: Vec<PathBuf>,
    /// Keyword override applied to every document
    pub keyword: Option<String>,
    pub min_score: Option<u32>,
    pub output: OutputOptions,
}

/// Run the score command, returning the desired exit code.
pub fn run_score(engine: &EngineConfig, config: ScoreConfig) -> Result<i32> {
    let scorer = ContentScorer::new(engine)?;

    if !config.output.quiet {
        tracing::info!("Scoring {} document(s)", config.paths.len());
    }

    let documents = config
        .paths
        .par_iter()
        .map(|path| -> Result<ScoredDocument> {
            let mut doc = load_document(path)?;
            if let Some(keyword) = &config.keyword {
                doc.primary_keyword.clone_from(keyword);
            }
            Ok(ScoredDocument {
                source: path.display().to_string(),
                report: scorer.calculate_score(&doc),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report_config = ReportConfig::default().with_min_score(config.min_score);
    let reporter = create_reporter(config.output.format, config.output.colored());
    let text = reporter.generate_score_report(&documents, &report_config)?;
    config.output.emit(&text)?;

    let failing: Vec<&ScoredDocument> = documents
        .iter()
        .filter(|doc| !report_config.passes(doc.report.total_score))
        .collect();
    if failing.is_empty() {
        return Ok(exit_codes::SUCCESS);
    }
    for doc in &failing {
        tracing::error!(
            "{} scored {} which is below the minimum of {}",
            doc.source,
            doc.report.total_score,
            config.min_score.unwrap_or_default()
        );
    }
    Ok(exit_codes::THRESHOLD_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn options(dir: &TempDir) -> OutputOptions {
        OutputOptions {
            format: ReportFormat::Json,
            file: Some(dir.path().join("report.json")),
            no_color: true,
            quiet: true,
        }
    }

    #[test]
    fn test_threshold_exit_code() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "a.html", "<h1>Vélo</h1><p>Court.</p>");
        let config = ScoreConfig {
            paths: vec![path.clone()],
            keyword: None,
            min_score: Some(99),
            output: options(&dir),
        };
        assert_eq!(
            run_score(&EngineConfig::default(), config).unwrap(),
            exit_codes::THRESHOLD_FAILED
        );

        let config = ScoreConfig {
            paths: vec![path],
            keyword: Some("vélo".to_string()),
            min_score: None,
            output: options(&dir),
        };
        assert_eq!(
            run_score(&EngineConfig::default(), config).unwrap(),
            exit_codes::SUCCESS
        );
        let written = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["documents"][0]["report"]["keyword"], "vélo");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = ScoreConfig {
            paths: vec![dir.path().join("missing.html")],
            keyword: None,
            min_score: None,
            output: options(&dir),
        };
        assert!(run_score(&EngineConfig::default(), config).is_err());
    }
}
