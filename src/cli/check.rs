//! Single-check command handlers: density, headers, snippet and eeat.

use super::{emit_check, OutputOptions};
use crate::config::EngineConfig;
use crate::pipeline::{exit_codes, load_document};
use crate::reports::{JsonReporter, ReportFormat};
use crate::validators::{EeatValidator, KeywordDensityValidator, StructureValidator};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::Path;

/// Run the density command.
pub fn run_density(
    engine: &EngineConfig,
    path: &Path,
    keyword: Option<&str>,
    output: &OutputOptions,
) -> Result<i32> {
    let validator = KeywordDensityValidator::new(engine)?;
    let doc = load_document(path)?;
    let keyword = keyword.map_or_else(|| doc.effective_keyword(), str::to_string);

    let report = validator.validate(&doc.body, &keyword);
    let in_intro = validator.is_in_first_100_words(&doc.body, &keyword);
    let payload = json!({
        "keyword": keyword,
        "keywordInIntro": in_intro,
        "density": report,
    });
    emit_check(output, "density", &payload, |summary| {
        format!(
            "{}\nIn first 100 words: {}",
            summary.density(&keyword, &report),
            if in_intro { "yes" } else { "no" }
        )
    })?;
    Ok(exit_codes::SUCCESS)
}

/// Run the headers command. Fails the threshold when the hierarchy is invalid.
pub fn run_headers(engine: &EngineConfig, path: &Path, output: &OutputOptions) -> Result<i32> {
    let validator = StructureValidator::new(engine)?;
    let doc = load_document(path)?;
    let report = validator.validate_header_hierarchy(&doc.body);
    emit_check(output, "headers", &report, |summary| summary.headers(&report))?;
    Ok(if report.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::THRESHOLD_FAILED
    })
}

/// Run the snippet command: print the document with a featured-snippet
/// block injected for the given question.
pub fn run_snippet(
    engine: &EngineConfig,
    path: &Path,
    question: &str,
    keyword: Option<&str>,
    output: &OutputOptions,
) -> Result<i32> {
    let validator = StructureValidator::new(engine)?;
    let doc = load_document(path)?;
    let keyword = keyword.map_or_else(|| doc.effective_keyword(), str::to_string);
    let plan = validator.prepare_snippet(question, &doc.body, &keyword);

    if !output.quiet {
        tracing::info!(
            "Question type {} uses the {} template{}",
            plan.question_type,
            plan.template.name(),
            if plan.injected { "" } else { " (already present)" }
        );
    }

    let text = match output.format {
        ReportFormat::Summary => plan.html.clone(),
        ReportFormat::Json => JsonReporter::new().envelope("snippet", &plan)?,
        ReportFormat::Sarif => bail!("SARIF output is not available for snippet"),
    };
    output.emit(&text)?;
    Ok(exit_codes::SUCCESS)
}

/// Metadata supplied on the command line for the eeat command.
#[derive(Debug, Clone, Default)]
pub struct EeatOverrides {
    pub author: Option<String>,
    /// RFC 3339 timestamp
    pub updated_at: Option<String>,
}

/// Run the eeat command.
pub fn run_eeat(
    engine: &EngineConfig,
    path: &Path,
    overrides: &EeatOverrides,
    output: &OutputOptions,
) -> Result<i32> {
    let validator = EeatValidator::new(engine)?;
    let doc = load_document(path)?;

    let mut metadata = doc.eeat_metadata();
    if let Some(author) = &overrides.author {
        metadata.author_name = Some(author.clone());
    }
    if let Some(raw) = &overrides.updated_at {
        let parsed = DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid --updated-at timestamp: {raw}"))?;
        metadata.updated_at = Some(parsed.with_timezone(&Utc));
    }

    let report = validator.validate(&doc.body, &metadata);
    emit_check(output, "eeat", &report, |summary| summary.eeat(&report))?;
    Ok(exit_codes::SUCCESS)
}
