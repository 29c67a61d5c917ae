//! SARIF 2.1.0 report generator for CI/CD integration.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoredDocument};
use crate::anchors::{DistributionReport, Severity};
use crate::audit::AuditReport;
use crate::model::AnchorDistribution;
use crate::quality::{Criterion, ScoreReport};
use crate::validators::{DensityStatus, EeatStatus};
use serde::Serialize;

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Criteria scoring below this are reported as errors
const ERROR_BELOW: u32 = 50;
/// Criteria scoring below this are reported as warnings
const WARNING_BELOW: u32 = 70;

const RULE_MIN_SCORE: &str = "SEO-MIN-SCORE";
const RULE_DENSITY: &str = "SEO-DENSITY";
const RULE_INTRO: &str = "SEO-KEYWORD-INTRO";
const RULE_HEADERS: &str = "SEO-HEADERS";
const RULE_EEAT: &str = "SEO-EEAT";
const RULE_ANCHORS: &str = "SEO-ANCHORS";

/// SARIF reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct SarifReporter;

impl SarifReporter {
    /// Create a new SARIF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render(results: Vec<SarifResult>) -> Result<String, ReportError> {
        let sarif = SarifReport {
            schema: SARIF_SCHEMA.to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "seo-compliance".to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        information_uri: Some(env!("CARGO_PKG_HOMEPAGE"))
                            .filter(|uri| !uri.is_empty())
                            .map(str::to_string),
                        rules: get_sarif_rules(),
                    },
                },
                results,
            }],
        };
        Ok(serde_json::to_string_pretty(&sarif)?)
    }
}

impl ReportGenerator for SarifReporter {
    fn generate_score_report(
        &self,
        documents: &[ScoredDocument],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let results = documents
            .iter()
            .flat_map(|doc| score_results(&doc.source, &doc.report, config))
            .collect();
        Self::render(results)
    }

    fn generate_audit_report(
        &self,
        source: &str,
        audit: &AuditReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut results = score_results(source, &audit.score, config);

        if audit.density.status != DensityStatus::Optimal {
            results.push(SarifResult::new(
                RULE_DENSITY,
                SarifLevel::Warning,
                audit.density.message.clone(),
                source,
            ));
        }
        if !audit.keyword_in_intro {
            results.push(SarifResult::new(
                RULE_INTRO,
                SarifLevel::Warning,
                format!(
                    "Keyword '{}' missing from the first 100 words",
                    audit.score.keyword
                ),
                source,
            ));
        }
        for issue in &audit.hierarchy.issues {
            results.push(SarifResult::new(
                RULE_HEADERS,
                SarifLevel::Warning,
                issue.clone(),
                source,
            ));
        }
        let eeat_level = match audit.eeat.status {
            EeatStatus::Poor => SarifLevel::Warning,
            EeatStatus::Good | EeatStatus::Excellent => SarifLevel::Note,
        };
        for issue in &audit.eeat.issues {
            results.push(SarifResult::new(RULE_EEAT, eeat_level, issue.clone(), source));
        }
        if let Some(anchors) = &audit.anchors {
            results.extend(distribution_results(anchors, Some(source)));
        }
        Self::render(results)
    }

    fn generate_distribution_report(
        &self,
        _distribution: &AnchorDistribution,
        report: &DistributionReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        Self::render(distribution_results(report, None))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Sarif
    }
}

fn rule_id(criterion: Criterion) -> String {
    let mut id = String::from("SEO-");
    for c in criterion.name().chars() {
        if c.is_ascii_uppercase() {
            id.push('-');
        }
        id.push(c.to_ascii_uppercase());
    }
    id
}

const fn criterion_level(score: u32) -> SarifLevel {
    if score < ERROR_BELOW {
        SarifLevel::Error
    } else if score < WARNING_BELOW {
        SarifLevel::Warning
    } else {
        SarifLevel::Note
    }
}

fn score_results(source: &str, report: &ScoreReport, config: &ReportConfig) -> Vec<SarifResult> {
    let mut results = Vec::new();
    if !config.passes(report.total_score) {
        results.push(SarifResult::new(
            RULE_MIN_SCORE,
            SarifLevel::Error,
            format!(
                "Score {} ({}) is below the minimum of {}",
                report.total_score,
                report.grade,
                config.min_score.unwrap_or_default()
            ),
            source,
        ));
    }
    for (criterion, result) in &report.criteria {
        let level = criterion_level(result.score);
        for issue in &result.issues {
            results.push(SarifResult::new(
                &rule_id(*criterion),
                level,
                format!("{}: {issue}", criterion.label()),
                source,
            ));
        }
    }
    results
}

fn distribution_results(report: &DistributionReport, source: Option<&str>) -> Vec<SarifResult> {
    report
        .issues
        .iter()
        .map(|issue| {
            let level = match issue.severity {
                Severity::Critical | Severity::High => SarifLevel::Error,
                Severity::Medium => SarifLevel::Warning,
            };
            SarifResult {
                rule_id: RULE_ANCHORS.to_string(),
                level,
                message: SarifMessage {
                    text: issue.message.clone(),
                },
                locations: source.map(SarifLocation::file).into_iter().collect(),
            }
        })
        .collect()
}

fn rule(id: &str, name: &str, description: &str, level: SarifLevel) -> SarifRule {
    SarifRule {
        id: id.to_string(),
        name: name.to_string(),
        short_description: SarifMessage {
            text: description.to_string(),
        },
        default_configuration: SarifConfiguration { level },
    }
}

fn get_sarif_rules() -> Vec<SarifRule> {
    let mut rules: Vec<SarifRule> = Criterion::ALL
        .iter()
        .map(|criterion| {
            rule(
                &rule_id(*criterion),
                criterion.name(),
                &format!("{} sub-score below target", criterion.label()),
                SarifLevel::Warning,
            )
        })
        .collect();
    rules.extend([
        rule(
            RULE_MIN_SCORE,
            "minScore",
            "Total score below the required minimum",
            SarifLevel::Error,
        ),
        rule(
            RULE_DENSITY,
            "keywordDensity",
            "Keyword density outside the optimal band",
            SarifLevel::Warning,
        ),
        rule(
            RULE_INTRO,
            "keywordIntro",
            "Keyword absent from the introduction",
            SarifLevel::Warning,
        ),
        rule(
            RULE_HEADERS,
            "headerHierarchy",
            "Heading hierarchy problem",
            SarifLevel::Warning,
        ),
        rule(RULE_EEAT, "eeat", "Missing E-E-A-T signal", SarifLevel::Note),
        rule(
            RULE_ANCHORS,
            "anchorDistribution",
            "Anchor-text distribution outside target",
            SarifLevel::Warning,
        ),
    ]);
    rules
}

// SARIF structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    information_uri: Option<String>,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifConfiguration {
    level: SarifLevel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: SarifLevel,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

impl SarifResult {
    fn new(rule_id: &str, level: SarifLevel, text: String, source: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            level,
            message: SarifMessage { text },
            locations: vec![SarifLocation::file(source)],
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

impl SarifLocation {
    fn file(uri: &str) -> Self {
        Self {
            physical_location: SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation {
                    uri: uri.to_string(),
                },
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum SarifLevel {
    Note,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::AnchorBalancer;
    use crate::config::EngineConfig;
    use crate::model::{AnchorType, ContentDocument};
    use crate::quality::ContentScorer;
    use serde_json::Value;

    #[test]
    fn test_rule_ids() {
        assert_eq!(rule_id(Criterion::Title), "SEO-TITLE");
        assert_eq!(rule_id(Criterion::MetaDescription), "SEO-META-DESCRIPTION");
        assert_eq!(rule_id(Criterion::InternalLinks), "SEO-INTERNAL-LINKS");
    }

    #[test]
    fn test_criterion_levels() {
        assert_eq!(criterion_level(20), SarifLevel::Error);
        assert_eq!(criterion_level(60), SarifLevel::Warning);
        assert_eq!(criterion_level(80), SarifLevel::Note);
    }

    #[test]
    fn test_score_sarif_includes_min_score_failure() {
        let scorer = ContentScorer::new(&EngineConfig::default()).unwrap();
        let doc = ContentDocument::new("", "");
        let documents = [ScoredDocument {
            source: "empty.html".to_string(),
            report: scorer.calculate_score(&doc),
        }];
        let config = ReportConfig::default().with_min_score(Some(70));
        let text = SarifReporter::new()
            .generate_score_report(&documents, &config)
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], "2.1.0");
        let results = value["runs"][0]["results"].as_array().unwrap();
        assert_eq!(results[0]["ruleId"], RULE_MIN_SCORE);
        assert_eq!(results[0]["level"], "error");
        assert_eq!(
            results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "empty.html"
        );
        assert!(results.len() > 1);
    }

    #[test]
    fn test_distribution_sarif_levels() {
        let balancer = AnchorBalancer::new(&EngineConfig::default()).unwrap();
        let distribution = AnchorDistribution::new().with(AnchorType::Exact, 40.0);
        let report = balancer.validate_distribution(&distribution);
        let text = SarifReporter::new()
            .generate_distribution_report(&distribution, &report, &ReportConfig::default())
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let results = value["runs"][0]["results"].as_array().unwrap();
        assert_eq!(results.len(), report.issues.len());
        assert!(results.iter().all(|r| r["ruleId"] == RULE_ANCHORS));
        assert!(results.iter().any(|r| r["level"] == "error"));
    }
}
