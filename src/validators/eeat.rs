//! E-E-A-T (experience, expertise, authority, trust) signal scoring.
//!
//! Starts at 100 and subtracts a configured penalty per missing signal.

use crate::config::{EeatConfig, EngineConfig, Validatable};
use crate::error::Result;
use crate::model::EeatMetadata;
use crate::text::{strip_markup, CompiledPatterns};
use chrono::{DateTime, Months, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static EXTERNAL_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\b[^>]*\bhref\s*=\s*["']?https?://"#).expect("static regex")
});

/// Overall E-E-A-T verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EeatStatus {
    Excellent,
    Good,
    Poor,
}

impl fmt::Display for EeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Poor => "poor",
        };
        write!(f, "{name}")
    }
}

/// Raw signals found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EeatSignals {
    pub has_experience: bool,
    pub statistics: usize,
    pub has_author: bool,
    pub external_links: usize,
    /// `None` when the document carries no update date
    pub stale: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EeatReport {
    pub score: u32,
    pub status: EeatStatus,
    pub issues: Vec<String>,
    pub signals: EeatSignals,
}

#[derive(Debug, Clone)]
pub struct EeatValidator {
    config: EeatConfig,
    patterns: CompiledPatterns,
}

impl EeatValidator {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.eeat.ensure_valid()?;
        Ok(Self {
            config: config.eeat.clone(),
            patterns: config.locale.compile()?,
        })
    }

    /// Score against the current time.
    #[must_use]
    pub fn validate(&self, html: &str, metadata: &EeatMetadata) -> EeatReport {
        self.validate_at(html, metadata, Utc::now())
    }

    /// Score with an explicit reference time for the freshness check.
    #[must_use]
    pub fn validate_at(&self, html: &str, metadata: &EeatMetadata, now: DateTime<Utc>) -> EeatReport {
        let cfg = &self.config;
        let text = strip_markup(html);
        let signals = EeatSignals {
            has_experience: self.patterns.has_experience_marker(&text),
            statistics: self.patterns.count_statistics(&text),
            has_author: metadata
                .author_name
                .as_deref()
                .is_some_and(|a| !a.trim().is_empty()),
            external_links: EXTERNAL_LINK.find_iter(html).count(),
            stale: metadata.updated_at.and_then(|updated| {
                now.checked_sub_months(Months::new(cfg.freshness_months))
                    .map(|cutoff| updated < cutoff)
            }),
        };

        let mut penalty = 0u32;
        let mut issues = Vec::new();

        if !signals.has_experience {
            penalty += cfg.experience_penalty;
            issues.push("No first-hand experience marker found".to_string());
        }
        if signals.statistics < cfg.min_statistics {
            penalty += cfg.statistics_penalty;
            issues.push(format!(
                "Only {} statistic(s) found, at least {} expected",
                signals.statistics, cfg.min_statistics
            ));
        }
        if !signals.has_author {
            penalty += cfg.author_penalty;
            issues.push("No author byline".to_string());
        }
        if signals.external_links < cfg.min_external_links {
            penalty += cfg.sources_penalty;
            issues.push(format!(
                "Only {} external source link(s), at least {} expected",
                signals.external_links, cfg.min_external_links
            ));
        }
        if signals.stale == Some(true) {
            penalty += cfg.freshness_penalty;
            issues.push(format!(
                "Content not updated in the last {} months",
                cfg.freshness_months
            ));
        }

        let score = 100u32.saturating_sub(penalty);
        let status = if score >= cfg.excellent_threshold {
            EeatStatus::Excellent
        } else if score >= cfg.good_threshold {
            EeatStatus::Good
        } else {
            EeatStatus::Poor
        };

        tracing::debug!(score, issues = issues.len(), "scored E-E-A-T signals");

        EeatReport {
            score,
            status,
            issues,
            signals,
        }
    }
}
