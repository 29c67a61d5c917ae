//! Anchor-text distribution balancing.
//!
//! Picks the type of the next internal link so the article's cumulative
//! anchor distribution converges on the target mix, and audits finished
//! distributions for over-optimization.

use super::random::RandomSource;
use super::templates::{fill, usable};
use crate::config::{AnchorConfig, EngineConfig, Validatable};
use crate::error::Result;
use crate::model::{AnchorDecision, AnchorDistribution, AnchorType, NAKED_URL_PLACEHOLDER};
use crate::text::round2;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{name}")
    }
}

/// A type whose share is outside the tolerance band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionIssue {
    #[serde(rename = "type")]
    pub anchor_type: AnchorType,
    pub target: f64,
    pub current: f64,
    pub gap: f64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    pub compliant: bool,
    pub issues: Vec<DistributionIssue>,
}

impl DistributionReport {
    /// Highest severity among the issues.
    #[must_use]
    pub fn worst_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }
}

/// Chooses anchor types and renders anchor text.
///
/// Immutable once built; randomness is supplied per call.
#[derive(Debug, Clone)]
pub struct AnchorBalancer {
    config: AnchorConfig,
}

impl AnchorBalancer {
    /// Build from a configuration; fails when targets do not sum to 100,
    /// the tolerance is negative or a template list is empty.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.anchors.ensure_valid()?;
        Ok(Self {
            config: config.anchors.clone(),
        })
    }

    /// Decide the type and text of the next internal link.
    pub fn next_anchor<R: RandomSource + ?Sized>(
        &self,
        keyword: &str,
        platform: &str,
        current: &AnchorDistribution,
        rng: &mut R,
    ) -> AnchorDecision {
        let anchor_type = self.select_type(current, rng);
        let text = self.render(anchor_type, keyword.trim(), platform.trim(), rng);
        tracing::debug!(anchor_type = anchor_type.name(), text = %text, "selected anchor");
        AnchorDecision { text, anchor_type }
    }

    /// Largest under-target gap beyond tolerance, or a weighted draw over
    /// the targets when every type is within the band.
    pub fn select_type<R: RandomSource + ?Sized>(
        &self,
        current: &AnchorDistribution,
        rng: &mut R,
    ) -> AnchorType {
        let mut most_needed: Option<(AnchorType, f64)> = None;
        for (anchor_type, target) in self.config.targets.iter() {
            let gap = target - current.get(anchor_type);
            if gap <= self.config.tolerance {
                continue;
            }
            // Strict comparison keeps the first type on ties
            if most_needed.map_or(true, |(_, best)| gap > best) {
                most_needed = Some((anchor_type, gap));
            }
        }

        match most_needed {
            Some((anchor_type, _)) => anchor_type,
            None => self.weighted_draw(rng),
        }
    }

    fn weighted_draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> AnchorType {
        let total = self.config.targets.total();
        let draw = rng.next_unit() * total;
        let mut cumulative = 0.0;
        let mut last_weighted = AnchorType::Exact;
        for (anchor_type, target) in self.config.targets.iter() {
            if target <= 0.0 {
                continue;
            }
            cumulative += target;
            last_weighted = anchor_type;
            if draw < cumulative {
                return anchor_type;
            }
        }
        last_weighted
    }

    /// Render the anchor text for a type.
    pub fn render<R: RandomSource + ?Sized>(
        &self,
        anchor_type: AnchorType,
        keyword: &str,
        platform: &str,
        rng: &mut R,
    ) -> String {
        let templates = &self.config.templates;
        let pick = |list: &[String], rng: &mut R| -> String {
            let candidates = usable(list, keyword);
            if candidates.is_empty() {
                return keyword.to_string();
            }
            fill(candidates[rng.next_index(candidates.len())], keyword, platform)
        };

        match anchor_type {
            AnchorType::Exact => keyword.to_string(),
            AnchorType::Partial => pick(&templates.partial, rng),
            AnchorType::Branded => pick(&templates.branded, rng),
            AnchorType::Generic => pick(&templates.generic, rng),
            AnchorType::Naked => NAKED_URL_PLACEHOLDER.to_string(),
            AnchorType::Image => fill(&templates.image, keyword, platform),
        }
    }

    /// Audit a distribution against the targets.
    pub fn validate_distribution(&self, distribution: &AnchorDistribution) -> DistributionReport {
        let cfg = &self.config;
        let mut issues = Vec::new();

        for (anchor_type, target) in cfg.targets.iter() {
            let current = distribution.get(anchor_type);
            let gap = (target - current).abs();
            if gap <= cfg.tolerance {
                continue;
            }
            let severity = if gap > cfg.high_severity_gap {
                Severity::High
            } else {
                Severity::Medium
            };
            let direction = if current > target { "above" } else { "below" };
            issues.push(DistributionIssue {
                anchor_type,
                target,
                current,
                gap: round2(gap),
                severity,
                message: format!(
                    "{anchor_type} anchors at {}% are {} points {direction} the {target}% target",
                    round2(current),
                    round2(gap)
                ),
            });
        }

        let exact = distribution.get(AnchorType::Exact);
        if exact > cfg.exact_critical_threshold {
            let target = cfg.targets.exact;
            issues.push(DistributionIssue {
                anchor_type: AnchorType::Exact,
                target,
                current: exact,
                gap: round2(exact - target),
                severity: Severity::Critical,
                message: format!(
                    "DANGER: over-optimization detected, exact-match anchors at {}% exceed {}%",
                    round2(exact),
                    cfg.exact_critical_threshold
                ),
            });
        }

        DistributionReport {
            compliant: issues.is_empty(),
            issues,
        }
    }

    /// Configured targets.
    #[must_use]
    pub const fn config(&self) -> &AnchorConfig {
        &self.config
    }
}
