//! Content quality scorer.
//!
//! Combines the eight banded criteria into a weighted 0-100 score with a
//! letter grade and a short, prioritized suggestion list.

use super::criteria::{self, CriterionResult};
use crate::config::{CriterionWeights, EngineConfig, Validatable};
use crate::error::Result;
use crate::model::ContentDocument;
use crate::text::{word_count, CompiledPatterns};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Maximum number of suggestions in a report
pub const MAX_SUGGESTIONS: usize = 5;

/// Criteria below this score produce suggestions
const SUGGESTION_THRESHOLD: u32 = 70;

/// Criteria below this score produce high-priority suggestions
const HIGH_PRIORITY_THRESHOLD: u32 = 50;

/// A scored aspect of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Title,
    MetaDescription,
    Length,
    Headings,
    Keywords,
    InternalLinks,
    Images,
    Readability,
}

impl Criterion {
    /// Every criterion in report order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::MetaDescription,
        Self::Length,
        Self::Headings,
        Self::Keywords,
        Self::InternalLinks,
        Self::Images,
        Self::Readability,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::MetaDescription => "metaDescription",
            Self::Length => "length",
            Self::Headings => "headings",
            Self::Keywords => "keywords",
            Self::InternalLinks => "internalLinks",
            Self::Images => "images",
            Self::Readability => "readability",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::MetaDescription => "Meta description",
            Self::Length => "Content length",
            Self::Headings => "Headings",
            Self::Keywords => "Keyword density",
            Self::InternalLinks => "Internal links",
            Self::Images => "Images",
            Self::Readability => "Readability",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Letter grade based on the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding: 90-100
    #[serde(rename = "A+")]
    APlus,
    /// Very good: 80-89
    A,
    /// Good: 70-79
    B,
    /// Needs work: 60-69
    C,
    /// Poor: 50-59
    D,
    /// Failing: <50
    F,
}

impl Grade {
    /// Create grade from score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            90..=u32::MAX => Self::APlus,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Display color (hex)
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::APlus => "#16a34a",
            Self::A => "#22c55e",
            Self::B => "#84cc16",
            Self::C => "#eab308",
            Self::D => "#f97316",
            Self::F => "#ef4444",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::APlus => "Excellent, ready to publish",
            Self::A => "Very good, minor tweaks possible",
            Self::B => "Good, a few improvements recommended",
            Self::C => "Average, several improvements needed",
            Self::D => "Weak, significant rework needed",
            Self::F => "Failing, not ready to publish",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// Actionable suggestion derived from a weak criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub criterion: Criterion,
    pub priority: Priority,
    pub message: String,
    /// Score of the criterion the suggestion comes from
    pub score: u32,
}

/// Complete quality report for a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct ScoreReport {
    /// Scoring engine version
    pub scoring_engine_version: String,
    /// Weighted total (0-100)
    pub total_score: u32,
    pub grade: Grade,
    pub grade_color: String,
    pub grade_description: String,
    /// Keyword the density criterion measured
    pub keyword: String,
    /// Sub-scores in criterion order
    pub criteria: IndexMap<Criterion, CriterionResult>,
    /// At most [`MAX_SUGGESTIONS`], high priority first
    pub suggestions: Vec<Suggestion>,
}

impl ScoreReport {
    /// Sub-score of one criterion.
    #[must_use]
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.criteria.get(&criterion)
    }
}

/// Weighted total of (score, weight) pairs, rounded and clamped to 0..=100.
#[must_use]
pub fn weighted_total(scores: &[(u32, u32)]) -> u32 {
    let sum: f64 = scores
        .iter()
        .map(|(score, weight)| f64::from(*score) * f64::from(*weight))
        .sum();
    ((sum / 100.0).round() as u32).min(100)
}

/// Content scorer
#[derive(Debug, Clone)]
pub struct ContentScorer {
    weights: CriterionWeights,
    patterns: CompiledPatterns,
}

impl ContentScorer {
    /// Build from a configuration; fails when the weights do not sum to 100
    /// or a locale pattern is invalid.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.scoring.ensure_valid()?;
        Ok(Self {
            weights: config.scoring.weights,
            patterns: config.locale.compile()?,
        })
    }

    /// Score a document.
    pub fn calculate_score(&self, doc: &ContentDocument) -> ScoreReport {
        let keyword = doc.effective_keyword();
        let words = if doc.word_count > 0 {
            doc.word_count
        } else {
            word_count(&doc.body)
        };

        let criteria: IndexMap<Criterion, CriterionResult> = Criterion::ALL
            .into_iter()
            .map(|criterion| {
                let result = match criterion {
                    Criterion::Title => criteria::title(doc.effective_title(), &keyword, &self.patterns),
                    Criterion::MetaDescription => {
                        criteria::meta_description(doc.meta_description.as_deref())
                    }
                    Criterion::Length => criteria::length(words),
                    Criterion::Headings => criteria::headings(&doc.body),
                    Criterion::Keywords => criteria::keywords(&doc.body, &keyword, words),
                    Criterion::InternalLinks => criteria::internal_links(doc.internal_link_count),
                    Criterion::Images => criteria::images(
                        doc.image_url.as_deref(),
                        doc.image_alt.as_deref(),
                        &doc.body,
                    ),
                    Criterion::Readability => criteria::readability(&doc.body),
                };
                tracing::debug!(criterion = criterion.name(), score = result.score, "scored criterion");
                (criterion, result)
            })
            .collect();

        let pairs: Vec<(u32, u32)> = criteria
            .iter()
            .map(|(criterion, result)| (result.score, self.weights.weight(*criterion)))
            .collect();
        let total_score = weighted_total(&pairs);
        let grade = Grade::from_score(total_score);
        let suggestions = build_suggestions(&criteria);

        ScoreReport {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            total_score,
            grade,
            grade_color: grade.color().to_string(),
            grade_description: grade.description().to_string(),
            keyword,
            criteria,
            suggestions,
        }
    }
}

/// Every issue of a criterion scoring under 70, high priority under 50,
/// sorted high first then by ascending score, truncated.
fn build_suggestions(criteria: &IndexMap<Criterion, CriterionResult>) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = criteria
        .iter()
        .filter(|(_, result)| result.score < SUGGESTION_THRESHOLD)
        .flat_map(|(criterion, result)| {
            let priority = if result.score < HIGH_PRIORITY_THRESHOLD {
                Priority::High
            } else {
                Priority::Medium
            };
            result.issues.iter().map(move |issue| Suggestion {
                criterion: *criterion,
                priority,
                message: issue.clone(),
                score: result.score,
            })
        })
        .collect();

    // Stable: ties keep criterion order
    suggestions.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.score.cmp(&b.score)));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
