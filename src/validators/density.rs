//! Keyword density validation.
//!
//! Density is a raw substring count over the folded visible text divided by
//! its whitespace word count, as a two-decimal percentage.

use crate::config::{DensityConfig, EngineConfig, Validatable};
use crate::error::Result;
use crate::text::{count_occurrences, first_words, round2, strip_markup};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a density against the optimal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityStatus {
    TooLow,
    Optimal,
    TooHigh,
}

impl DensityStatus {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TooLow => "too_low",
            Self::Optimal => "optimal",
            Self::TooHigh => "too_high",
        }
    }
}

impl fmt::Display for DensityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Density check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityReport {
    pub density: f64,
    pub status: DensityStatus,
    pub message: String,
    pub occurrences: usize,
    pub word_count: usize,
}

/// Coverage of one related (LSI) term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCoverage {
    pub term: String,
    pub occurrences: usize,
    pub density: f64,
    pub present: bool,
}

/// Keyword density validator.
#[derive(Debug, Clone)]
pub struct KeywordDensityValidator {
    config: DensityConfig,
}

impl KeywordDensityValidator {
    /// Build from a configuration; fails on an inverted band.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.density.ensure_valid()?;
        Ok(Self {
            config: config.density.clone(),
        })
    }

    /// Keyword density of `text` in percent, rounded to two decimals.
    #[must_use]
    pub fn density(&self, text: &str, keyword: &str) -> f64 {
        let (occurrences, words) = Self::measure(text, keyword);
        Self::percent(occurrences, words)
    }

    /// Density with its status against the optimal band.
    #[must_use]
    pub fn validate(&self, text: &str, keyword: &str) -> DensityReport {
        let (occurrences, word_count) = Self::measure(text, keyword);
        let density = Self::percent(occurrences, word_count);
        let (min, max) = (self.config.min_optimal, self.config.max_optimal);

        let (status, message) = if density < min {
            (
                DensityStatus::TooLow,
                format!("Keyword density {density}% is below the optimal range ({min}-{max}%)"),
            )
        } else if density > max {
            (
                DensityStatus::TooHigh,
                format!("Keyword density {density}% exceeds {max}%, risk of keyword stuffing"),
            )
        } else {
            (
                DensityStatus::Optimal,
                format!("Keyword density {density}% is optimal"),
            )
        };

        DensityReport {
            density,
            status,
            message,
            occurrences,
            word_count,
        }
    }

    /// Whether the keyword occurs within the introduction window.
    #[must_use]
    pub fn is_in_first_100_words(&self, text: &str, keyword: &str) -> bool {
        count_occurrences(&first_words(text, self.config.intro_words), keyword) > 0
    }

    /// Occurrences and density of each related term.
    #[must_use]
    pub fn related_coverage(&self, text: &str, terms: &[String]) -> Vec<TermCoverage> {
        let visible = strip_markup(text);
        let words = visible.split_whitespace().count();
        terms
            .iter()
            .map(|term| {
                let occurrences = count_occurrences(&visible, term);
                TermCoverage {
                    term: term.clone(),
                    occurrences,
                    density: Self::percent(occurrences, words),
                    present: occurrences > 0,
                }
            })
            .collect()
    }

    fn measure(text: &str, keyword: &str) -> (usize, usize) {
        let visible = strip_markup(text);
        (
            count_occurrences(&visible, keyword),
            visible.split_whitespace().count(),
        )
    }

    fn percent(occurrences: usize, words: usize) -> f64 {
        if words == 0 {
            return 0.0;
        }
        round2(occurrences as f64 / words as f64 * 100.0)
    }
}
