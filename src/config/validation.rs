//! Configuration validation for seo-compliance.
//!
//! Engines refuse to start from a configuration that breaks an invariant
//! (weights or targets not summing to 100, inverted bands, empty template
//! lists). Checking happens once, at construction, never per call.

use super::types::*;
use crate::error::{Result, SeoError};
use crate::text::LocalePatterns;

/// Tolerance when comparing floating-point target sums to 100.
const SUM_EPSILON: f64 = 1e-6;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Fail with every validation error joined into one [`SeoError::Config`].
    fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(SeoError::config(joined))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for EngineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.anchors.validate());
        errors.extend(self.density.validate());
        errors.extend(self.eeat.validate());
        errors.extend(self.locale.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let total = self.weights.total();
        if total == 100 {
            Vec::new()
        } else {
            vec![ConfigError::new(
                "scoring.weights",
                format!("Criterion weights must sum to 100, got {total}"),
            )]
        }
    }
}

impl Validatable for AnchorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (anchor_type, target) in self.targets.iter() {
            if !target.is_finite() || target < 0.0 {
                errors.push(ConfigError::new(
                    format!("anchors.targets.{anchor_type}"),
                    format!("Target must be a non-negative percentage, got {target}"),
                ));
            }
        }
        let total = self.targets.total();
        if (total - 100.0).abs() > SUM_EPSILON {
            errors.push(ConfigError::new(
                "anchors.targets",
                format!("Anchor targets must sum to 100, got {total}"),
            ));
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            errors.push(ConfigError::new(
                "anchors.tolerance",
                format!("Tolerance must be non-negative, got {}", self.tolerance),
            ));
        }
        if !self.high_severity_gap.is_finite() || self.high_severity_gap < 0.0 {
            errors.push(ConfigError::new(
                "anchors.high_severity_gap",
                format!(
                    "High severity gap must be non-negative, got {}",
                    self.high_severity_gap
                ),
            ));
        }
        if !(0.0..=100.0).contains(&self.exact_critical_threshold) {
            errors.push(ConfigError::new(
                "anchors.exact_critical_threshold",
                format!(
                    "Threshold must be between 0 and 100, got {}",
                    self.exact_critical_threshold
                ),
            ));
        }

        errors.extend(self.templates.validate());
        errors
    }
}

impl Validatable for AnchorTemplates {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let lists = [
            ("anchors.templates.partial", &self.partial),
            ("anchors.templates.branded", &self.branded),
            ("anchors.templates.generic", &self.generic),
        ];
        for (field, list) in lists {
            if list.iter().all(|t| t.trim().is_empty()) {
                errors.push(ConfigError::new(field, "At least one template is required"));
            }
        }
        // The first-two-words variant is dropped for one-word keywords.
        if self
            .partial
            .iter()
            .all(|t| t.trim() == "{first_two_words}" || t.trim().is_empty())
        {
            errors.push(ConfigError::new(
                "anchors.templates.partial",
                "At least one template must not depend on a multi-word keyword",
            ));
        }
        if self.image.trim().is_empty() {
            errors.push(ConfigError::new(
                "anchors.templates.image",
                "Image template must not be empty",
            ));
        }
        errors
    }
}

impl Validatable for DensityConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(self.min_optimal >= 0.0 && self.min_optimal <= self.max_optimal) {
            errors.push(ConfigError::new(
                "density",
                format!(
                    "Optimal band must satisfy 0 <= min <= max, got {}..{}",
                    self.min_optimal, self.max_optimal
                ),
            ));
        }
        if self.intro_words == 0 {
            errors.push(ConfigError::new(
                "density.intro_words",
                "Introduction window must be at least one word",
            ));
        }
        errors
    }
}

impl Validatable for EeatConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.freshness_months == 0 {
            errors.push(ConfigError::new(
                "eeat.freshness_months",
                "Freshness window must be at least one month",
            ));
        }
        if self.good_threshold > self.excellent_threshold || self.excellent_threshold > 100 {
            errors.push(ConfigError::new(
                "eeat",
                format!(
                    "Status thresholds must satisfy good <= excellent <= 100, got {} / {}",
                    self.good_threshold, self.excellent_threshold
                ),
            ));
        }
        errors
    }
}

impl Validatable for LocalePatterns {
    fn validate(&self) -> Vec<ConfigError> {
        match self.compile() {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigError::new("locale", e.to_string())],
        }
    }
}
