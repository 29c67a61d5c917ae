//! Configuration types for the compliance engine.
//!
//! Every table the algorithms read (criterion weights, anchor targets,
//! anchor templates, density band, E-E-A-T penalties, locale patterns) lives
//! here and is handed to the engines at construction.

use crate::model::AnchorType;
use crate::quality::Criterion;
use crate::text::LocalePatterns;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Engine Configuration
// ============================================================================

/// Top-level configuration shared by every engine.
///
/// Can be built from defaults, a named preset, or a YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    /// Content scoring weights
    pub scoring: ScoringConfig,
    /// Anchor-text balancing targets and templates
    pub anchors: AnchorConfig,
    /// Keyword density band
    pub density: DensityConfig,
    /// E-E-A-T penalties and thresholds
    pub eeat: EeatConfig,
    /// Language-specific pattern tables
    pub locale: LocalePatterns,
}

impl EngineConfig {
    /// Create a new `EngineConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `EngineConfig` builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

// ============================================================================
// Builder for EngineConfig
// ============================================================================

/// Builder for constructing `EngineConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Replace the criterion weights.
    pub const fn weights(mut self, weights: CriterionWeights) -> Self {
        self.config.scoring.weights = weights;
        self
    }

    /// Replace the anchor target distribution.
    pub const fn anchor_targets(mut self, targets: AnchorTargets) -> Self {
        self.config.anchors.targets = targets;
        self
    }

    /// Set the anchor tolerance band (percentage points).
    pub const fn anchor_tolerance(mut self, tolerance: f64) -> Self {
        self.config.anchors.tolerance = tolerance;
        self
    }

    /// Replace the anchor templates.
    pub fn anchor_templates(mut self, templates: AnchorTemplates) -> Self {
        self.config.anchors.templates = templates;
        self
    }

    /// Set the optimal keyword density band.
    pub const fn density_band(mut self, min: f64, max: f64) -> Self {
        self.config.density.min_optimal = min;
        self.config.density.max_optimal = max;
        self
    }

    /// Replace the locale pattern table.
    pub fn locale(mut self, locale: LocalePatterns) -> Self {
        self.config.locale = locale;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

// ============================================================================
// Scoring
// ============================================================================

/// Content scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Criterion weights (must sum to 100)
    pub weights: CriterionWeights,
}

/// Weight of each criterion in the total score, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CriterionWeights {
    pub title: u32,
    pub meta_description: u32,
    pub length: u32,
    pub headings: u32,
    pub keywords: u32,
    pub internal_links: u32,
    pub images: u32,
    pub readability: u32,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            title: 15,
            meta_description: 10,
            length: 15,
            headings: 10,
            keywords: 15,
            internal_links: 10,
            images: 10,
            readability: 15,
        }
    }
}

impl CriterionWeights {
    /// Weight for a single criterion.
    #[must_use]
    pub const fn weight(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::Title => self.title,
            Criterion::MetaDescription => self.meta_description,
            Criterion::Length => self.length,
            Criterion::Headings => self.headings,
            Criterion::Keywords => self.keywords,
            Criterion::InternalLinks => self.internal_links,
            Criterion::Images => self.images,
            Criterion::Readability => self.readability,
        }
    }

    /// Return weights in criterion order for iteration.
    #[must_use]
    pub fn as_array(&self) -> [u32; 8] {
        Criterion::ALL.map(|c| self.weight(c))
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.as_array().iter().sum()
    }
}

// ============================================================================
// Anchors
// ============================================================================

/// Anchor-text balancing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnchorConfig {
    /// Target share of each anchor type (must sum to 100)
    pub targets: AnchorTargets,
    /// Allowed deviation from a target, in percentage points
    #[schemars(range(min = 0.0))]
    pub tolerance: f64,
    /// Deviation above which an issue is reported as high severity
    pub high_severity_gap: f64,
    /// Exact-match share above which over-optimization is always critical
    #[schemars(range(min = 0.0, max = 100.0))]
    pub exact_critical_threshold: f64,
    /// Text templates per anchor type
    pub templates: AnchorTemplates,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            targets: AnchorTargets::default(),
            tolerance: 2.0,
            high_severity_gap: 10.0,
            exact_critical_threshold: 30.0,
            templates: AnchorTemplates::default(),
        }
    }
}

/// Target anchor distribution in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnchorTargets {
    pub exact: f64,
    pub partial: f64,
    pub branded: f64,
    pub generic: f64,
    pub naked: f64,
    pub image: f64,
}

impl Default for AnchorTargets {
    fn default() -> Self {
        Self {
            exact: 15.0,
            partial: 25.0,
            branded: 20.0,
            generic: 20.0,
            naked: 10.0,
            image: 10.0,
        }
    }
}

impl AnchorTargets {
    /// Target percentage for one type.
    #[must_use]
    pub const fn get(&self, anchor_type: AnchorType) -> f64 {
        match anchor_type {
            AnchorType::Exact => self.exact,
            AnchorType::Partial => self.partial,
            AnchorType::Branded => self.branded,
            AnchorType::Generic => self.generic,
            AnchorType::Naked => self.naked,
            AnchorType::Image => self.image,
        }
    }

    /// Targets in table order.
    pub fn iter(&self) -> impl Iterator<Item = (AnchorType, f64)> + '_ {
        AnchorType::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// Sum of all targets.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, p)| p).sum()
    }
}

/// Anchor text templates.
///
/// `{keyword}` and `{platform}` are substituted; a partial template equal to
/// `{first_two_words}` is only offered for keywords of two words or more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnchorTemplates {
    pub partial: Vec<String>,
    pub branded: Vec<String>,
    pub generic: Vec<String>,
    pub image: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl AnchorTemplates {
    /// French templates used by the platform's sites.
    #[must_use]
    pub fn french() -> Self {
        Self {
            partial: owned(&[
                "meilleur {keyword}",
                "guide {keyword}",
                "{keyword} complet",
                "{first_two_words}",
                "découvrir {keyword}",
                "tout sur {keyword}",
            ]),
            branded: owned(&[
                "{keyword} sur {platform}",
                "{platform} : {keyword}",
                "le guide {keyword} de {platform}",
                "{keyword} par {platform}",
                "{platform} - {keyword}",
            ]),
            generic: owned(&[
                "cliquez ici",
                "en savoir plus",
                "lire la suite",
                "découvrir",
                "voir plus",
                "consulter ce guide",
                "lire l'article",
                "plus d'informations",
            ]),
            image: "{keyword} - illustration guide complet".to_string(),
        }
    }

    /// English templates.
    #[must_use]
    pub fn english() -> Self {
        Self {
            partial: owned(&[
                "best {keyword}",
                "{keyword} guide",
                "complete {keyword}",
                "{first_two_words}",
                "discover {keyword}",
                "all about {keyword}",
            ]),
            branded: owned(&[
                "{keyword} on {platform}",
                "{platform}: {keyword}",
                "the {platform} {keyword} guide",
                "{keyword} by {platform}",
                "{platform} - {keyword}",
            ]),
            generic: owned(&[
                "click here",
                "learn more",
                "read more",
                "find out more",
                "see the guide",
                "read the article",
                "more information",
                "discover more",
            ]),
            image: "{keyword} - complete illustrated guide".to_string(),
        }
    }
}

impl Default for AnchorTemplates {
    fn default() -> Self {
        Self::french()
    }
}

// ============================================================================
// Density
// ============================================================================

/// Keyword density validation band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DensityConfig {
    /// Lowest optimal density, in percent
    pub min_optimal: f64,
    /// Highest optimal density, in percent
    pub max_optimal: f64,
    /// Size of the introduction window for keyword placement
    #[schemars(range(min = 1))]
    pub intro_words: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            min_optimal: 1.0,
            max_optimal: 2.5,
            intro_words: 100,
        }
    }
}

// ============================================================================
// E-E-A-T
// ============================================================================

/// E-E-A-T penalties and thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EeatConfig {
    /// Penalty when no experience marker is found
    pub experience_penalty: u32,
    /// Penalty when fewer than `min_statistics` statistics are found
    pub statistics_penalty: u32,
    pub min_statistics: usize,
    /// Penalty when no author is supplied
    pub author_penalty: u32,
    /// Penalty when fewer than `min_external_links` sources are cited
    pub sources_penalty: u32,
    pub min_external_links: usize,
    /// Penalty when the last update is older than `freshness_months`
    pub freshness_penalty: u32,
    #[schemars(range(min = 1))]
    pub freshness_months: u32,
    /// Lowest score reported as excellent
    pub excellent_threshold: u32,
    /// Lowest score reported as good
    pub good_threshold: u32,
}

impl Default for EeatConfig {
    fn default() -> Self {
        Self {
            experience_penalty: 15,
            statistics_penalty: 20,
            min_statistics: 3,
            author_penalty: 15,
            sources_penalty: 20,
            min_external_links: 3,
            freshness_penalty: 15,
            freshness_months: 12,
            excellent_threshold: 80,
            good_threshold: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        assert_eq!(CriterionWeights::default().total(), 100);
    }

    #[test]
    fn test_default_targets_sum_to_100() {
        assert!((AnchorTargets::default().total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_targets_iterate_in_table_order() {
        let order: Vec<AnchorType> = AnchorTargets::default().iter().map(|(t, _)| t).collect();
        assert_eq!(order, AnchorType::ALL.to_vec());
    }

    #[test]
    fn test_template_counts() {
        for templates in [AnchorTemplates::french(), AnchorTemplates::english()] {
            assert_eq!(templates.partial.len(), 6);
            assert_eq!(templates.branded.len(), 5);
            assert_eq!(templates.generic.len(), 8);
            assert!(templates
                .branded
                .iter()
                .all(|t| t.contains("{keyword}") && t.contains("{platform}")));
        }
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::builder()
            .anchor_tolerance(5.0)
            .density_band(0.8, 3.0)
            .build();
        assert_eq!(config.anchors.tolerance, 5.0);
        assert_eq!(config.density.min_optimal, 0.8);
        assert_eq!(config.density.max_optimal, 3.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "anchors:\n  tolerance: 3.5\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.anchors.tolerance, 3.5);
        assert_eq!(config.anchors.targets, AnchorTargets::default());
        assert_eq!(config.scoring.weights, CriterionWeights::default());
    }
}
