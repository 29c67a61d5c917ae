//! One-call audit combining every engine.

use crate::anchors::{AnchorBalancer, DistributionReport};
use crate::config::{EngineConfig, Validatable};
use crate::enrichment::{NoOpGenerator, RelatedTerms, TextGenerator};
use crate::error::Result;
use crate::model::{AnchorDistribution, ContentDocument};
use crate::quality::{ContentScorer, ScoreReport, SCORING_ENGINE_VERSION};
use crate::validators::{
    DensityReport, EeatReport, EeatValidator, HeaderReport, KeywordDensityValidator,
    StructureValidator, TermCoverage,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of related terms requested from the generator.
pub const DEFAULT_RELATED_TERMS: usize = 10;

/// Everything known about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub engine_version: String,
    pub score: ScoreReport,
    pub density: DensityReport,
    pub keyword_in_intro: bool,
    pub hierarchy: HeaderReport,
    pub eeat: EeatReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchors: Option<DistributionReport>,
    pub related_terms: Vec<TermCoverage>,
}

impl AuditReport {
    /// True when no check raised a blocking problem.
    #[must_use]
    pub fn passes(&self, min_score: u32) -> bool {
        self.score.total_score >= min_score
            && self.anchors.as_ref().map_or(true, |a| a.compliant)
    }
}

/// Owns one instance of every engine, all built from the same config.
#[derive(Debug, Clone)]
pub struct SeoAuditor {
    config: EngineConfig,
    scorer: ContentScorer,
    density: KeywordDensityValidator,
    structure: StructureValidator,
    eeat: EeatValidator,
    balancer: AnchorBalancer,
}

impl SeoAuditor {
    /// Validate the configuration and build every engine.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.ensure_valid()?;
        Ok(Self {
            scorer: ContentScorer::new(&config)?,
            density: KeywordDensityValidator::new(&config)?,
            structure: StructureValidator::new(&config)?,
            eeat: EeatValidator::new(&config)?,
            balancer: AnchorBalancer::new(&config)?,
            config,
        })
    }

    /// Audit with terms from the given generator.
    pub fn audit(
        &self,
        doc: &ContentDocument,
        distribution: Option<&AnchorDistribution>,
        generator: &dyn TextGenerator,
    ) -> AuditReport {
        self.audit_at(doc, distribution, generator, Utc::now())
    }

    /// Audit with an explicit reference time for the freshness check.
    pub fn audit_at(
        &self,
        doc: &ContentDocument,
        distribution: Option<&AnchorDistribution>,
        generator: &dyn TextGenerator,
        now: DateTime<Utc>,
    ) -> AuditReport {
        let keyword = doc.effective_keyword();
        let terms = RelatedTerms::new(generator).fetch(
            &keyword,
            &self.config.locale.language,
            DEFAULT_RELATED_TERMS,
        );

        tracing::debug!(keyword = %keyword, related = terms.len(), "auditing document");

        AuditReport {
            engine_version: SCORING_ENGINE_VERSION.to_string(),
            score: self.scorer.calculate_score(doc),
            density: self.density.validate(&doc.body, &keyword),
            keyword_in_intro: self.density.is_in_first_100_words(&doc.body, &keyword),
            hierarchy: self.structure.validate_header_hierarchy(&doc.body),
            eeat: self.eeat.validate_at(&doc.body, &doc.eeat_metadata(), now),
            anchors: distribution.map(|d| self.balancer.validate_distribution(d)),
            related_terms: self.density.related_coverage(&doc.body, &terms),
        }
    }

    /// Audit without a text generator.
    pub fn audit_offline(
        &self,
        doc: &ContentDocument,
        distribution: Option<&AnchorDistribution>,
    ) -> AuditReport {
        self.audit(doc, distribution, &NoOpGenerator)
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn scorer(&self) -> &ContentScorer {
        &self.scorer
    }

    #[must_use]
    pub const fn density(&self) -> &KeywordDensityValidator {
        &self.density
    }

    #[must_use]
    pub const fn structure(&self) -> &StructureValidator {
        &self.structure
    }

    #[must_use]
    pub const fn eeat(&self) -> &EeatValidator {
        &self.eeat
    }

    #[must_use]
    pub const fn balancer(&self) -> &AnchorBalancer {
        &self.balancer
    }
}
