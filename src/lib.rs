//! **Deterministic SEO compliance checks for long-form articles.**
//!
//! `seo-compliance` scores a content document against weighted criteria,
//! validates keyword density, heading structure and E-E-A-T signals, injects
//! featured-snippet blocks, and keeps the anchor-text mix of internal links
//! close to a target distribution. Every check is a pure function of its
//! input and an immutable configuration; text generation (related terms,
//! reader questions) is delegated to a caller-supplied collaborator.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: caller-owned input ([`ContentDocument`],
//!   [`AnchorDistribution`]) and the [`AnchorDecision`] output.
//! - **[`quality`]**: the [`ContentScorer`] producing a [`ScoreReport`] with
//!   eight banded sub-scores, a letter grade and prioritized suggestions.
//! - **[`validators`]**: keyword density, header hierarchy with snippet
//!   injection, and E-E-A-T checks.
//! - **[`anchors`]**: the [`AnchorBalancer`] with injected randomness.
//! - **[`enrichment`]**: the [`TextGenerator`] collaborator trait.
//! - **[`audit`]**: [`SeoAuditor`], every engine behind one call.
//! - **[`config`]**: [`EngineConfig`], locale presets, validation and YAML
//!   config files.
//! - **[`reports`]**: summary, JSON and SARIF output.
//!
//! ## Getting Started
//!
//! ```
//! use seo_compliance::{ContentDocument, ContentScorer, EngineConfig};
//!
//! let scorer = ContentScorer::new(&EngineConfig::default()).unwrap();
//! let doc = ContentDocument::new(
//!     "Vélo électrique : le guide complet",
//!     "<h1>Vélo électrique</h1><p>Le vélo électrique change la ville.</p>",
//! )
//! .with_keyword("vélo électrique");
//!
//! let report = scorer.calculate_score(&doc);
//! assert!(report.total_score <= 100);
//! assert!(report.suggestions.len() <= 5);
//! ```
//!
//! ### Choosing the next anchor
//!
//! ```
//! use rand::SeedableRng;
//! use seo_compliance::{AnchorBalancer, AnchorDistribution, AnchorType, EngineConfig};
//!
//! let balancer = AnchorBalancer::new(&EngineConfig::default()).unwrap();
//! let current = AnchorDistribution::new()
//!     .with(AnchorType::Exact, 15.0)
//!     .with(AnchorType::Partial, 10.0)
//!     .with(AnchorType::Branded, 20.0)
//!     .with(AnchorType::Generic, 20.0)
//!     .with(AnchorType::Naked, 10.0)
//!     .with(AnchorType::Image, 10.0);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let decision = balancer.next_anchor("vélo électrique", "Cyclo", &current, &mut rng);
//! assert_eq!(decision.anchor_type, AnchorType::Partial);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Percentages and word counts move between usize and f64 everywhere
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod anchors;
pub mod audit;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod quality;
pub mod reports;
pub mod text;
pub mod validators;

// Re-export main types for convenience
pub use anchors::{AnchorBalancer, DistributionReport, RandomSource, SequenceSource};
pub use audit::{AuditReport, SeoAuditor};
pub use config::{ConfigError, EngineConfig, EngineConfigBuilder, LocalePreset, Validatable};
pub use enrichment::{NoOpGenerator, RelatedTerms, StaticGenerator, TextGenerator};
pub use error::{ErrorContext, OptionContext, Result, SeoError};
pub use model::{AnchorDecision, AnchorDistribution, AnchorType, ContentDocument};
pub use quality::{ContentScorer, Criterion, Grade, ScoreReport, Suggestion};
pub use reports::{ReportFormat, ReportGenerator};
pub use validators::{
    DensityReport, EeatReport, EeatValidator, HeaderReport, KeywordDensityValidator,
    StructureValidator,
};
