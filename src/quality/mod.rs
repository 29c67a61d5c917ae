//! Content quality score module.
//!
//! Scores an article on eight weighted criteria (title, meta description,
//! length, headings, keyword density, internal links, images, readability).
//!
//! # Features
//!
//! - **Banded sub-scores**: every criterion maps a measurement onto fixed bands
//! - **Weighted total**: configurable weights summing to 100
//! - **Letter grade**: A+ to F with color and description
//! - **Actionable suggestions**: at most five, highest impact first
//!
//! # Usage
//!
//! ```no_run
//! use seo_compliance::config::EngineConfig;
//! use seo_compliance::model::ContentDocument;
//! use seo_compliance::quality::ContentScorer;
//!
//! let scorer = ContentScorer::new(&EngineConfig::default()).unwrap();
//! let doc = ContentDocument::new("Guide du vélo électrique", "<h1>Vélo</h1><p>...</p>");
//! let report = scorer.calculate_score(&doc);
//!
//! println!("Overall score: {}/100 ({})", report.total_score, report.grade);
//! for suggestion in &report.suggestions {
//!     println!("- {}: {}", suggestion.criterion.label(), suggestion.message);
//! }
//! ```

pub mod criteria;
mod scorer;

pub use criteria::CriterionResult;
pub use scorer::{
    weighted_total, ContentScorer, Criterion, Grade, Priority, ScoreReport, Suggestion,
    MAX_SUGGESTIONS, SCORING_ENGINE_VERSION,
};
