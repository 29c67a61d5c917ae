//! Content validators.
//!
//! - `density`: keyword density band and introduction placement
//! - `structure`: header hierarchy, question typing, snippet injection
//! - `eeat`: experience/expertise/authority/trust signals
//!
//! Every validator is built once from an [`EngineConfig`](crate::config::EngineConfig)
//! and is immutable afterwards.

mod density;
mod eeat;
mod snippet;
mod structure;

pub use density::{DensityReport, DensityStatus, KeywordDensityValidator, TermCoverage};
pub use eeat::{EeatReport, EeatSignals, EeatStatus, EeatValidator};
pub use snippet::{QuestionType, SnippetTemplate};
pub use structure::{heading_levels, HeaderReport, HeadingSkip, SnippetPlan, StructureValidator};
