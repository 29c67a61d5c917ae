//! Collaborator integration for keyword enrichment.
//!
//! The engine never generates text itself; related (LSI) terms and reader
//! questions come from a [`TextGenerator`] supplied by the caller, accessed
//! through [`RelatedTerms`] so that backend failures never abort an audit.

mod related;
mod traits;

pub use related::RelatedTerms;
pub use traits::{NoOpGenerator, StaticGenerator, TextGenerator};
