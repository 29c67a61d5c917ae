//! Data exchanged between callers and the compliance engine.
//!
//! Everything here is caller-owned input or pure output: documents are read,
//! distributions are snapshots, decisions are returned by value.

mod anchor;
mod document;

pub use anchor::{AnchorDecision, AnchorDistribution, AnchorType, NAKED_URL_PLACEHOLDER};
pub use document::{ContentDocument, EeatMetadata};
