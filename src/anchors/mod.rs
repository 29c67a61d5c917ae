//! Anchor-text balancing for internal links.
//!
//! - [`AnchorBalancer`]: next-anchor selection and distribution audits
//! - [`RandomSource`]: injected randomness (any `rand::RngCore` works)
//! - [`templates`]: placeholder substitution for anchor templates

mod balancer;
mod random;
pub mod templates;

pub use balancer::{AnchorBalancer, DistributionIssue, DistributionReport, Severity};
pub use random::{RandomSource, SequenceSource};
