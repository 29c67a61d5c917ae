//! Shared orchestration for CLI command handlers.
//!
//! Loading documents and distributions from disk, and writing rendered
//! reports to stdout or a file, live here so every handler behaves the same.

mod load;
mod output;

pub use load::{document_from_html, load_distribution, load_document, DocumentFormat};
pub use output::{should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success: every check passed
    pub const SUCCESS: i32 = 0;
    /// A score fell below `--min-score` or a distribution is non-compliant
    pub const THRESHOLD_FAILED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::exit_codes;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_ne!(exit_codes::THRESHOLD_FAILED, exit_codes::SUCCESS);
        assert_ne!(exit_codes::ERROR, exit_codes::THRESHOLD_FAILED);
    }
}
