//! Failure-tolerant access to the text generator.

use super::traits::TextGenerator;

/// Wraps a [`TextGenerator`] so that backend failures degrade to empty
/// lists instead of aborting an audit.
///
/// Results are trimmed, de-duplicated case-insensitively (first spelling
/// wins) and truncated to the requested count.
#[derive(Clone, Copy)]
pub struct RelatedTerms<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> RelatedTerms<'a> {
    #[must_use]
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Related terms for a keyword; empty when the backend fails.
    #[must_use]
    pub fn fetch(&self, keyword: &str, language: &str, count: usize) -> Vec<String> {
        if count == 0 || keyword.trim().is_empty() {
            return Vec::new();
        }
        match self.generator.generate_related(keyword, language, count) {
            Ok(terms) => normalize(terms, count),
            Err(e) => {
                tracing::warn!(
                    generator = self.generator.name(),
                    "Related term generation failed for '{}': {}",
                    keyword,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Reader questions for a keyword; empty when the backend fails.
    #[must_use]
    pub fn questions(&self, keyword: &str, language: &str, count: usize) -> Vec<String> {
        if count == 0 || keyword.trim().is_empty() {
            return Vec::new();
        }
        match self.generator.generate_questions(keyword, language, count) {
            Ok(questions) => normalize(questions, count),
            Err(e) => {
                tracing::warn!(
                    generator = self.generator.name(),
                    "Question generation failed for '{}': {}",
                    keyword,
                    e
                );
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for RelatedTerms<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelatedTerms")
            .field("generator", &self.generator.name())
            .finish()
    }
}

fn normalize(items: Vec<String>, count: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.to_lowercase()))
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::{NoOpGenerator, StaticGenerator};
    use crate::error::{Result, SeoError};

    struct FailingGenerator;

    impl TextGenerator for FailingGenerator {
        fn generate_related(&self, _: &str, _: &str, _: usize) -> Result<Vec<String>> {
            Err(SeoError::validation("backend unavailable"))
        }

        fn generate_questions(&self, _: &str, _: &str, _: usize) -> Result<Vec<String>> {
            Err(SeoError::validation("backend unavailable"))
        }

        fn name(&self) -> &'static str {
            "Failing"
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_failure_yields_empty_list() {
        let terms = RelatedTerms::new(&FailingGenerator);
        assert!(terms.fetch("vélo", "fr", 5).is_empty());
        assert!(terms.questions("vélo", "fr", 5).is_empty());
    }

    #[test]
    fn test_results_are_normalized() {
        let generator = StaticGenerator::new().with_fallback([
            " batterie ",
            "Batterie",
            "",
            "cadre",
            "autonomie",
        ]);
        let terms = RelatedTerms::new(&generator).fetch("vélo", "fr", 10);
        assert_eq!(terms, vec!["batterie", "cadre", "autonomie"]);
    }

    #[test]
    fn test_truncated_to_count() {
        let generator = StaticGenerator::new().with_fallback(["a", "b", "c"]);
        let terms = RelatedTerms::new(&generator).fetch("vélo", "fr", 2);
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn test_noop_and_blank_keyword() {
        assert!(RelatedTerms::new(&NoOpGenerator).fetch("vélo", "fr", 5).is_empty());
        let generator = StaticGenerator::new().with_fallback(["a"]);
        assert!(RelatedTerms::new(&generator).fetch("  ", "fr", 5).is_empty());
    }
}
