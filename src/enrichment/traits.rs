//! Text-generation collaborator traits.
//!
//! This module provides the `TextGenerator` trait through which the engine
//! asks an external service (typically an LLM) for related terms and
//! questions, along with two in-process implementations.

use crate::error::Result;
use indexmap::IndexMap;

/// Trait for text generators.
///
/// Implement this trait to plug in a new generation backend.
///
/// # Example
///
/// ```ignore
/// use seo_compliance::enrichment::{NoOpGenerator, RelatedTerms, TextGenerator};
///
/// // Use NoOpGenerator when no backend is configured
/// let generator: Box<dyn TextGenerator> = if config.enabled {
///     Box::new(MyLlmGenerator::new(api_key)?)
/// } else {
///     Box::new(NoOpGenerator)
/// };
///
/// let terms = RelatedTerms::new(generator.as_ref()).fetch("vélo électrique", "fr", 10);
/// ```
pub trait TextGenerator: Send + Sync {
    /// Generate up to `count` terms semantically related to `keyword`.
    fn generate_related(&self, keyword: &str, language: &str, count: usize) -> Result<Vec<String>>;

    /// Generate up to `count` questions readers ask about `keyword`.
    fn generate_questions(
        &self,
        _keyword: &str,
        _language: &str,
        _count: usize,
    ) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Get the name of this generator.
    fn name(&self) -> &'static str;

    /// Check if the backend is reachable.
    fn is_available(&self) -> bool;
}

/// A no-operation generator that returns nothing.
///
/// Use this when no generation backend is configured. It implements the
/// Null Object pattern, allowing code to use the `TextGenerator` trait
/// without null checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpGenerator;

impl NoOpGenerator {
    /// Create a new no-op generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TextGenerator for NoOpGenerator {
    fn generate_related(&self, _keyword: &str, _language: &str, _count: usize) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Serves fixed term lists keyed by lowercase keyword.
///
/// Backs the CLI `--related` flag and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticGenerator {
    related: IndexMap<String, Vec<String>>,
    questions: IndexMap<String, Vec<String>>,
    fallback: Vec<String>,
}

impl StaticGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms returned for every keyword without a dedicated entry.
    #[must_use]
    pub fn with_fallback(mut self, terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fallback = terms.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_related(
        mut self,
        keyword: &str,
        terms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.related.insert(
            keyword.trim().to_lowercase(),
            terms.into_iter().map(Into::into).collect(),
        );
        self
    }

    #[must_use]
    pub fn with_questions(
        mut self,
        keyword: &str,
        questions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.questions.insert(
            keyword.trim().to_lowercase(),
            questions.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl TextGenerator for StaticGenerator {
    fn generate_related(&self, keyword: &str, _language: &str, count: usize) -> Result<Vec<String>> {
        let terms = self
            .related
            .get(&keyword.trim().to_lowercase())
            .unwrap_or(&self.fallback);
        Ok(terms.iter().take(count).cloned().collect())
    }

    fn generate_questions(&self, keyword: &str, _language: &str, count: usize) -> Result<Vec<String>> {
        Ok(self
            .questions
            .get(&keyword.trim().to_lowercase())
            .map(|q| q.iter().take(count).cloned().collect())
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "Static"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_generator() {
        let generator = NoOpGenerator::new();
        assert_eq!(generator.name(), "NoOp");
        assert!(!generator.is_available());
        assert!(generator.generate_related("vélo", "fr", 5).unwrap().is_empty());
        assert!(generator.generate_questions("vélo", "fr", 5).unwrap().is_empty());
    }

    #[test]
    fn test_static_generator_lookup() {
        let generator = StaticGenerator::new()
            .with_related("Vélo", ["batterie", "cadre", "autonomie"])
            .with_fallback(["guide"]);
        assert_eq!(
            generator.generate_related(" vélo ", "fr", 2).unwrap(),
            vec!["batterie".to_string(), "cadre".to_string()]
        );
        assert_eq!(generator.generate_related("trottinette", "fr", 5).unwrap(), vec!["guide".to_string()]);
    }

    #[test]
    fn test_static_generator_questions() {
        let generator = StaticGenerator::new().with_questions("vélo", ["Comment choisir un vélo ?"]);
        assert_eq!(generator.generate_questions("vélo", "fr", 3).unwrap().len(), 1);
        assert!(generator.generate_questions("autre", "fr", 3).unwrap().is_empty());
    }
}
