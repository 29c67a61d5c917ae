//! Content document supplied by the caller for every scoring call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of title words used as the keyword when none is supplied
const DERIVED_KEYWORD_WORDS: usize = 3;

/// An article as handed over by the content provider.
///
/// The engine only reads it; every call receives a fresh value and nothing
/// is retained between calls. Field names follow the platform's camelCase
/// payloads so documents can be loaded straight from JSON or YAML exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    /// Article title (H1 candidate)
    pub title: String,
    /// SEO title, preferred over `title` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Meta description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// HTML body
    pub body: String,
    /// Word count reported by the provider (0 = compute from body)
    pub word_count: usize,
    /// Main image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Main image alt text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    /// Number of internal links in the article
    pub internal_link_count: usize,
    /// Target keyword (empty = derived from the title)
    pub primary_keyword: String,
    /// Author byline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentDocument {
    /// Create a document from a title and an HTML body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Set the primary keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.primary_keyword = keyword.into();
        self
    }

    /// Set the meta description.
    #[must_use]
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Set the main image and its alt text.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>, alt: Option<String>) -> Self {
        self.image_url = Some(url.into());
        self.image_alt = alt;
        self
    }

    /// Set the internal link count.
    #[must_use]
    pub const fn with_internal_links(mut self, count: usize) -> Self {
        self.internal_link_count = count;
        self
    }

    /// Set the provider word count.
    #[must_use]
    pub const fn with_word_count(mut self, count: usize) -> Self {
        self.word_count = count;
        self
    }

    /// Set the author byline.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author_name = Some(author.into());
        self
    }

    /// Set the last update timestamp.
    #[must_use]
    pub const fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Title used for length scoring: the meta title when set, else the title.
    #[must_use]
    pub fn effective_title(&self) -> &str {
        match self.meta_title.as_deref() {
            Some(meta) if !meta.trim().is_empty() => meta,
            _ => &self.title,
        }
    }

    /// Keyword used for density checks.
    ///
    /// Falls back to the first three words of the title when the document
    /// carries no explicit keyword.
    #[must_use]
    pub fn effective_keyword(&self) -> String {
        let explicit = self.primary_keyword.trim();
        if !explicit.is_empty() {
            return explicit.to_string();
        }
        self.title
            .split_whitespace()
            .take(DERIVED_KEYWORD_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Trust metadata consumed by the E-E-A-T validator.
    #[must_use]
    pub fn eeat_metadata(&self) -> EeatMetadata {
        EeatMetadata {
            author_name: self.author_name.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Authorship and freshness metadata for E-E-A-T checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EeatMetadata {
    /// Author byline
    pub author_name: Option<String>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_keyword_prefers_explicit() {
        let doc = ContentDocument::new("Comment choisir un vélo", "").with_keyword(" vélo électrique ");
        assert_eq!(doc.effective_keyword(), "vélo électrique");
    }

    #[test]
    fn test_effective_keyword_from_title() {
        let doc = ContentDocument::new("Comment choisir un vélo électrique", "");
        assert_eq!(doc.effective_keyword(), "Comment choisir un");
    }

    #[test]
    fn test_effective_title_prefers_meta_title() {
        let mut doc = ContentDocument::new("Titre", "");
        assert_eq!(doc.effective_title(), "Titre");
        doc.meta_title = Some("Meta titre".to_string());
        assert_eq!(doc.effective_title(), "Meta titre");
        doc.meta_title = Some("   ".to_string());
        assert_eq!(doc.effective_title(), "Titre");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "title": "Guide",
            "body": "<p>texte</p>",
            "internalLinkCount": 4,
            "primaryKeyword": "guide",
            "updatedAt": "2026-01-15T10:00:00Z"
        }"#;
        let doc: ContentDocument = serde_json::from_str(json).expect("valid document");
        assert_eq!(doc.internal_link_count, 4);
        assert_eq!(doc.primary_keyword, "guide");
        assert!(doc.updated_at.is_some());
        assert!(doc.meta_description.is_none());
        assert_eq!(doc.word_count, 0);
    }
}
