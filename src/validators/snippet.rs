//! Featured-snippet shapes and placeholder injection.

use crate::text::CompiledPatterns;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("static regex"));

/// Shape of the search query an article answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    What,
    How,
    Why,
    HowMuch,
    /// No marker matched
    Paragraph,
}

impl QuestionType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::What => "what",
            Self::How => "how",
            Self::Why => "why",
            Self::HowMuch => "how_much",
            Self::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layout of the featured-snippet block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SnippetTemplate {
    Definition,
    List,
    Paragraph,
    Table,
}

impl SnippetTemplate {
    /// Template best suited to a question type.
    #[must_use]
    pub const fn for_question(question: QuestionType) -> Self {
        match question {
            QuestionType::What => Self::Definition,
            QuestionType::How => Self::List,
            QuestionType::HowMuch => Self::Table,
            QuestionType::Why | QuestionType::Paragraph => Self::Paragraph,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::List => "list",
            Self::Paragraph => "paragraph",
            Self::Table => "table",
        }
    }

    /// Attribute identifying an injected block of this template.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("data-snippet=\"{}\"", self.name())
    }

    /// Insert this template's placeholder block into `html`.
    ///
    /// Tables go right before the conclusion heading (or at the end); every
    /// other shape goes right after the first paragraph (or at the start).
    /// A document that already carries the block is returned unchanged.
    #[must_use]
    pub fn inject(&self, html: &str, keyword: &str, patterns: &CompiledPatterns) -> String {
        if html.contains(&self.marker()) {
            return html.to_string();
        }

        let body = patterns
            .snippet_placeholders()
            .for_template(*self)
            .replace("{keyword}", &escape_html(keyword.trim()));
        let block = format!(
            "<div class=\"featured-snippet snippet-{name}\" {marker}>{body}</div>",
            name = self.name(),
            marker = self.marker(),
        );

        let offset = match self {
            Self::Table => patterns.conclusion_offset(html).unwrap_or(html.len()),
            _ => PARAGRAPH_END.find(html).map_or(0, |m| m.end()),
        };

        let mut out = String::with_capacity(html.len() + block.len());
        out.push_str(&html[..offset]);
        out.push_str(&block);
        out.push_str(&html[offset..]);
        out
    }
}

impl fmt::Display for SnippetTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
