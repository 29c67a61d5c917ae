//! Header hierarchy and featured-snippet structure checks.

use super::snippet::{QuestionType, SnippetTemplate};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::text::{remove_hidden_markup, CompiledPatterns};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])\b[^>]*>").expect("static regex"));

/// Heading levels (1..=6) in document order, ignoring comments and
/// script/style blocks.
#[must_use]
pub fn heading_levels(html: &str) -> Vec<u8> {
    let visible = remove_hidden_markup(html);
    HEADING_OPEN
        .captures_iter(&visible)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// A downward jump of more than one heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingSkip {
    /// 0-based index of the heading that jumped
    pub position: usize,
    pub from: u8,
    pub to: u8,
}

/// Result of a header hierarchy check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderReport {
    pub valid: bool,
    pub issues: Vec<String>,
    pub h1_count: usize,
    pub total_headers: usize,
    pub skips: Vec<HeadingSkip>,
    /// Count per level, index 0 is H1
    pub level_counts: [usize; 6],
}

/// Outcome of preparing a document for a featured snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetPlan {
    pub question_type: QuestionType,
    pub template: SnippetTemplate,
    pub html: String,
    /// False when the block was already present
    pub injected: bool,
}

/// Structural checks driven by the locale pattern table.
#[derive(Debug, Clone)]
pub struct StructureValidator {
    patterns: CompiledPatterns,
}

impl StructureValidator {
    /// Build from a configuration; fails when a locale pattern is invalid.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            patterns: config.locale.compile()?,
        })
    }

    /// Check for exactly one H1 and no skipped levels going down.
    #[must_use]
    pub fn validate_header_hierarchy(&self, html: &str) -> HeaderReport {
        let levels = heading_levels(html);
        let mut level_counts = [0usize; 6];
        for level in &levels {
            level_counts[usize::from(*level - 1)] += 1;
        }
        let h1_count = level_counts[0];

        let mut issues = Vec::new();
        match h1_count {
            0 => issues.push("No H1 heading found".to_string()),
            1 => {}
            n => issues.push(format!("Multiple H1 headings found ({n})")),
        }

        let skips: Vec<HeadingSkip> = levels
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[1] > pair[0] + 1)
            .map(|(i, pair)| HeadingSkip {
                position: i + 1,
                from: pair[0],
                to: pair[1],
            })
            .collect();
        for skip in &skips {
            issues.push(format!(
                "Heading level skipped at position {}: H{} followed by H{}",
                skip.position, skip.from, skip.to
            ));
        }

        tracing::debug!(
            headers = levels.len(),
            h1 = h1_count,
            skips = skips.len(),
            "checked header hierarchy"
        );

        HeaderReport {
            valid: issues.is_empty(),
            issues,
            h1_count,
            total_headers: levels.len(),
            skips,
            level_counts,
        }
    }

    /// Classify a query by the first matching marker; `Paragraph` otherwise.
    #[must_use]
    pub fn detect_question_type(&self, text: &str) -> QuestionType {
        self.patterns
            .question_type(text.trim())
            .unwrap_or(QuestionType::Paragraph)
    }

    #[must_use]
    pub const fn classify_snippet_template(&self, question: QuestionType) -> SnippetTemplate {
        SnippetTemplate::for_question(question)
    }

    /// Insert a template's placeholder block into `html`.
    #[must_use]
    pub fn inject(&self, template: SnippetTemplate, html: &str, keyword: &str) -> String {
        template.inject(html, keyword, &self.patterns)
    }

    /// Detect the question type, pick its template and inject it.
    #[must_use]
    pub fn prepare_snippet(&self, question: &str, html: &str, keyword: &str) -> SnippetPlan {
        let question_type = self.detect_question_type(question);
        let template = self.classify_snippet_template(question_type);
        let out = self.inject(template, html, keyword);
        SnippetPlan {
            question_type,
            template,
            injected: out.len() != html.len(),
            html: out,
        }
    }

    /// Compiled locale patterns.
    #[must_use]
    pub const fn patterns(&self) -> &CompiledPatterns {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocalePreset;

    fn validator() -> StructureValidator {
        StructureValidator::new(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_valid_hierarchy() {
        let report = validator()
            .validate_header_hierarchy("<h1>A</h1><h2>B</h2><h3>C</h3><h2>D</h2><h3>E</h3>");
        assert!(report.valid);
        assert_eq!(report.h1_count, 1);
        assert_eq!(report.total_headers, 5);
        assert_eq!(report.level_counts, [1, 2, 2, 0, 0, 0]);
    }

    #[test]
    fn test_commented_and_scripted_headings_are_ignored() {
        let html = "<h1>a</h1><!-- <h1>old</h1> --><h2>b</h2>\
                    <script>document.write('<h1>x</h1>')</script>";
        let report = validator().validate_header_hierarchy(html);
        assert!(report.valid, "{:?}", report.issues);
        assert_eq!(report.h1_count, 1);
        assert_eq!(report.total_headers, 2);
    }

    #[test]
    fn test_skip_position() {
        let report =
            validator().validate_header_hierarchy("<h1>A</h1><h2>B</h2><h4>C</h4><h2>D</h2>");
        assert!(!report.valid);
        assert_eq!(
            report.skips,
            vec![HeadingSkip {
                position: 2,
                from: 2,
                to: 4
            }]
        );
        assert!(report.issues[0].contains("position 2"));
    }

    #[test]
    fn test_going_up_is_not_a_skip() {
        let report =
            validator().validate_header_hierarchy("<h1>A</h1><h2>B</h2><h3>C</h3><h4>D</h4><h2>E</h2>");
        assert!(report.valid);
    }

    #[test]
    fn test_h1_count_issues() {
        let v = validator();
        let none = v.validate_header_hierarchy("<h2>A</h2>");
        assert_eq!(none.issues, vec!["No H1 heading found".to_string()]);
        let many = v.validate_header_hierarchy("<h1>A</h1><h1>B</h1>");
        assert!(many.issues[0].starts_with("Multiple H1"));
    }

    #[test]
    fn test_header_tag_is_not_a_heading() {
        let report = validator().validate_header_hierarchy("<header><h1 class=\"t\">A</h1></header><hr>");
        assert_eq!(report.total_headers, 1);
        assert!(report.valid);
    }

    #[test]
    fn test_detect_question_type_french() {
        let v = validator();
        assert_eq!(v.detect_question_type("Qu'est-ce que le SEO ?"), QuestionType::What);
        assert_eq!(v.detect_question_type("Comment choisir un vélo"), QuestionType::How);
        assert_eq!(v.detect_question_type("Pourquoi courir le matin"), QuestionType::Why);
        assert_eq!(v.detect_question_type("Combien coûte un vélo"), QuestionType::HowMuch);
        assert_eq!(v.detect_question_type("Quel est le prix d'un vélo"), QuestionType::HowMuch);
        assert_eq!(v.detect_question_type("Vélo électrique"), QuestionType::Paragraph);
    }

    #[test]
    fn test_detect_question_type_english() {
        let v = StructureValidator::new(&EngineConfig::from_preset(LocalePreset::English)).unwrap();
        assert_eq!(v.detect_question_type("What is SEO?"), QuestionType::What);
        assert_eq!(v.detect_question_type("How to pick a bike"), QuestionType::How);
        assert_eq!(v.detect_question_type("How much is a bike"), QuestionType::HowMuch);
        assert_eq!(v.detect_question_type("Why run"), QuestionType::Why);
    }

    #[test]
    fn test_prepare_snippet() {
        let v = validator();
        let plan = v.prepare_snippet("Comment choisir un vélo", "<p>Intro</p>", "vélo");
        assert_eq!(plan.template, SnippetTemplate::List);
        assert!(plan.injected);
        let again = v.prepare_snippet("Comment choisir un vélo", &plan.html, "vélo");
        assert!(!again.injected);
        assert_eq!(again.html, plan.html);
    }
}
