//! Banded sub-scores for each content criterion.
//!
//! Every function is total: an empty document falls into the lowest band
//! with an explanatory issue, never an error.

use crate::text::{
    average_sentence_length, count_occurrences, round2, sentence_count, strip_markup,
    CompiledPatterns,
};
use crate::validators::heading_levels;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

static CONTENT_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b").expect("static regex"));

/// Sub-score of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// 0..=100
    pub score: u32,
    pub issues: Vec<String>,
    pub metadata: IndexMap<String, Value>,
}

impl CriterionResult {
    fn new(score: u32) -> Self {
        Self {
            score: score.min(100),
            issues: Vec::new(),
            metadata: IndexMap::new(),
        }
    }

    fn issue(mut self, message: impl Into<String>) -> Self {
        self.issues.push(message.into());
        self
    }

    fn maybe_issue(self, message: Option<String>) -> Self {
        match message {
            Some(message) => self.issue(message),
            None => self,
        }
    }

    fn issue_if(self, condition: bool, message: impl Into<String>) -> Self {
        if condition {
            self.issue(message)
        } else {
            self
        }
    }

    fn meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

pub fn title(title: &str, keyword: &str, patterns: &CompiledPatterns) -> CriterionResult {
    let len = title.trim().chars().count();
    let (score, issue) = match len {
        50..=60 => (100, None),
        40..=49 => (80, Some(format!("Title is a bit short ({len} characters, aim for 50-60)"))),
        61..=70 => (70, Some(format!("Title is a bit long ({len} characters, aim for 50-60)"))),
        0..=39 => (50, Some(format!("Title is too short ({len} characters, aim for 50-60)"))),
        _ => (40, Some(format!("Title is too long ({len} characters, will be truncated in results)"))),
    };

    CriterionResult::new(score)
        .maybe_issue(issue)
        .meta("length", len)
        .meta("contains_keyword", count_occurrences(title, keyword) > 0)
        .meta("power_words", patterns.power_words_in(title))
}

pub fn meta_description(description: Option<&str>) -> CriterionResult {
    let len = description.map_or(0, |d| d.trim().chars().count());
    let (score, issue) = match len {
        150..=160 => (100, None),
        120..=149 => (80, Some(format!("Meta description is a bit short ({len} characters, aim for 150-160)"))),
        161..=180 => (70, Some(format!("Meta description is a bit long ({len} characters, aim for 150-160)"))),
        0 => (50, Some("Meta description is missing".to_string())),
        1..=119 => (50, Some(format!("Meta description is too short ({len} characters, aim for 150-160)"))),
        _ => (40, Some(format!("Meta description is too long ({len} characters, will be truncated)"))),
    };

    CriterionResult::new(score)
        .maybe_issue(issue)
        .meta("length", len)
}

pub fn length(word_count: usize) -> CriterionResult {
    let (score, issue) = match word_count {
        1000..=2500 => (100, None),
        300..=999 => (70, Some(format!("Content is short ({word_count} words, aim for 1000-2500)"))),
        0..=299 => (30, Some(format!("Content is too thin ({word_count} words, aim for 1000-2500)"))),
        _ => (80, Some(format!("Content is very long ({word_count} words), consider splitting it"))),
    };

    CriterionResult::new(score)
        .maybe_issue(issue)
        .meta("word_count", word_count)
}

pub fn headings(body: &str) -> CriterionResult {
    let levels = heading_levels(body);
    let count = |level: u8| levels.iter().filter(|l| **l == level).count();
    let (h1, h2, h3) = (count(1), count(2), count(3));

    let h1_points = match h1 {
        1 => 40,
        0 => 0,
        _ => 20,
    };
    let h2_points = match h2 {
        2..=8 => 40,
        1 => 20,
        0 => 0,
        _ => 30,
    };
    let h3_points = if h3 > 0 { 20 } else { 0 };

    CriterionResult::new(h1_points + h2_points + h3_points)
        .issue_if(h1 == 0, "Add a single H1 heading")
        .issue_if(h1 > 1, format!("Use a single H1 heading ({h1} found)"))
        .issue_if(h2 == 0, "Structure the content with H2 sections")
        .issue_if(h2 == 1, "Add at least one more H2 section")
        .issue_if(h2 > 8, format!("Too many H2 sections ({h2}), consider grouping them"))
        .issue_if(h3 == 0, "Add H3 subsections to detail the H2 sections")
        .meta("h1", h1)
        .meta("h2", h2)
        .meta("h3", h3)
}

/// Keyword density over the visible body text; `word_count` is the
/// denominator.
pub fn keywords(body: &str, keyword: &str, word_count: usize) -> CriterionResult {
    let occurrences = count_occurrences(&strip_markup(body), keyword);
    let density = if word_count == 0 {
        0.0
    } else {
        round2(occurrences as f64 / word_count as f64 * 100.0)
    };

    let result = if occurrences == 0 {
        CriterionResult::new(20).issue(format!("Keyword \"{keyword}\" does not appear in the content"))
    } else if density < 0.5 {
        CriterionResult::new(60).issue(format!("Keyword density too low ({density}%, aim for 0.5-2.5%)"))
    } else if density > 2.5 {
        CriterionResult::new(40).issue(format!("Keyword stuffing detected ({density}%, stay under 2.5%)"))
    } else {
        CriterionResult::new(100)
    };

    result
        .meta("keyword", keyword)
        .meta("occurrences", occurrences)
        .meta("density", density)
}

pub fn internal_links(count: usize) -> CriterionResult {
    let (score, issue) = match count {
        3..=10 => (100, None),
        2 => (70, Some("Add at least one more internal link (3-10 recommended)".to_string())),
        1 => (40, Some("Only one internal link, add 2 to 9 more".to_string())),
        0 => (0, Some("No internal links, add 3 to 10".to_string())),
        _ => (80, Some(format!("Too many internal links ({count}), keep at most 10"))),
    };

    CriterionResult::new(score)
        .maybe_issue(issue)
        .meta("count", count)
}

pub fn images(image_url: Option<&str>, image_alt: Option<&str>, body: &str) -> CriterionResult {
    let has_main = image_url.is_some_and(|u| !u.trim().is_empty());
    let alt_len = image_alt.map_or(0, |a| a.trim().chars().count());
    let content_images = CONTENT_IMAGE.find_iter(body).count();

    let mut score = 0;
    let mut result_issues = Vec::new();

    if has_main {
        score += 40;
        if (20..=125).contains(&alt_len) {
            score += 30;
        } else {
            result_issues.push(format!(
                "Main image alt text should be 20-125 characters ({alt_len} found)"
            ));
        }
    } else {
        result_issues.push("Add a main image".to_string());
    }

    match content_images {
        0 => result_issues.push("Add images inside the content".to_string()),
        1 => score += 15,
        _ => score += 30,
    }

    let mut result = CriterionResult::new(score);
    result.issues = result_issues;
    result
        .meta("main_image", has_main)
        .meta("alt_length", alt_len)
        .meta("content_images", content_images)
}

pub fn readability(body: &str) -> CriterionResult {
    let sentences = sentence_count(body);
    let average = round2(average_sentence_length(body));

    let result = if sentences == 0 {
        CriterionResult::new(50).issue("No readable sentences")
    } else if (15.0..=20.0).contains(&average) {
        CriterionResult::new(100)
    } else if average < 15.0 {
        CriterionResult::new(80).issue(format!("Sentences are short ({average} words on average)"))
    } else if average <= 25.0 {
        CriterionResult::new(70).issue(format!("Sentences are a bit long ({average} words on average, aim for 15-20)"))
    } else {
        CriterionResult::new(50).issue(format!("Sentences are too long ({average} words on average, aim for 15-20)"))
    };

    result
        .meta("average_sentence_length", average)
        .meta("sentences", sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LocalePatterns;

    fn patterns() -> CompiledPatterns {
        LocalePatterns::french().compile().unwrap()
    }

    #[test]
    fn test_title_bands() {
        let p = patterns();
        let score = |len: usize| title(&"a".repeat(len), "", &p).score;
        assert_eq!(score(55), 100);
        assert_eq!(score(50), 100);
        assert_eq!(score(60), 100);
        assert_eq!(score(45), 80);
        assert_eq!(score(65), 70);
        assert_eq!(score(39), 50);
        assert_eq!(score(71), 40);
    }

    #[test]
    fn test_title_metadata() {
        let result = title("Le guide complet du vélo électrique", "vélo", &patterns());
        assert_eq!(result.metadata["contains_keyword"], Value::Bool(true));
        assert_eq!(result.metadata["power_words"], serde_json::json!(["guide", "complet"]));
    }

    #[test]
    fn test_meta_description_bands() {
        let score = |len: usize| meta_description(Some(&"a".repeat(len))).score;
        assert_eq!(score(155), 100);
        assert_eq!(score(130), 80);
        assert_eq!(score(170), 70);
        assert_eq!(score(100), 50);
        assert_eq!(score(200), 40);
        let missing = meta_description(None);
        assert_eq!(missing.score, 50);
        assert_eq!(missing.issues, vec!["Meta description is missing".to_string()]);
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(length(1200).score, 100);
        assert_eq!(length(500).score, 70);
        assert_eq!(length(3000).score, 80);
        assert_eq!(length(0).score, 30);
    }

    #[test]
    fn test_headings() {
        assert_eq!(headings("<h1>a</h1><h2>b</h2><h2>c</h2><h3>d</h3>").score, 100);
        assert_eq!(headings("<h1>a</h1><h1>b</h1><h2>c</h2>").score, 40);
        let nine_h2 = format!("<h1>a</h1>{}", "<h2>x</h2>".repeat(9));
        assert_eq!(headings(&nine_h2).score, 70);
        let empty = headings("");
        assert_eq!(empty.score, 0);
        assert_eq!(empty.issues.len(), 3);
    }

    #[test]
    fn test_keyword_bands() {
        let text = |hits: usize| {
            let mut words = vec!["mot"; 200 - hits];
            words.extend(std::iter::repeat("vélo").take(hits));
            words.join(" ")
        };
        assert_eq!(keywords(&text(4), "vélo", 200).score, 100);
        assert_eq!(keywords(&text(0), "vélo", 200).score, 20);
        assert_eq!(keywords(&text(0), "", 200).score, 20);
        assert_eq!(keywords(&text(10), "vélo", 200).score, 40);
        assert_eq!(keywords(&text(4), "vélo", 2000).score, 60);
        assert_eq!(keywords("", "vélo", 0).score, 20);
    }

    #[test]
    fn test_internal_link_bands() {
        assert_eq!(internal_links(5).score, 100);
        assert_eq!(internal_links(2).score, 70);
        assert_eq!(internal_links(1).score, 40);
        assert_eq!(internal_links(0).score, 0);
        let many = internal_links(12);
        assert_eq!(many.score, 80);
        assert_eq!(many.issues.len(), 1);
    }

    #[test]
    fn test_images() {
        let alt = "a".repeat(40);
        let body = "<img src=a><IMG src=b>";
        assert_eq!(images(Some("x.jpg"), Some(&alt), body).score, 100);
        assert_eq!(images(Some("x.jpg"), Some("short"), body).score, 70);
        assert_eq!(images(Some("x.jpg"), Some(&alt), "<img src=a>").score, 85);
        let none = images(None, None, "");
        assert_eq!(none.score, 0);
        assert_eq!(none.issues.len(), 2);
    }

    #[test]
    fn test_readability_bands() {
        let sentence = |words: usize| format!("{}.", vec!["mot"; words].join(" "));
        let body = |words: usize| vec![sentence(words); 4].join(" ");
        assert_eq!(readability(&body(18)).score, 100);
        assert_eq!(readability(&body(10)).score, 80);
        assert_eq!(readability(&body(22)).score, 70);
        assert_eq!(readability(&body(30)).score, 50);
        let empty = readability("");
        assert_eq!(empty.score, 50);
        assert_eq!(empty.issues, vec!["No readable sentences".to_string()]);
    }
}
