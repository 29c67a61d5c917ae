//! Anchor text rendering from configured templates.

use crate::config::AnchorTemplates;

const KEYWORD: &str = "{keyword}";
const PLATFORM: &str = "{platform}";
const FIRST_TWO_WORDS: &str = "{first_two_words}";

/// First two words of a multi-word keyword.
#[must_use]
pub fn first_two_words(keyword: &str) -> Option<String> {
    let words: Vec<&str> = keyword.split_whitespace().take(2).collect();
    (words.len() == 2).then(|| words.join(" "))
}

/// Substitute every placeholder in a template.
#[must_use]
pub fn fill(template: &str, keyword: &str, platform: &str) -> String {
    let mut text = template
        .replace(KEYWORD, keyword)
        .replace(PLATFORM, platform);
    if text.contains(FIRST_TWO_WORDS) {
        let prefix = first_two_words(keyword).unwrap_or_else(|| keyword.to_string());
        text = text.replace(FIRST_TWO_WORDS, &prefix);
    }
    text
}

/// Templates usable for a keyword: those needing two words are dropped for
/// single-word keywords.
pub fn usable<'a>(templates: &'a [String], keyword: &str) -> Vec<&'a str> {
    let multi_word = first_two_words(keyword).is_some();
    templates
        .iter()
        .map(String::as_str)
        .filter(|t| !t.trim().is_empty())
        .filter(|t| multi_word || !t.contains(FIRST_TWO_WORDS))
        .collect()
}

/// Rendered candidates per list, used for display and tests.
#[must_use]
pub fn partial_candidates(templates: &AnchorTemplates, keyword: &str) -> Vec<String> {
    usable(&templates.partial, keyword)
        .into_iter()
        .map(|t| fill(t, keyword, ""))
        .collect()
}
