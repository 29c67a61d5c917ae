//! Text metrics over HTML article bodies.
//!
//! All functions are pure and total: empty or markup-only input yields
//! zero counts, never an error.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>").expect("static regex")
});
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("static regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("static regex"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?…]+(?:\s+|$)").expect("static regex"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&rsquo;", "’"),
    ("&laquo;", "«"),
    ("&raquo;", "»"),
];

/// Remove HTML comments and `<script>`/`<style>` blocks, keeping the rest
/// of the markup intact.
#[must_use]
pub fn remove_hidden_markup(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, " ");
    SCRIPT_STYLE.replace_all(&without_comments, " ").into_owned()
}

/// Strip tags, decode common entities and collapse whitespace.
#[must_use]
pub fn strip_markup(html: &str) -> String {
    let visible = remove_hidden_markup(html);
    let mut text = TAG.replace_all(&visible, " ").into_owned();
    for (entity, replacement) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }
    collapse_whitespace(&text)
}

/// Collapse every whitespace run into a single space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-delimited word count of the visible text.
#[must_use]
pub fn word_count(html: &str) -> usize {
    strip_markup(html).split_whitespace().count()
}

/// Number of sentences in the visible text.
///
/// A sentence ends at a run of `.`, `!`, `?` or `…` followed by whitespace or
/// the end of input; trailing text without terminal punctuation still counts.
#[must_use]
pub fn sentence_count(html: &str) -> usize {
    let text = strip_markup(html);
    SENTENCE_END
        .split(&text)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Average words per sentence, 0 when the text has no sentence.
#[must_use]
pub fn average_sentence_length(html: &str) -> f64 {
    let sentences = sentence_count(html);
    if sentences == 0 {
        return 0.0;
    }
    word_count(html) as f64 / sentences as f64
}

/// Lowercase and strip Latin diacritics so that "Éléphant" matches "elephant".
#[must_use]
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => out.push('a'),
            'ç' | 'ć' | 'č' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' | 'ī' => out.push('i'),
            'ñ' | 'ń' | 'ň' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => out.push('u'),
            'ý' | 'ÿ' => out.push('y'),
            'š' | 'ś' => out.push('s'),
            'ž' | 'ź' | 'ż' => out.push('z'),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            'ß' => out.push_str("ss"),
            '’' | '‘' => out.push('\''),
            other => out.push(other),
        }
    }
    out
}

/// Non-overlapping, case- and accent-insensitive substring count.
///
/// This is a raw substring match: "vélo" is also found inside "vélodrome".
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let needle = fold(needle.trim());
    if needle.is_empty() {
        return 0;
    }
    fold(haystack).matches(needle.as_str()).count()
}

/// The first `n` whitespace tokens of the visible text, joined by spaces.
#[must_use]
pub fn first_words(html: &str, n: usize) -> String {
    strip_markup(html)
        .split_whitespace()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round to two decimals.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
