//! Text utilities shared by every validator.
//!
//! - [`metrics`]: markup stripping, word/sentence counts, accent folding and
//!   substring counting
//! - [`locale`]: per-language pattern tables and their compiled form

pub mod locale;
pub mod metrics;

pub use locale::{CompiledPatterns, LocalePatterns, QuestionMarker, SnippetPlaceholders};
pub use metrics::{
    average_sentence_length, collapse_whitespace, count_occurrences, first_words, fold,
    remove_hidden_markup, round2, sentence_count, strip_markup, word_count,
};
