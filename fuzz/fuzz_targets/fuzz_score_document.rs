#![no_main]
use libfuzzer_sys::fuzz_target;
use seo_compliance::{ContentDocument, ContentScorer, EngineConfig};

/// Fuzz document scoring.
///
/// The first line is the title, the rest is the body; the title doubles as
/// the keyword source so the density and title criteria see related text.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (title, body) = s.split_once('\n').unwrap_or((s, ""));
        let Ok(scorer) = ContentScorer::new(&EngineConfig::default()) else {
            return;
        };
        let report = scorer.calculate_score(&ContentDocument::new(title, body));
        assert!(report.total_score <= 100);
    }
});
