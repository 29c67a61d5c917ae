#![no_main]
use libfuzzer_sys::fuzz_target;
use seo_compliance::{EngineConfig, StructureValidator};

/// Fuzz snippet preparation.
///
/// The first line is the question, the rest is the document. Injecting
/// twice must leave the second output unchanged.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (question, html) = s.split_once('\n').unwrap_or((s, ""));
        let Ok(validator) = StructureValidator::new(&EngineConfig::default()) else {
            return;
        };
        let once = validator.prepare_snippet(question, html, "keyword");
        let twice = validator.prepare_snippet(question, &once.html, "keyword");
        assert_eq!(once.html, twice.html);
    }
});
