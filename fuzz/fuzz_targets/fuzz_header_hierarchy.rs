#![no_main]
use libfuzzer_sys::fuzz_target;
use seo_compliance::{EngineConfig, StructureValidator};

/// Fuzz the heading scan and hierarchy checks on arbitrary markup.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(validator) = StructureValidator::new(&EngineConfig::default()) else {
            return;
        };
        let report = validator.validate_header_hierarchy(s);
        assert_eq!(report.valid, report.issues.is_empty());
    }
});
