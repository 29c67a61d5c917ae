#![no_main]
use libfuzzer_sys::fuzz_target;
use seo_compliance::{AnchorBalancer, AnchorDistribution, EngineConfig};

/// Fuzz inline distribution parsing followed by validation.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(distribution) = AnchorDistribution::parse_spec(s) {
            if let Ok(balancer) = AnchorBalancer::new(&EngineConfig::default()) {
                let report = balancer.validate_distribution(&distribution);
                assert_eq!(report.compliant, report.issues.is_empty());
            }
        }
    }
});
