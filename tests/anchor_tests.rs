//! Anchor-text balancing scenarios.

use rand::rngs::StdRng;
use rand::SeedableRng;
use seo_compliance::anchors::{AnchorBalancer, SequenceSource, Severity};
use seo_compliance::config::{AnchorTemplates, EngineConfig, LocalePreset};
use seo_compliance::model::{AnchorDistribution, AnchorType, NAKED_URL_PLACEHOLDER};

fn balancer() -> AnchorBalancer {
    AnchorBalancer::new(&EngineConfig::default()).unwrap()
}

fn on_target() -> AnchorDistribution {
    AnchorDistribution::new()
        .with(AnchorType::Exact, 15.0)
        .with(AnchorType::Partial, 25.0)
        .with(AnchorType::Branded, 20.0)
        .with(AnchorType::Generic, 20.0)
        .with(AnchorType::Naked, 10.0)
        .with(AnchorType::Image, 10.0)
}

#[test]
fn partial_under_target_is_chosen_next() {
    let current = on_target().with(AnchorType::Partial, 10.0);
    let mut rng = SequenceSource::new([0.0]);
    let decision = balancer().next_anchor("vélo électrique", "Cyclo", &current, &mut rng);
    assert_eq!(decision.anchor_type, AnchorType::Partial);
    assert!(decision.text.contains("vélo"));
}

#[test]
fn empty_history_starts_with_largest_target() {
    let mut rng = SequenceSource::new([0.5]);
    let decision = balancer().next_anchor("vélo", "Cyclo", &AnchorDistribution::new(), &mut rng);
    assert_eq!(decision.anchor_type, AnchorType::Partial);
}

#[test]
fn balanced_history_falls_back_to_weighted_draw() {
    let balancer = balancer();
    // Cumulative targets: exact 15, partial 40, branded 60, generic 80, naked 90, image 100
    let cases = [
        (0.0, AnchorType::Exact),
        (0.16, AnchorType::Partial),
        (0.41, AnchorType::Branded),
        (0.61, AnchorType::Generic),
        (0.81, AnchorType::Naked),
        (0.95, AnchorType::Image),
    ];
    for (draw, expected) in cases {
        let mut rng = SequenceSource::new([draw]);
        assert_eq!(balancer.select_type(&on_target(), &mut rng), expected, "draw {draw}");
    }
}

#[test]
fn rendered_texts_follow_type() {
    let balancer = balancer();
    let mut rng = SequenceSource::new([0.0]);
    assert_eq!(
        balancer.render(AnchorType::Exact, "vélo", "Cyclo", &mut rng),
        "vélo"
    );
    assert_eq!(
        balancer.render(AnchorType::Naked, "vélo", "Cyclo", &mut rng),
        NAKED_URL_PLACEHOLDER
    );
    assert!(balancer
        .render(AnchorType::Branded, "vélo", "Cyclo", &mut rng)
        .contains("Cyclo"));
    assert_eq!(
        balancer.render(AnchorType::Image, "vélo", "Cyclo", &mut rng),
        "vélo - illustration guide complet"
    );
}

#[test]
fn single_word_keyword_never_uses_two_word_template() {
    let balancer = balancer();
    let templates = AnchorTemplates::french();
    for i in 0..templates.partial.len() {
        let mut rng = SequenceSource::new([i as f64 / templates.partial.len() as f64]);
        let text = balancer.render(AnchorType::Partial, "vélo", "Cyclo", &mut rng);
        assert!(!text.contains('{'), "unfilled placeholder in {text}");
        assert!(text.contains("vélo"));
    }
}

#[test]
fn seeded_rng_is_reproducible() {
    let balancer = balancer();
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| balancer.next_anchor("vélo électrique", "Cyclo", &on_target(), &mut rng))
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(11), draw(11));
}

#[test]
fn exact_overuse_is_critical() {
    let current = on_target()
        .with(AnchorType::Exact, 35.0)
        .with(AnchorType::Generic, 10.0)
        .with(AnchorType::Naked, 5.0)
        .with(AnchorType::Image, 5.0);
    let report = balancer().validate_distribution(&current);

    assert!(!report.compliant);
    assert_eq!(report.worst_severity(), Some(Severity::Critical));

    let exact: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.anchor_type == AnchorType::Exact)
        .collect();
    assert_eq!(exact.len(), 2);
    assert_eq!(exact[0].severity, Severity::High);
    assert_eq!(exact[1].severity, Severity::Critical);
    assert_eq!(exact[1].gap, 20.0);
    assert!(exact[1].message.starts_with("DANGER"));

    let naked = report
        .issues
        .iter()
        .find(|i| i.anchor_type == AnchorType::Naked)
        .unwrap();
    assert_eq!(naked.severity, Severity::Medium);
}

#[test]
fn within_tolerance_is_compliant() {
    let current = on_target()
        .with(AnchorType::Exact, 17.0)
        .with(AnchorType::Partial, 23.0);
    let report = balancer().validate_distribution(&current);
    assert!(report.compliant);
    assert!(report.issues.is_empty());
    assert_eq!(report.worst_severity(), None);
}

#[test]
fn exact_over_optimization_is_critical_under_wide_tolerance() {
    let mut config = EngineConfig::default();
    config.anchors.tolerance = 25.0;
    let balancer = AnchorBalancer::new(&config).unwrap();

    let report = balancer.validate_distribution(&on_target().with(AnchorType::Exact, 35.0));
    assert!(!report.compliant);
    assert_eq!(report.issues.len(), 1);

    let issue = &report.issues[0];
    assert_eq!(issue.anchor_type, AnchorType::Exact);
    assert_eq!(issue.severity, Severity::Critical);
    assert_eq!(issue.gap, 20.0);
    assert_eq!(report.worst_severity(), Some(Severity::Critical));
}

#[test]
fn english_preset_renders_english_templates() {
    let balancer = AnchorBalancer::new(&EngineConfig::from_preset(LocalePreset::English)).unwrap();
    let mut rng = SequenceSource::new([0.0]);
    assert_eq!(
        balancer.render(AnchorType::Image, "e-bike", "Cyclo", &mut rng),
        "e-bike - complete illustrated guide"
    );
}

#[test]
fn invalid_targets_are_rejected() {
    let mut config = EngineConfig::default();
    config.anchors.targets.exact = 50.0;
    assert!(AnchorBalancer::new(&config).is_err());
}
