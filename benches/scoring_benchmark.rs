//! Benchmarks for document scoring and validation.
//!
//! Run with: cargo bench --bench scoring_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use seo_compliance::model::{AnchorDistribution, AnchorType};
use seo_compliance::{
    AnchorBalancer, ContentDocument, ContentScorer, EngineConfig, SeoAuditor, StructureValidator,
};
use std::hint::black_box;

const PARAGRAPH: &str = "<p>Le vélo électrique permet de parcourir 20 km par jour sans effort. \
J'ai testé trois modèles pendant 6 mois et 40 % des trajets se font désormais à vélo.</p>";

/// Generate an article with the given number of sections.
fn generate_document(sections: usize) -> ContentDocument {
    let mut body = String::from("<h1>Vélo électrique</h1>");
    for i in 0..sections {
        body.push_str(&format!("<h2>Partie {i}</h2>"));
        for _ in 0..4 {
            body.push_str(PARAGRAPH);
        }
        if i % 3 == 0 {
            body.push_str(&format!("<img src=\"velo-{i}.jpg\" alt=\"vélo électrique en ville\">"));
        }
    }
    body.push_str("<h2>Conclusion</h2><p>Le vélo électrique reste un bon choix.</p>");

    ContentDocument::new("Vélo électrique : le guide complet pour bien choisir", body)
        .with_keyword("vélo électrique")
        .with_meta_description(
            "Tout savoir sur le vélo électrique : autonomie, prix, entretien et conseils pour \
choisir le modèle adapté à vos trajets quotidiens en ville.",
        )
        .with_internal_links(4)
}

fn bench_score_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_scaling");
    let scorer = ContentScorer::new(&EngineConfig::default()).expect("default config");

    for sections in [5, 20, 50, 100].iter() {
        let doc = generate_document(*sections);
        group.bench_with_input(BenchmarkId::new("calculate_score", sections), sections, |b, _| {
            b.iter(|| black_box(scorer.calculate_score(black_box(&doc))))
        });
    }

    group.finish();
}

fn bench_header_hierarchy(c: &mut Criterion) {
    let validator = StructureValidator::new(&EngineConfig::default()).expect("default config");
    let doc = generate_document(50);

    c.bench_function("header_hierarchy_50_sections", |b| {
        b.iter(|| black_box(validator.validate_header_hierarchy(black_box(&doc.body))))
    });
}

fn bench_full_audit(c: &mut Criterion) {
    let auditor = SeoAuditor::new(EngineConfig::default()).expect("default config");
    let doc = generate_document(20);
    let distribution = AnchorDistribution::new()
        .with(AnchorType::Exact, 20.0)
        .with(AnchorType::Partial, 20.0)
        .with(AnchorType::Generic, 60.0);

    c.bench_function("audit_offline_20_sections", |b| {
        b.iter(|| black_box(auditor.audit_offline(black_box(&doc), Some(&distribution))))
    });
}

fn bench_anchor_selection(c: &mut Criterion) {
    use rand::SeedableRng;

    let balancer = AnchorBalancer::new(&EngineConfig::default()).expect("default config");
    let balanced = AnchorDistribution::new()
        .with(AnchorType::Exact, 15.0)
        .with(AnchorType::Partial, 25.0)
        .with(AnchorType::Branded, 20.0)
        .with(AnchorType::Generic, 20.0)
        .with(AnchorType::Naked, 10.0)
        .with(AnchorType::Image, 10.0);
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    c.bench_function("next_anchor_weighted_draw", |b| {
        b.iter(|| black_box(balancer.next_anchor("vélo électrique", "Cyclo", &balanced, &mut rng)))
    });
}

criterion_group!(
    benches,
    bench_score_scaling,
    bench_header_hierarchy,
    bench_full_audit,
    bench_anchor_selection
);
criterion_main!(benches);
