//! Configuration files driving the engines.

use seo_compliance::config::{load_config_file, ConfigFileError, LocalePreset};
use seo_compliance::model::{AnchorDistribution, AnchorType};
use seo_compliance::validators::DensityStatus;
use seo_compliance::{
    AnchorBalancer, ContentScorer, EngineConfig, KeywordDensityValidator, SeoAuditor, Validatable,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> PathBuf {
    let path = dir.path().join(".seo-compliance.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

fn two_percent_text() -> String {
    let mut words = vec!["mot"; 98];
    words.push("seo");
    words.push("seo");
    words.join(" ")
}

#[test]
fn narrower_density_band_changes_status() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "density:\n  min_optimal: 0.5\n  max_optimal: 1.5\n");
    let config = load_config_file(&path).unwrap();

    let default_status = KeywordDensityValidator::new(&EngineConfig::default())
        .unwrap()
        .validate(&two_percent_text(), "seo")
        .status;
    let custom_status = KeywordDensityValidator::new(&config)
        .unwrap()
        .validate(&two_percent_text(), "seo")
        .status;

    assert_eq!(default_status, DensityStatus::Optimal);
    assert_eq!(custom_status, DensityStatus::TooHigh);
}

#[test]
fn wider_tolerance_accepts_small_drift() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "anchors:\n  tolerance: 6.0\n");
    let config = load_config_file(&path).unwrap();
    assert_eq!(config.anchors.targets, EngineConfig::default().anchors.targets);

    let drifted = AnchorDistribution::new()
        .with(AnchorType::Exact, 12.0)
        .with(AnchorType::Partial, 30.0)
        .with(AnchorType::Branded, 20.0)
        .with(AnchorType::Generic, 18.0)
        .with(AnchorType::Naked, 10.0)
        .with(AnchorType::Image, 10.0);

    let strict = AnchorBalancer::new(&EngineConfig::default()).unwrap();
    let relaxed = AnchorBalancer::new(&config).unwrap();
    assert!(!strict.validate_distribution(&drifted).compliant);
    assert!(relaxed.validate_distribution(&drifted).compliant);
}

#[test]
fn invalid_weights_in_file_are_rejected_by_engines() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "scoring:\n  weights:\n    title: 40\n");
    let config = load_config_file(&path).unwrap();

    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "scoring.weights");
    assert!(ContentScorer::new(&config).is_err());
    assert!(SeoAuditor::new(config).is_err());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "density: [1.0, 2.0");
    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigFileError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn explicit_path_with_locale_override() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "anchors:\n  tolerance: 4.0\n");

    let (config, loaded_from) =
        EngineConfig::from_file_with_locale(Some(&path), Some(LocalePreset::English));
    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert!((config.anchors.tolerance - 4.0).abs() < f64::EPSILON);
    assert_eq!(config.locale.language, "en");
    assert!(config.is_valid());
}

#[test]
fn empty_file_is_the_default_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "{}\n");
    assert_eq!(load_config_file(&path).unwrap(), EngineConfig::default());
}
