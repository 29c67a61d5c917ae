//! Configuration module for seo-compliance.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named locale presets
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seo_compliance::config::{EngineConfig, LocalePreset};
//!
//! // Use defaults (French tables)
//! let config = EngineConfig::default();
//!
//! // Use a preset
//! let config = EngineConfig::from_preset(LocalePreset::English);
//!
//! // Use builder
//! let config = EngineConfig::builder()
//!     .anchor_tolerance(3.0)
//!     .density_band(0.8, 2.0)
//!     .build();
//!
//! // Load from file
//! use seo_compliance::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.seo-compliance.yaml` file in your project root or
//! `~/.config/seo-compliance/`:
//!
//! ```yaml
//! anchors:
//!   tolerance: 3.0
//! density:
//!   max_optimal: 2.0
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{
    LocalePreset, DEFAULT_ANCHOR_TOLERANCE, DEFAULT_EXACT_CRITICAL_THRESHOLD, DEFAULT_INTRO_WORDS,
};
pub use types::{
    AnchorConfig, AnchorTargets, AnchorTemplates, CriterionWeights, DensityConfig, EeatConfig,
    EngineConfig, EngineConfigBuilder, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `EngineConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.seo-compliance.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(EngineConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_mentions_sections() {
        let schema = generate_json_schema();
        for section in ["scoring", "anchors", "density", "eeat", "locale"] {
            assert!(schema.contains(section), "missing {section}");
        }
    }
}
