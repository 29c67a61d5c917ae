//! Default configurations and presets for seo-compliance.
//!
//! Provides named locale presets and the default constants.

use super::types::{AnchorConfig, AnchorTemplates, EngineConfig};
use crate::text::LocalePatterns;

/// Default anchor tolerance band, in percentage points.
pub const DEFAULT_ANCHOR_TOLERANCE: f64 = 2.0;

/// Default exact-match share above which over-optimization is critical.
pub const DEFAULT_EXACT_CRITICAL_THRESHOLD: f64 = 30.0;

/// Default introduction window for keyword placement.
pub const DEFAULT_INTRO_WORDS: usize = 100;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named locale presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalePreset {
    /// French sites (default)
    #[default]
    French,
    /// English sites
    English,
}

impl LocalePreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fr" | "french" | "francais" | "français" => Some(Self::French),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::French => "French templates and markers, with English question and source markers",
            Self::English => "English templates and markers",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::French, Self::English]
    }
}

impl std::fmt::Display for LocalePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl EngineConfig {
    /// Create an `EngineConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: LocalePreset) -> Self {
        match preset {
            LocalePreset::French => Self::default(),
            LocalePreset::English => Self::english_preset(),
        }
    }

    /// English preset: English anchor templates and pattern tables, same
    /// targets, weights and thresholds.
    #[must_use]
    pub fn english_preset() -> Self {
        Self {
            anchors: AnchorConfig {
                templates: AnchorTemplates::english(),
                ..AnchorConfig::default()
            },
            locale: LocalePatterns::english(),
            ..Self::default()
        }
    }
}
