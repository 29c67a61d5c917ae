//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::LocalePreset;
use super::types::{AnchorTemplates, EngineConfig};
use crate::text::LocalePatterns;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".seo-compliance.yaml",
    ".seo-compliance.yml",
    "seo-compliance.yaml",
    "seo-compliance.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/seo-compliance/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        candidates.push(git_root);
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("seo-compliance"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home);
    }

    candidates.iter().find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `EngineConfig` from a YAML file.
///
/// Sections missing from the file keep their defaults.
pub fn load_config_file(path: &Path) -> Result<EngineConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: EngineConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (EngineConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (EngineConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (EngineConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Preset Overrides
// ============================================================================

impl EngineConfig {
    /// Replace the language-dependent parts (pattern table and anchor
    /// templates) with a preset's, keeping numeric settings untouched.
    pub fn apply_locale(&mut self, preset: LocalePreset) {
        let (locale, templates) = match preset {
            LocalePreset::French => (LocalePatterns::french(), AnchorTemplates::french()),
            LocalePreset::English => (LocalePatterns::english(), AnchorTemplates::english()),
        };
        self.locale = locale;
        self.anchors.templates = templates;
    }

    /// Load from file, then apply an explicit locale override.
    #[must_use]
    pub fn from_file_with_locale(
        config_path: Option<&Path>,
        locale: Option<LocalePreset>,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        if let Some(preset) = locale {
            config.apply_locale(preset);
        }
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = EngineConfig::default();
    format!(
        r"# SEO Compliance Configuration
# Place this file at .seo-compliance.yaml in your project root or ~/.config/seo-compliance/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a short commented example covering the numeric settings.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# SEO Compliance Configuration File
# ==================================
#
# Place it at:
#   - .seo-compliance.yaml in your project root
#   - ~/.config/seo-compliance/seo-compliance.yaml for global config
#
# Omitted sections keep their defaults. Use `seo-compliance config show`
# to print the full effective configuration, locale tables included.

# Criterion weights (must sum to 100)
scoring:
  weights:
    title: 15
    metaDescription: 10
    length: 15
    headings: 10
    keywords: 15
    internalLinks: 10
    images: 10
    readability: 15

# Anchor-text balancing
anchors:
  # Target share per type (must sum to 100)
  targets:
    exact: 15
    partial: 25
    branded: 20
    generic: 20
    naked: 10
    image: 10
  # Allowed deviation in percentage points
  tolerance: 2.0
  # Deviation reported as high severity
  high_severity_gap: 10.0
  # Exact-match share that is always critical
  exact_critical_threshold: 30.0

# Keyword density band (percent)
density:
  min_optimal: 1.0
  max_optimal: 2.5
  intro_words: 100

# E-E-A-T penalties
eeat:
  experience_penalty: 15
  statistics_penalty: 20
  min_statistics: 3
  author_penalty: 15
  sources_penalty: 20
  min_external_links: 3
  freshness_penalty: 15
  freshness_months: 12
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
