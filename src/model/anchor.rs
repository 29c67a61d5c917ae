//! Anchor-text types, distributions and decisions.

use crate::error::{OptionContext, ParseErrorKind, Result, SeoError};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder emitted for naked-URL anchors; the caller substitutes the link target.
pub const NAKED_URL_PLACEHOLDER: &str = "{url}";

/// Kind of anchor text used for an internal link.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AnchorType {
    /// Keyword verbatim
    Exact,
    /// Keyword with a variation
    Partial,
    /// Platform name combined with the keyword
    Branded,
    /// Generic call to action
    Generic,
    /// Raw URL shown as text
    Naked,
    /// Alt text of an image link
    Image,
}

impl AnchorType {
    /// All types in table order. Ties during selection resolve in this order.
    pub const ALL: [Self; 6] = [
        Self::Exact,
        Self::Partial,
        Self::Branded,
        Self::Generic,
        Self::Naked,
        Self::Image,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Branded => "branded",
            Self::Generic => "generic",
            Self::Naked => "naked",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for AnchorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnchorType {
    type Err = SeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "partial" => Ok(Self::Partial),
            "branded" | "brand" => Ok(Self::Branded),
            "generic" => Ok(Self::Generic),
            "naked" | "url" => Ok(Self::Naked),
            "image" | "img" => Ok(Self::Image),
            other => Err(SeoError::parse(
                "anchor type",
                ParseErrorKind::UnknownAnchorType(other.to_string()),
            )),
        }
    }
}

/// Snapshot of the anchor-type percentages already used by an article.
///
/// Types absent from the map read as 0%. The engine never mutates a
/// snapshot; callers recompute it after each accepted link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorDistribution(IndexMap<AnchorType, f64>);

impl AnchorDistribution {
    /// Create an empty distribution (every type at 0%).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the percentage for one type.
    #[must_use]
    pub fn with(mut self, anchor_type: AnchorType, percentage: f64) -> Self {
        self.0.insert(anchor_type, percentage);
        self
    }

    /// Percentage for a type, 0 when absent.
    #[must_use]
    pub fn get(&self, anchor_type: AnchorType) -> f64 {
        self.0.get(&anchor_type).copied().unwrap_or(0.0)
    }

    /// Sum of all percentages.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Build a percentage distribution from raw per-type link counts.
    ///
    /// An empty log yields an empty distribution.
    #[must_use]
    pub fn from_counts(counts: &[(AnchorType, usize)]) -> Self {
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        if total == 0 {
            return Self::new();
        }
        let mut map = IndexMap::new();
        for (anchor_type, count) in counts {
            *map.entry(*anchor_type).or_insert(0.0) += *count as f64 / total as f64 * 100.0;
        }
        Self(map)
    }

    /// Parse an inline spec such as `exact=15,partial=10,branded=20`.
    pub fn parse_spec(spec: &str) -> Result<Self> {
        let mut map = IndexMap::new();
        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, value) = pair
                .split_once('=')
                .or_else(|| pair.split_once(':'))
                .with_context_none(|| format!("distribution entry '{pair}' is not type=value"))?;
            let anchor_type: AnchorType = name.parse()?;
            let percentage: f64 = value.trim().parse().map_err(|_| {
                SeoError::invalid_value(
                    format!("distribution.{anchor_type}"),
                    format!("'{}' is not a number", value.trim()),
                )
            })?;
            map.insert(anchor_type, percentage);
        }
        Ok(Self(map))
    }

    /// Iterate over the explicitly set entries.
    pub fn iter(&self) -> impl Iterator<Item = (AnchorType, f64)> + '_ {
        self.0.iter().map(|(t, p)| (*t, *p))
    }
}

impl FromIterator<(AnchorType, f64)> for AnchorDistribution {
    fn from_iter<I: IntoIterator<Item = (AnchorType, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The balancer's choice for the next internal link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorDecision {
    /// Literal anchor text (naked anchors carry [`NAKED_URL_PLACEHOLDER`])
    pub text: String,
    /// Selected anchor type
    #[serde(rename = "type")]
    pub anchor_type: AnchorType,
}

impl AnchorDecision {
    /// Final anchor text once the link target is known.
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        self.text.replace(NAKED_URL_PLACEHOLDER, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_type_parse() {
        assert_eq!("Exact".parse::<AnchorType>().unwrap(), AnchorType::Exact);
        assert_eq!("url".parse::<AnchorType>().unwrap(), AnchorType::Naked);
        assert!("bogus".parse::<AnchorType>().is_err());
    }

    #[test]
    fn test_missing_type_reads_zero() {
        let dist = AnchorDistribution::new().with(AnchorType::Exact, 15.0);
        assert_eq!(dist.get(AnchorType::Exact), 15.0);
        assert_eq!(dist.get(AnchorType::Image), 0.0);
    }

    #[test]
    fn test_parse_spec() {
        let dist = AnchorDistribution::parse_spec("exact=35, partial=20,branded:20").unwrap();
        assert_eq!(dist.get(AnchorType::Exact), 35.0);
        assert_eq!(dist.get(AnchorType::Partial), 20.0);
        assert_eq!(dist.get(AnchorType::Branded), 20.0);
        assert_eq!(dist.total(), 75.0);

        assert!(matches!(
            AnchorDistribution::parse_spec("exact"),
            Err(SeoError::Validation(msg)) if msg.contains("'exact'")
        ));
        assert!(AnchorDistribution::parse_spec("exact=abc").is_err());
    }

    #[test]
    fn test_from_counts() {
        let dist = AnchorDistribution::from_counts(&[
            (AnchorType::Exact, 1),
            (AnchorType::Generic, 3),
        ]);
        assert!((dist.get(AnchorType::Exact) - 25.0).abs() < 1e-9);
        assert!((dist.get(AnchorType::Generic) - 75.0).abs() < 1e-9);
        assert_eq!(AnchorDistribution::from_counts(&[]).total(), 0.0);
    }

    #[test]
    fn test_distribution_json_shape() {
        let dist: AnchorDistribution =
            serde_json::from_str(r#"{"exact": 15, "naked": 10}"#).unwrap();
        assert_eq!(dist.get(AnchorType::Naked), 10.0);
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"exact":15.0,"naked":10.0}"#);
    }

    #[test]
    fn test_decision_resolve() {
        let decision = AnchorDecision {
            text: NAKED_URL_PLACEHOLDER.to_string(),
            anchor_type: AnchorType::Naked,
        };
        assert_eq!(decision.resolve("https://example.com/a"), "https://example.com/a");
    }
}
