//! Reading documents and anchor distributions from disk.
//!
//! HTML articles carry their own metadata: the meta description, the main
//! image (`og:image`, else the first `<img>`), the author byline, the
//! modification time and the links pointing back to the same site.

use crate::error::{ErrorContext, Result, SeoError};
use crate::model::{AnchorDistribution, ContentDocument};
use crate::text::{remove_hidden_markup, strip_markup};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("static regex"));
static FIRST_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").expect("static regex"));
static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("static regex"));
static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("static regex"));
static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>").expect("static regex"));
static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("static regex"));
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("static regex")
});

/// On-disk representation of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Serialized `ContentDocument` (camelCase fields)
    Json,
    /// Same as `Json`, in YAML
    Yaml,
    /// Raw article HTML; metadata is read from the markup
    Html,
}

impl DocumentFormat {
    /// Detect the format from the file extension; anything unknown is HTML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Html,
        }
    }
}

/// Load a document, parsing by extension.
pub fn load_document(path: &Path) -> Result<ContentDocument> {
    let raw = std::fs::read_to_string(path).map_err(|e| SeoError::io(path, e))?;
    let doc = match DocumentFormat::from_path(path) {
        DocumentFormat::Json => serde_json::from_str::<ContentDocument>(&raw)
            .with_context(|| format!("document {}", path.display()))?,
        DocumentFormat::Yaml => serde_yaml::from_str::<ContentDocument>(&raw)
            .with_context(|| format!("document {}", path.display()))?,
        DocumentFormat::Html => document_from_html(raw),
    };
    tracing::debug!(
        path = %path.display(),
        title = %doc.title,
        internal_links = doc.internal_link_count,
        "loaded document"
    );
    Ok(doc)
}

/// Build a document from raw article HTML.
#[must_use]
pub fn document_from_html(body: String) -> ContentDocument {
    let visible = remove_hidden_markup(&body);
    let title = TITLE_TAG
        .captures(&visible)
        .or_else(|| FIRST_H1.captures(&visible))
        .and_then(|c| c.get(1))
        .map(|m| strip_markup(m.as_str()))
        .unwrap_or_default();

    let metas: Vec<Attributes> = META_TAG
        .find_iter(&visible)
        .map(|m| Attributes::parse(m.as_str()))
        .collect();
    let meta = |key: &str| {
        metas
            .iter()
            .find(|attrs| {
                attrs
                    .get("name")
                    .or_else(|| attrs.get("property"))
                    .is_some_and(|name| name.eq_ignore_ascii_case(key))
            })
            .and_then(|attrs| attrs.get("content"))
            .map(strip_markup)
            .filter(|content| !content.is_empty())
    };

    let site_host = LINK_TAG
        .find_iter(&visible)
        .map(|m| Attributes::parse(m.as_str()))
        .find(|attrs| {
            attrs
                .get("rel")
                .is_some_and(|rel| rel.split_whitespace().any(|r| r.eq_ignore_ascii_case("canonical")))
        })
        .and_then(|attrs| attrs.get("href").map(str::to_string))
        .or_else(|| meta("og:url"))
        .as_deref()
        .and_then(host_of);

    let internal_links = ANCHOR_TAG
        .find_iter(&visible)
        .filter_map(|m| Attributes::parse(m.as_str()).get("href").map(str::to_string))
        .filter(|href| is_internal_link(href, site_host.as_deref()))
        .count();

    let (image_url, image_alt) = match meta("og:image") {
        Some(url) => (Some(url), meta("og:image:alt")),
        None => IMG_TAG
            .find_iter(&visible)
            .map(|m| Attributes::parse(m.as_str()))
            .find_map(|attrs| {
                let src = attrs.get("src").filter(|s| !s.trim().is_empty())?.trim().to_string();
                let alt = attrs.get("alt").map(strip_markup).filter(|a| !a.is_empty());
                Some((Some(src), alt))
            })
            .unwrap_or((None, None)),
    };

    let updated_at = meta("article:modified_time").and_then(|raw| {
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| tracing::debug!("ignoring article:modified_time '{raw}': {e}"))
            .ok()
    });

    ContentDocument {
        title,
        meta_description: meta("description"),
        image_url,
        image_alt,
        internal_link_count: internal_links,
        author_name: meta("author"),
        updated_at,
        body,
        ..ContentDocument::default()
    }
}

/// Attributes of one start tag, names lowercased.
struct Attributes(Vec<(String, String)>);

impl Attributes {
    fn parse(tag: &str) -> Self {
        Self(
            ATTRIBUTE
                .captures_iter(tag)
                .filter_map(|caps| {
                    let name = caps.get(1)?.as_str().to_ascii_lowercase();
                    let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4))?;
                    Some((name, value.as_str().to_string()))
                })
                .collect(),
        )
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Host of an absolute or protocol-relative URL, lowercased, without port
/// or a leading `www.`.
fn host_of(url: &str) -> Option<String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    let rest = ["https://", "http://", "//"]
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then(|| host.to_string())
}

/// A link points into the site when it is relative, or absolute on the
/// site's own host. Fragments and non-HTTP schemes never count.
fn is_internal_link(href: &str, site_host: Option<&str>) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    if let Some(host) = host_of(href) {
        return site_host.is_some_and(|site| site == host);
    }
    let before_path = href.split(['/', '?', '#']).next().unwrap_or_default();
    !before_path.contains(':')
}

/// Load an anchor distribution from a JSON/YAML file, or parse it as an
/// inline `exact=15,partial=10` spec when no such file exists.
pub fn load_distribution(spec_or_path: &str) -> Result<AnchorDistribution> {
    let path = Path::new(spec_or_path);
    if !path.is_file() {
        return AnchorDistribution::parse_spec(spec_or_path)
            .with_context(|| format!("distribution spec '{spec_or_path}'"));
    }
    let raw = std::fs::read_to_string(path).map_err(|e| SeoError::io(path, e))?;
    let distribution = match DocumentFormat::from_path(path) {
        DocumentFormat::Json => serde_json::from_str::<AnchorDistribution>(&raw)
            .with_context(|| format!("distribution {}", path.display()))?,
        _ => serde_yaml::from_str::<AnchorDistribution>(&raw)
            .with_context(|| format!("distribution {}", path.display()))?,
    };
    Ok(distribution)
}
