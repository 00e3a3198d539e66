//! Catalog payload models and the prefix-stripping parser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One icon entry from the vendor metadata catalog.
pub struct IconMetadata {
    /// Ligature name, also used as the asset path segment.
    pub name: String,
    /// Asset revision for the static Material Icons families.
    #[serde(default)]
    pub version: u32,
    /// Vendor usage ranking; higher is more popular.
    #[serde(default)]
    pub popularity: u64,
    /// Private-use codepoint of the glyph in the icon fonts.
    #[serde(default)]
    pub codepoint: u32,
    /// Families that do not ship this icon.
    #[serde(default)]
    pub unsupported_families: Vec<String>,
    /// Category tags.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-text search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pixel sizes the static assets are published at, when the catalog lists them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes_px: Option<Vec<u32>>,
}

impl IconMetadata {
    /// Returns whether `family` ships this icon.
    pub fn supports_family(&self, family: &str) -> bool {
        !self.unsupported_families.iter().any(|f| f == family)
    }

    /// Returns whether the icon carries `category`, compared case-insensitively.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Full metadata catalog snapshot.
pub struct IconsResponse {
    /// Static asset host advertised by the catalog.
    #[serde(default)]
    pub host: String,
    /// Vendor asset URL template, e.g. `/s/i/{family}/{icon}/v{version}/{asset}`.
    #[serde(default)]
    pub asset_url_pattern: String,
    /// Font families the catalog covers.
    #[serde(default)]
    pub families: Vec<String>,
    /// Icon entries.
    #[serde(default)]
    pub icons: Vec<IconMetadata>,
    /// Category names, when the endpoint includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl IconsResponse {
    /// Icon entries in catalog order.
    pub fn icons(&self) -> &[IconMetadata] {
        &self.icons
    }

    /// Supported font families.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Category names, empty when the payload omitted them.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or(&[])
    }

    /// Looks up an icon by exact name.
    pub fn icon(&self, name: &str) -> Option<&IconMetadata> {
        self.icons.iter().find(|icon| icon.name == name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while loading the metadata catalog.
pub enum CatalogError {
    /// The transport failed to deliver the payload.
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    /// The payload contained no JSON object.
    #[error("catalog payload contains no JSON object")]
    MissingPayload,
    /// The JSON body did not match the catalog shape.
    #[error("catalog parse failed: {0}")]
    Parse(String),
}

/// Parses a raw catalog payload, discarding the anti-hijacking prefix (`)]}'`) before the first `{`.
///
/// # Errors
///
/// Returns [`CatalogError::MissingPayload`] when `raw` has no `{`, or [`CatalogError::Parse`] when
/// the remainder is not a valid catalog document.
pub fn parse_catalog(raw: &str) -> Result<IconsResponse, CatalogError> {
    let start = raw.find('{').ok_or(CatalogError::MissingPayload)?;
    serde_json::from_str(&raw[start..]).map_err(|e| CatalogError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAYLOAD: &str = r#")]}'
{"host":"fonts.gstatic.com","asset_url_pattern":"/s/i/{family}/{icon}/v{version}/{asset}",
 "families":["Material Icons","Material Symbols Outlined"],
 "icons":[{"name":"home","version":12,"popularity":9000,"codepoint":59530,
           "unsupported_families":[],"categories":["action"],"tags":["house"]},
          {"name":"search","version":3,"popularity":7000,"codepoint":59574,
           "unsupported_families":["Material Icons"],"categories":["action"],"tags":[],
           "sizes_px":[20,24]}]}"#;

    #[test]
    fn parse_catalog_strips_security_prefix() {
        let catalog = parse_catalog(PAYLOAD).expect("parse");
        assert_eq!(catalog.host, "fonts.gstatic.com");
        assert_eq!(
            catalog.families(),
            ["Material Icons", "Material Symbols Outlined"]
        );
        assert_eq!(catalog.icons().len(), 2);
        assert_eq!(catalog.icons()[1].sizes_px, Some(vec![20, 24]));
        assert_eq!(catalog.categories(), &[] as &[String]);
    }

    #[test]
    fn parse_catalog_accepts_unprefixed_json() {
        let catalog = parse_catalog(r#"{"families":[],"icons":[],"categories":["social"]}"#)
            .expect("parse");
        assert_eq!(catalog.categories(), ["social"]);
        assert!(catalog.host.is_empty());
    }

    #[test]
    fn parse_catalog_defaults_missing_icon_lists() {
        let catalog = parse_catalog(r#"{"icons":[{"name":"bolt"}]}"#).expect("parse");
        let bolt = catalog.icon("bolt").expect("bolt");
        assert!(bolt.tags.is_empty());
        assert!(bolt.supports_family("Material Icons"));
    }

    #[test]
    fn parse_catalog_rejects_payload_without_object() {
        assert_eq!(parse_catalog(")]}'\n"), Err(CatalogError::MissingPayload));
    }

    #[test]
    fn parse_catalog_reports_malformed_json() {
        let err = parse_catalog(")]}'{\"icons\": [").expect_err("should fail");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn family_and_category_membership() {
        let catalog = parse_catalog(PAYLOAD).expect("parse");
        let search = catalog.icon("search").expect("search");
        assert!(!search.supports_family("Material Icons"));
        assert!(search.supports_family("Material Symbols Outlined"));
        assert!(search.in_category("Action"));
        assert!(!search.in_category("social"));
    }
}
