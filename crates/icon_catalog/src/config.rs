//! Gallery configuration.

use serde::{Deserialize, Serialize};

use crate::svg_url::DEFAULT_FAMILY;

/// Metadata endpoint, relative so the dev server can proxy it around CORS.
pub const DEFAULT_METADATA_URL: &str = "/metadata/icons?key=material_symbols&incomplete=true";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for catalog access and gallery rendering; every field has a default.
pub struct GalleryConfig {
    /// Endpoint the catalog payload is fetched from.
    pub metadata_url: String,
    /// Family selected at startup.
    pub default_family: String,
    /// Quiet period before search input is applied.
    pub search_debounce_ms: u32,
    /// Height of one virtualized grid row.
    pub row_height_px: u32,
    /// Extra rows rendered above and below the viewport.
    pub overscan_rows: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            default_family: DEFAULT_FAMILY.to_string(),
            search_debounce_ms: 300,
            row_height_px: 112,
            overscan_rows: 2,
        }
    }
}

impl GalleryConfig {
    /// Parses a (possibly partial) JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a valid JSON object for this shape.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if !value.is_object() {
            return Err("gallery config must be a JSON object".to_string());
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Replaces the metadata endpoint.
    pub fn with_metadata_url(mut self, metadata_url: impl Into<String>) -> Self {
        self.metadata_url = metadata_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GalleryConfig::from_json_str(r#"{"search_debounce_ms": 150}"#).expect("parse");
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.metadata_url, DEFAULT_METADATA_URL);
        assert_eq!(config.default_family, "Material Icons");
    }

    #[test]
    fn metadata_url_override() {
        let config = GalleryConfig::default().with_metadata_url("https://example.test/icons");
        assert_eq!(config.metadata_url, "https://example.test/icons");
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(GalleryConfig::from_json_str("[]").is_err());
        assert!(GalleryConfig::from_json_str("42").is_err());
        assert!(GalleryConfig::from_json_str("{").is_err());
        assert!(GalleryConfig::from_json_str(r#"{"row_height_px": "tall"}"#).is_err());
        assert_eq!(
            GalleryConfig::from_json_str("{}").expect("empty object"),
            GalleryConfig::default()
        );
    }
}
