use std::{ops::Deref, rc::Rc};

use icon_catalog::{
    download_file_name, families_in_set, svg_url, IconAxes, IconMetadata, IconSet, IconsResponse,
};

use crate::pipeline::IconQuery;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Shared catalog snapshot compared by identity, so reactive equality checks stay O(1).
#[derive(Debug, Clone)]
pub struct CatalogSnapshot(pub Rc<IconsResponse>);

impl PartialEq for CatalogSnapshot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CatalogSnapshot {
    type Target = IconsResponse;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready(CatalogSnapshot),
    Failed(String),
}

impl CatalogStatus {
    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub catalog: CatalogStatus,
    /// Applied (debounced) search text.
    pub search: String,
    pub icon_set: IconSet,
    pub family: String,
    pub category: Option<String>,
    pub selected_icon: Option<String>,
    pub axes: IconAxes,
    pub viewport_width: u32,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(IconSet::default().default_family())
    }
}

impl GalleryState {
    pub fn new(default_family: &str) -> Self {
        Self {
            catalog: CatalogStatus::Loading,
            search: String::new(),
            icon_set: IconSet::of_family(default_family),
            family: default_family.to_string(),
            category: None,
            selected_icon: None,
            axes: IconAxes::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    /// Inputs of the filter/sort pipeline.
    pub fn query(&self) -> IconQuery {
        IconQuery {
            search: self.search.clone(),
            family: Some(self.family.clone()),
            category: self.category.clone(),
        }
    }

    /// Families of the active icon set, in catalog order.
    pub fn set_families(&self) -> Vec<String> {
        self.catalog
            .snapshot()
            .map(|catalog| families_in_set(catalog.families(), self.icon_set))
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog
            .snapshot()
            .map(|catalog| catalog.categories().to_vec())
            .unwrap_or_default()
    }

    pub fn selected_metadata(&self) -> Option<&IconMetadata> {
        let name = self.selected_icon.as_deref()?;
        self.catalog.snapshot()?.icon(name)
    }

    /// Asset URL of `icon` in the current family and axes.
    pub fn svg_url_for(&self, icon: &IconMetadata) -> String {
        svg_url(&icon.name, &self.family, &self.axes, icon.version)
    }

    pub fn selected_svg_url(&self) -> Option<String> {
        self.selected_metadata().map(|icon| self.svg_url_for(icon))
    }

    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_icon
            .as_deref()
            .map(|name| download_file_name(name, &self.family))
    }
}
