//! Static asset URL scheme for rendered icon SVGs.
//!
//! Material Symbols assets are addressed by variable-font axes under
//! `/s/i/short-term/release/<folder>/<icon>/<axes>/<opsz>px.svg`, where the axes segment lists the
//! non-default axes in the fixed order weight, grade, fill (the asset host rejects other orders)
//! and collapses to `default` when every axis is at its default. Material Icons assets are
//! versioned instead: `/s/i/<folder>/<icon>/v<version>/24px.svg`.

use serde::{Deserialize, Serialize};

/// Asset host every URL is built against.
pub const ASSET_HOST: &str = "https://fonts.gstatic.com";
/// Family selected when nothing else has been chosen.
pub const DEFAULT_FAMILY: &str = "Material Icons";
/// Default `wght` axis value.
pub const DEFAULT_WEIGHT: u16 = 400;
/// Default `FILL` axis value.
pub const DEFAULT_FILL: u8 = 0;
/// Default `GRAD` axis value.
pub const DEFAULT_GRADE: i16 = 0;
/// Default `opsz` axis value, also the pixel size of the rendered asset.
pub const DEFAULT_OPTICAL_SIZE: u8 = 24;

const SYMBOLS_PREFIX: &str = "Material Symbols";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Optional variable-font axis overrides; `None` means the axis default.
pub struct IconAxes {
    /// Stroke weight (`wght`, 100..=700).
    pub weight: Option<u16>,
    /// Fill (`FILL`, 0 or 1).
    pub fill: Option<u8>,
    /// Grade (`GRAD`, -25..=200).
    pub grade: Option<i16>,
    /// Optical size (`opsz`, 20..=48).
    pub optical_size: Option<u8>,
}

impl IconAxes {
    /// Returns the `<axes>` path segment, e.g. `wght700grad200fill1` or `default`.
    pub fn path_segment(&self) -> String {
        let mut segment = String::new();
        if let Some(weight) = self.weight.filter(|w| *w != DEFAULT_WEIGHT) {
            segment.push_str(&format!("wght{weight}"));
        }
        if let Some(grade) = self.grade.filter(|g| *g != DEFAULT_GRADE) {
            segment.push_str(&format!("grad{grade}"));
        }
        if let Some(fill) = self.fill.filter(|f| *f != DEFAULT_FILL) {
            segment.push_str(&format!("fill{fill}"));
        }
        if segment.is_empty() {
            segment.push_str("default");
        }
        segment
    }

    /// Optical size to request, falling back to the default for unset or zero values.
    pub fn optical_size_px(&self) -> u8 {
        self.optical_size
            .filter(|size| *size != 0)
            .unwrap_or(DEFAULT_OPTICAL_SIZE)
    }

    /// Clamps every set axis into the range the asset host serves.
    pub fn clamped(self) -> Self {
        Self {
            weight: self.weight.map(|w| w.clamp(100, 700)),
            fill: self.fill.map(|f| f.min(1)),
            grade: self.grade.map(|g| g.clamp(-25, 200)),
            optical_size: self.optical_size.map(|o| o.clamp(20, 48)),
        }
    }

    /// Returns whether every axis is at its default.
    pub fn is_default(&self) -> bool {
        self.path_segment() == "default" && self.optical_size_px() == DEFAULT_OPTICAL_SIZE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Group of families sharing one asset delivery scheme.
pub enum IconSet {
    /// Static, versioned Material Icons families.
    #[default]
    MaterialIcons,
    /// Variable-font Material Symbols families.
    MaterialSymbols,
}

impl IconSet {
    /// Every set in display order.
    pub const ALL: [Self; 2] = [Self::MaterialIcons, Self::MaterialSymbols];

    /// Set a family name belongs to.
    pub fn of_family(family: &str) -> Self {
        if family.starts_with(SYMBOLS_PREFIX) {
            Self::MaterialSymbols
        } else {
            Self::MaterialIcons
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::MaterialIcons => "Material Icons",
            Self::MaterialSymbols => "Material Symbols",
        }
    }

    /// Family selected when switching to this set before the catalog names its families.
    pub const fn default_family(self) -> &'static str {
        match self {
            Self::MaterialIcons => DEFAULT_FAMILY,
            Self::MaterialSymbols => "Material Symbols Outlined",
        }
    }

    /// Whether the set accepts axis overrides.
    pub const fn supports_axes(self) -> bool {
        matches!(self, Self::MaterialSymbols)
    }
}

/// Filters `families` down to the members of `set`, preserving order.
pub fn families_in_set(families: &[String], set: IconSet) -> Vec<String> {
    families
        .iter()
        .filter(|family| IconSet::of_family(family) == set)
        .cloned()
        .collect()
}

fn symbols_folder(family: &str) -> &'static str {
    match family {
        "Material Symbols Rounded" => "materialsymbolsrounded",
        "Material Symbols Sharp" => "materialsymbolssharp",
        _ => "materialsymbolsoutlined",
    }
}

fn icons_folder(family: &str) -> &'static str {
    match family {
        "Material Icons Outlined" => "materialiconsoutlined",
        "Material Icons Round" => "materialiconsround",
        "Material Icons Sharp" => "materialiconssharp",
        "Material Icons Two Tone" => "materialiconstwotone",
        _ => "materialicons",
    }
}

/// Builds the static asset URL for `icon` rendered in `family`.
///
/// `axes` only apply to Material Symbols families; `version` only to Material Icons families.
pub fn svg_url(icon: &str, family: &str, axes: &IconAxes, version: u32) -> String {
    match IconSet::of_family(family) {
        IconSet::MaterialSymbols => format!(
            "{ASSET_HOST}/s/i/short-term/release/{}/{icon}/{}/{}px.svg",
            symbols_folder(family),
            axes.path_segment(),
            axes.optical_size_px()
        ),
        IconSet::MaterialIcons => format!(
            "{ASSET_HOST}/s/i/{}/{icon}/v{version}/24px.svg",
            icons_folder(family)
        ),
    }
}

/// Suggested file name for a downloaded asset: `<icon>_<family_snake_case>.svg`.
///
/// Every whitespace run, including leading or trailing ones, becomes a single `_`.
pub fn download_file_name(icon: &str, family: &str) -> String {
    let mut snake = String::with_capacity(family.len());
    let mut in_space = false;
    for ch in family.chars() {
        if ch.is_whitespace() {
            if !in_space {
                snake.push('_');
            }
            in_space = true;
        } else {
            snake.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    format!("{icon}_{snake}.svg")
}
