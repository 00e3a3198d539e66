//! Reducer actions, side-effect intents, and transition logic for the gallery view state.

use std::rc::Rc;

use icon_catalog::{IconAxes, IconSet, IconsResponse};
use thiserror::Error;

use crate::model::{CatalogSnapshot, CatalogStatus, GalleryState};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_gallery`] to mutate [`GalleryState`].
pub enum GalleryAction {
    /// The metadata catalog finished loading.
    CatalogLoaded {
        /// Shared catalog snapshot.
        catalog: Rc<IconsResponse>,
    },
    /// The metadata catalog could not be loaded.
    CatalogFailed {
        /// Display message for the failure.
        message: String,
    },
    /// Apply debounced search text.
    SetSearch {
        /// Raw text from the search box.
        text: String,
    },
    /// Switch between Material Icons and Material Symbols.
    SetIconSet {
        /// Target set.
        icon_set: IconSet,
    },
    /// Select a font family.
    SetFamily {
        /// Family name as listed by the catalog.
        family: String,
    },
    /// Restrict the grid to one category, or clear the restriction.
    SetCategory {
        /// Category name; `None` or empty clears the filter.
        category: Option<String>,
    },
    /// Select an icon for the details panel.
    SelectIcon {
        /// Icon name.
        name: String,
    },
    /// Close the details panel.
    ClearSelection,
    /// Replace the variable-font axis overrides.
    SetAxes {
        /// New overrides; clamped to served ranges.
        axes: IconAxes,
    },
    /// Restore every axis to its default.
    ResetAxes,
    /// Record the current viewport width.
    SetViewportWidth {
        /// Width in CSS pixels.
        width: u32,
    },
    /// Download the selected icon as SVG.
    DownloadSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_gallery`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Save the asset at `url` as `file_name`, opening the URL directly on failure.
    DownloadSvg {
        /// Asset URL.
        url: String,
        /// Suggested file name.
        file_name: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current state.
pub enum ReducerError {
    /// The action needs the catalog, which has not loaded.
    #[error("icon catalog is not loaded")]
    CatalogNotLoaded,
    /// The family is not offered by the catalog.
    #[error("unknown icon family `{0}`")]
    UnknownFamily(String),
    /// No icon by that name exists in the catalog.
    #[error("icon `{0}` not found")]
    IconNotFound(String),
    /// A download was requested with nothing selected.
    #[error("no icon selected")]
    NoIconSelected,
}

/// Applies a [`GalleryAction`] to the gallery state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action references a family or icon the catalog does not
/// contain, or needs a selection or catalog that is not present. State is left unchanged on error.
pub fn reduce_gallery(
    state: &mut GalleryState,
    action: GalleryAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        GalleryAction::CatalogLoaded { catalog } => {
            state.catalog = CatalogStatus::Ready(CatalogSnapshot(catalog));
            reconcile_family(state);
            drop_unavailable_selection(state);
        }
        GalleryAction::CatalogFailed { message } => {
            state.catalog = CatalogStatus::Failed(message);
        }
        GalleryAction::SetSearch { text } => {
            if state.search != text {
                state.search = text;
            }
        }
        GalleryAction::SetIconSet { icon_set } => {
            if state.icon_set != icon_set {
                state.icon_set = icon_set;
                state.family = state
                    .set_families()
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| icon_set.default_family().to_string());
                drop_unavailable_selection(state);
            }
        }
        GalleryAction::SetFamily { family } => {
            if let Some(catalog) = state.catalog.snapshot() {
                if !catalog.families().contains(&family) {
                    return Err(ReducerError::UnknownFamily(family));
                }
            }
            state.icon_set = IconSet::of_family(&family);
            state.family = family;
            drop_unavailable_selection(state);
        }
        GalleryAction::SetCategory { category } => {
            state.category = category.filter(|c| !c.trim().is_empty());
        }
        GalleryAction::SelectIcon { name } => {
            let catalog = state
                .catalog
                .snapshot()
                .ok_or(ReducerError::CatalogNotLoaded)?;
            if catalog.icon(&name).is_none() {
                return Err(ReducerError::IconNotFound(name));
            }
            state.selected_icon = Some(name);
        }
        GalleryAction::ClearSelection => {
            state.selected_icon = None;
        }
        GalleryAction::SetAxes { axes } => {
            state.axes = axes.clamped();
        }
        GalleryAction::ResetAxes => {
            state.axes = IconAxes::default();
        }
        GalleryAction::SetViewportWidth { width } => {
            state.viewport_width = width;
        }
        GalleryAction::DownloadSelected => {
            let name = state
                .selected_icon
                .clone()
                .ok_or(ReducerError::NoIconSelected)?;
            if state.catalog.snapshot().is_none() {
                return Err(ReducerError::CatalogNotLoaded);
            }
            let (Some(url), Some(file_name)) =
                (state.selected_svg_url(), state.selected_file_name())
            else {
                return Err(ReducerError::IconNotFound(name));
            };
            effects.push(RuntimeEffect::DownloadSvg { url, file_name });
        }
    }
    Ok(effects)
}

/// Keeps the selected family when the catalog offers it, otherwise picks the first family of the
/// active set (or of the whole catalog when the set is empty).
fn reconcile_family(state: &mut GalleryState) {
    let Some(catalog) = state.catalog.snapshot() else {
        return;
    };
    let families = catalog.families();
    if families.is_empty() || families.contains(&state.family) {
        return;
    }
    let replacement = state
        .set_families()
        .into_iter()
        .next()
        .unwrap_or_else(|| families[0].clone());
    state.icon_set = IconSet::of_family(&replacement);
    state.family = replacement;
}

fn drop_unavailable_selection(state: &mut GalleryState) {
    let available = match state.selected_icon.as_deref() {
        None => return,
        Some(name) => match state.catalog.snapshot() {
            Some(catalog) => catalog
                .icon(name)
                .is_some_and(|icon| icon.supports_family(&state.family)),
            None => true,
        },
    };
    if !available {
        state.selected_icon = None;
    }
}

#[cfg(test)]
mod tests {
    use icon_catalog::parse_catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    const CATALOG: &str = r#")]}'
{"families":["Material Icons","Material Icons Round","Material Symbols Outlined","Material Symbols Rounded"],
 "icons":[
   {"name":"home","version":16,"popularity":100,"tags":["house"]},
   {"name":"robot","version":1,"popularity":5,"unsupported_families":["Material Icons","Material Icons Round"]}
 ],
 "categories":["action","device"]}"#;

    fn catalog() -> Rc<IconsResponse> {
        Rc::new(parse_catalog(CATALOG).expect("parse"))
    }

    fn loaded_state() -> GalleryState {
        let mut state = GalleryState::default();
        reduce_gallery(
            &mut state,
            GalleryAction::CatalogLoaded { catalog: catalog() },
        )
        .expect("load");
        state
    }

    #[test]
    fn catalog_load_and_failure_update_status() {
        let state = loaded_state();
        assert!(state.catalog.snapshot().is_some());

        let mut failed = GalleryState::default();
        reduce_gallery(
            &mut failed,
            GalleryAction::CatalogFailed {
                message: "offline".to_string(),
            },
        )
        .expect("fail");
        assert_eq!(failed.catalog.error(), Some("offline"));
    }

    #[test]
    fn catalog_load_replaces_unknown_default_family() {
        let mut state = GalleryState::new("Material Symbols Sharp");
        reduce_gallery(
            &mut state,
            GalleryAction::CatalogLoaded { catalog: catalog() },
        )
        .expect("load");
        assert_eq!(state.family, "Material Symbols Outlined");
        assert_eq!(state.icon_set, IconSet::MaterialSymbols);
    }

    #[test]
    fn switching_icon_set_selects_first_family_of_set() {
        let mut state = loaded_state();
        reduce_gallery(
            &mut state,
            GalleryAction::SetIconSet {
                icon_set: IconSet::MaterialSymbols,
            },
        )
        .expect("set");
        assert_eq!(state.family, "Material Symbols Outlined");

        let mut offline = GalleryState::default();
        reduce_gallery(
            &mut offline,
            GalleryAction::SetIconSet {
                icon_set: IconSet::MaterialSymbols,
            },
        )
        .expect("set");
        assert_eq!(offline.family, "Material Symbols Outlined");
    }

    #[test]
    fn set_family_validates_against_catalog() {
        let mut state = loaded_state();
        let err = reduce_gallery(
            &mut state,
            GalleryAction::SetFamily {
                family: "Comic Sans".to_string(),
            },
        )
        .expect_err("unknown family");
        assert_eq!(err, ReducerError::UnknownFamily("Comic Sans".to_string()));
        assert_eq!(state.family, "Material Icons");

        reduce_gallery(
            &mut state,
            GalleryAction::SetFamily {
                family: "Material Symbols Rounded".to_string(),
            },
        )
        .expect("family");
        assert_eq!(state.icon_set, IconSet::MaterialSymbols);
    }

    #[test]
    fn changing_family_drops_unsupported_selection() {
        let mut state = loaded_state();
        reduce_gallery(
            &mut state,
            GalleryAction::SetIconSet {
                icon_set: IconSet::MaterialSymbols,
            },
        )
        .expect("set");
        reduce_gallery(
            &mut state,
            GalleryAction::SelectIcon {
                name: "robot".to_string(),
            },
        )
        .expect("select");
        reduce_gallery(
            &mut state,
            GalleryAction::SetFamily {
                family: "Material Icons Round".to_string(),
            },
        )
        .expect("family");
        assert_eq!(state.selected_icon, None);
    }

    #[test]
    fn select_icon_requires_catalog_and_known_name() {
        let mut empty = GalleryState::default();
        assert_eq!(
            reduce_gallery(
                &mut empty,
                GalleryAction::SelectIcon {
                    name: "home".to_string()
                }
            ),
            Err(ReducerError::CatalogNotLoaded)
        );

        let mut state = loaded_state();
        assert_eq!(
            reduce_gallery(
                &mut state,
                GalleryAction::SelectIcon {
                    name: "nope".to_string()
                }
            ),
            Err(ReducerError::IconNotFound("nope".to_string()))
        );
        reduce_gallery(
            &mut state,
            GalleryAction::SelectIcon {
                name: "home".to_string(),
            },
        )
        .expect("select");
        assert_eq!(state.selected_icon.as_deref(), Some("home"));
        reduce_gallery(&mut state, GalleryAction::ClearSelection).expect("clear");
        assert_eq!(state.selected_icon, None);
    }

    #[test]
    fn blank_category_clears_filter() {
        let mut state = loaded_state();
        reduce_gallery(
            &mut state,
            GalleryAction::SetCategory {
                category: Some("device".to_string()),
            },
        )
        .expect("category");
        assert_eq!(state.category.as_deref(), Some("device"));
        reduce_gallery(
            &mut state,
            GalleryAction::SetCategory {
                category: Some("  ".to_string()),
            },
        )
        .expect("category");
        assert_eq!(state.category, None);
    }

    #[test]
    fn axes_are_clamped_and_resettable() {
        let mut state = loaded_state();
        reduce_gallery(
            &mut state,
            GalleryAction::SetAxes {
                axes: IconAxes {
                    weight: Some(1000),
                    ..IconAxes::default()
                },
            },
        )
        .expect("axes");
        assert_eq!(state.axes.weight, Some(700));
        reduce_gallery(&mut state, GalleryAction::ResetAxes).expect("reset");
        assert_eq!(state.axes, IconAxes::default());
    }

    #[test]
    fn download_emits_effect_for_selected_icon() {
        let mut state = loaded_state();
        assert_eq!(
            reduce_gallery(&mut state, GalleryAction::DownloadSelected),
            Err(ReducerError::NoIconSelected)
        );

        reduce_gallery(
            &mut state,
            GalleryAction::SelectIcon {
                name: "home".to_string(),
            },
        )
        .expect("select");
        let effects =
            reduce_gallery(&mut state, GalleryAction::DownloadSelected).expect("download");
        assert_eq!(
            effects,
            vec![RuntimeEffect::DownloadSvg {
                url: "https://fonts.gstatic.com/s/i/materialicons/home/v16/24px.svg".to_string(),
                file_name: "home_material_icons.svg".to_string(),
            }]
        );
    }

    #[test]
    fn download_uses_symbols_axes() {
        let mut state = loaded_state();
        for action in [
            GalleryAction::SetIconSet {
                icon_set: IconSet::MaterialSymbols,
            },
            GalleryAction::SelectIcon {
                name: "robot".to_string(),
            },
            GalleryAction::SetAxes {
                axes: IconAxes {
                    weight: Some(700),
                    fill: Some(1),
                    grade: Some(200),
                    optical_size: Some(48),
                },
            },
        ] {
            reduce_gallery(&mut state, action).expect("action");
        }
        let effects =
            reduce_gallery(&mut state, GalleryAction::DownloadSelected).expect("download");
        assert_eq!(
            effects,
            vec![RuntimeEffect::DownloadSvg {
                url: "https://fonts.gstatic.com/s/i/short-term/release/materialsymbolsoutlined/robot/wght700grad200fill1/48px.svg".to_string(),
                file_name: "robot_material_symbols_outlined.svg".to_string(),
            }]
        );
    }

    #[test]
    fn search_and_viewport_updates() {
        let mut state = loaded_state();
        reduce_gallery(
            &mut state,
            GalleryAction::SetSearch {
                text: "house".to_string(),
            },
        )
        .expect("search");
        reduce_gallery(&mut state, GalleryAction::SetViewportWidth { width: 600 })
            .expect("viewport");
        assert_eq!(state.search, "house");
        assert_eq!(state.viewport_width, 600);
    }

    #[test]
    fn repeated_search_text_is_a_no_op() {
        let mut state = loaded_state();
        let search = || GalleryAction::SetSearch {
            text: "house".to_string(),
        };
        reduce_gallery(&mut state, search()).expect("first search");
        let before = state.clone();

        let effects = reduce_gallery(&mut state, search()).expect("repeated search");

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }
}
