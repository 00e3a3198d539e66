use icon_catalog::IconMetadata;

use super::*;
use crate::{reducer::GalleryAction, rows::visible_row_range};

// Used until the scroll container has been measured.
const INITIAL_VIEWPORT_HEIGHT_PX: f64 = 720.0;

/// Identity of a rendered row. Tiles are built once per key, so the key covers every icon in
/// the row; a regrouped or refiltered row always gets a fresh node.
fn row_key(index: usize, row: &[IconMetadata]) -> (usize, Vec<String>) {
    (index, row.iter().map(|icon| icon.name.clone()).collect())
}

#[component]
pub(super) fn IconGrid() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let config = runtime.host.with_value(|host| host.config().clone());
    let row_height = f64::from(config.row_height_px.max(1));
    let overscan = config.overscan_rows;

    let container = create_node_ref::<html::Section>();
    let scroll_top = create_rw_signal(0.0_f64);
    let viewport_height = create_rw_signal(INITIAL_VIEWPORT_HEIGHT_PX);

    create_effect(move |_| {
        if let Some(element) = container.get() {
            viewport_height.set(f64::from(element.client_height()));
        }
    });

    // Filter changes shrink the row list; jump back to the top so the window stays in range.
    create_effect(move |_| {
        runtime.visible_icons.track();
        scroll_top.set(0.0);
        if let Some(element) = container.get_untracked() {
            element.set_scroll_top(0);
        }
    });

    let total_rows = create_memo(move |_| runtime.rows.with(Vec::len));
    let row_window = create_memo(move |_| {
        visible_row_range(
            scroll_top.get(),
            viewport_height.get(),
            row_height,
            total_rows.get(),
            overscan,
        )
    });
    let visible_rows = create_memo(move |_| {
        let range = row_window.get();
        runtime.rows.with(|rows| {
            rows.get(range.clone())
                .unwrap_or_default()
                .iter()
                .cloned()
                .zip(range)
                .map(|(row, index)| (index, row))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section
            data-ui-slot="icon-grid"
            role="grid"
            aria-rowcount=move || total_rows.get().to_string()
            style="overflow-y:auto;"
            node_ref=container
            on:scroll=move |ev| {
                let element = event_target::<web_sys::Element>(&ev);
                scroll_top.set(f64::from(element.scroll_top()));
                viewport_height.set(f64::from(element.client_height()));
            }
        >
            <div
                data-ui-slot="icon-grid-track"
                style=move || {
                    format!(
                        "position:relative;height:{}px;",
                        total_rows.get() as f64 * row_height
                    )
                }
            >
                <For
                    each=move || visible_rows.get()
                    key=|(index, row)| row_key(*index, row)
                    children=move |(index, row): (usize, Vec<IconMetadata>)| {
                        view! {
                            <div
                                role="row"
                                aria-rowindex=(index + 1).to_string()
                                style=move || {
                                    format!(
                                        "position:absolute;left:0;right:0;top:{}px;height:{}px;display:grid;grid-template-columns:repeat({},1fr);",
                                        index as f64 * row_height,
                                        row_height,
                                        runtime.columns.get(),
                                    )
                                }
                            >
                                {row
                                    .into_iter()
                                    .map(|icon| view! { <IconTile icon=icon /> })
                                    .collect_view()}
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn IconTile(icon: IconMetadata) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;
    let name = icon.name.clone();
    let selected = {
        let name = name.clone();
        create_memo(move |_| state.with(|s| s.selected_icon.as_deref() == Some(name.as_str())))
    };
    let src = create_memo(move |_| state.with(|s| s.svg_url_for(&icon)));
    let label = name.clone();

    view! {
        <button
            type="button"
            role="gridcell"
            data-ui-slot="icon-tile"
            aria-selected=move || selected.get().to_string()
            title=name.clone()
            on:click=move |_| {
                runtime.dispatch_action(GalleryAction::SelectIcon { name: name.clone() });
            }
        >
            <img src=move || src.get() alt="" loading="lazy" width="24" height="24" />
            <span>{label}</span>
        </button>
    }
}
