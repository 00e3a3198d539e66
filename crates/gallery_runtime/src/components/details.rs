use icon_catalog::{IconAxes, DEFAULT_FILL, DEFAULT_GRADE, DEFAULT_OPTICAL_SIZE, DEFAULT_WEIGHT};

use super::*;
use crate::reducer::GalleryAction;

const GRADE_STEPS: [i16; 3] = [-25, 0, 200];

fn set_axes(runtime: GalleryRuntimeContext, update: impl FnOnce(&mut IconAxes)) {
    let mut axes = runtime.state.with_untracked(|s| s.axes);
    update(&mut axes);
    runtime.dispatch_action(GalleryAction::SetAxes { axes });
}

#[component]
fn AxisControls() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let axes = create_memo(move |_| runtime.state.with(|s| s.axes));

    view! {
        <fieldset data-ui-slot="axis-controls">
            <legend>"Customize"</legend>
            <label>
                "Fill "
                <input
                    type="checkbox"
                    prop:checked=move || axes.get().fill.unwrap_or(DEFAULT_FILL) == 1
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        set_axes(runtime, |axes| axes.fill = Some(u8::from(checked)));
                    }
                />
            </label>
            <label>
                "Weight "
                <input
                    type="range"
                    min="100"
                    max="700"
                    step="100"
                    prop:value=move || axes.get().weight.unwrap_or(DEFAULT_WEIGHT).to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<u16>().unwrap_or(DEFAULT_WEIGHT);
                        set_axes(runtime, |axes| axes.weight = Some(value));
                    }
                />
            </label>
            <label>
                "Grade "
                <select
                    prop:value=move || axes.get().grade.unwrap_or(DEFAULT_GRADE).to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev).parse::<i16>().unwrap_or(DEFAULT_GRADE);
                        set_axes(runtime, |axes| axes.grade = Some(value));
                    }
                >
                    {GRADE_STEPS
                        .into_iter()
                        .map(|grade| view! { <option value=grade.to_string()>{grade}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Optical size "
                <input
                    type="range"
                    min="20"
                    max="48"
                    step="4"
                    prop:value=move || {
                        axes.get().optical_size.unwrap_or(DEFAULT_OPTICAL_SIZE).to_string()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev)
                            .parse::<u8>()
                            .unwrap_or(DEFAULT_OPTICAL_SIZE);
                        set_axes(runtime, |axes| axes.optical_size = Some(value));
                    }
                />
            </label>
            <button
                type="button"
                disabled=move || axes.get().is_default()
                on:click=move |_| runtime.dispatch_action(GalleryAction::ResetAxes)
            >
                "Reset"
            </button>
        </fieldset>
    }
}

#[component]
pub(super) fn DetailsPanel() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;
    let icon = create_memo(move |_| state.with(|s| s.selected_metadata().cloned()));
    let preview_url = create_memo(move |_| state.with(|s| s.selected_svg_url()));
    let family = create_memo(move |_| state.with(|s| s.family.clone()));
    let supports_axes = create_memo(move |_| state.with(|s| s.icon_set.supports_axes()));

    view! {
        <aside data-ui-slot="details-panel" aria-label="Icon details">
            {move || {
                icon.get()
                    .map(|icon| {
                        let codepoint = format!("{:x}", icon.codepoint);
                        let categories = icon.categories.join(", ");
                        let tags = icon.tags.join(", ");
                        view! {
                            <header>
                                <h2>{icon.name.clone()}</h2>
                                <button
                                    type="button"
                                    aria-label="Close details"
                                    on:click=move |_| runtime.dispatch_action(GalleryAction::ClearSelection)
                                >
                                    "Close"
                                </button>
                            </header>
                            <img
                                data-ui-slot="icon-preview"
                                src=move || preview_url.get().unwrap_or_default()
                                alt=icon.name.clone()
                                width="96"
                                height="96"
                            />
                            <dl>
                                <dt>"Family"</dt>
                                <dd>{move || family.get()}</dd>
                                <dt>"Codepoint"</dt>
                                <dd><code>{codepoint}</code></dd>
                                <dt>"Categories"</dt>
                                <dd>{categories}</dd>
                                <dt>"Tags"</dt>
                                <dd>{tags}</dd>
                            </dl>
                        }
                    })
            }}
            <Show when=move || supports_axes.get() fallback=|| ()>
                <AxisControls />
            </Show>
            <button
                type="button"
                data-ui-slot="download"
                on:click=move |_| runtime.dispatch_action(GalleryAction::DownloadSelected)
            >
                "Download SVG"
            </button>
        </aside>
    }
}
