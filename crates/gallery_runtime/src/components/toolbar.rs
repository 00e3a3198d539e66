use icon_catalog::IconSet;

use super::*;
use crate::reducer::GalleryAction;

#[component]
pub(super) fn GalleryToolbar() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;
    let search_input = runtime.search_input;

    let icon_set = create_memo(move |_| state.with(|s| s.icon_set));
    let family = create_memo(move |_| state.with(|s| s.family.clone()));
    let families = create_memo(move |_| state.with(|s| s.set_families()));
    let category = create_memo(move |_| state.with(|s| s.category.clone().unwrap_or_default()));
    let categories = create_memo(move |_| state.with(|s| s.categories()));
    let visible_count = create_memo(move |_| runtime.visible_icons.with(Vec::len));

    view! {
        <header data-ui-slot="gallery-toolbar" role="toolbar" aria-label="Icon filters">
            <input
                type="search"
                data-ui-slot="search"
                placeholder="Search icons"
                aria-label="Search icons"
                prop:value=move || search_input.get()
                on:input=move |ev| search_input.set(event_target_value(&ev))
            />

            <div data-ui-slot="icon-set-toggle" role="group" aria-label="Icon set">
                {IconSet::ALL
                    .into_iter()
                    .map(|set| {
                        view! {
                            <button
                                type="button"
                                aria-pressed=move || (icon_set.get() == set).to_string()
                                on:click=move |_| {
                                    runtime.dispatch_action(GalleryAction::SetIconSet { icon_set: set });
                                }
                            >
                                {set.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <label>
                "Style "
                <select
                    prop:value=move || family.get()
                    on:change=move |ev| {
                        runtime.dispatch_action(GalleryAction::SetFamily {
                            family: event_target_value(&ev),
                        });
                    }
                >
                    <For
                        each=move || families.get()
                        key=|family| family.clone()
                        children=move |option: String| {
                            let current = option.clone();
                            view! {
                                <option value=option.clone() selected=move || family.get() == current>
                                    {option}
                                </option>
                            }
                        }
                    />
                </select>
            </label>

            <label>
                "Category "
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        runtime.dispatch_action(GalleryAction::SetCategory {
                            category: (!value.is_empty()).then_some(value),
                        });
                    }
                >
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |option: String| {
                            let current = option.clone();
                            view! {
                                <option value=option.clone() selected=move || category.get() == current>
                                    {option}
                                </option>
                            }
                        }
                    />
                </select>
            </label>

            <span data-ui-slot="result-count" aria-live="polite">
                {move || match visible_count.get() {
                    1 => "1 icon".to_string(),
                    count => format!("{count} icons"),
                }}
            </span>
        </header>
    }
}
