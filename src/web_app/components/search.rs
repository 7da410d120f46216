// web_app/components/search.rs - Listing control components
//
// These components handle the listing controls including:
// - SearchBar: text input reporting every keystroke (debounced upstream)
// - CategorySelect: category filter dropdown
// - PriceSelect: price order dropdown
// - Pagination: previous/next buttons around the current page

use leptos::prelude::*;

use crate::web_app::model::PriceOrder;

/// Search bar component
///
/// Reports every keystroke; the listing page debounces before searching.
#[component]
pub fn SearchBar(
    /// Text currently in the box
    value: Signal<String>,
    /// Called with the new text on each keystroke
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative flex-1">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="search"
                placeholder="Search products..."
                class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                       outline-none text-lg transition-all shadow-sm"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Human label for a category key: `home-decoration` -> `Home Decoration`
pub fn category_label(key: &str) -> String {
    key.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut c = word.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Category filter dropdown
///
/// The empty value means "all categories".
#[component]
pub fn CategorySelect(
    /// Category keys offered
    categories: Signal<Vec<String>>,
    /// Currently selected key
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-gray-200 shadow-sm">
            <label class="text-sm font-medium text-gray-600">"Category:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || selected.get().is_empty()>
                    "All"
                </option>
                <For
                    each=move || categories.get()
                    key=|c| c.clone()
                    children=move |category| {
                        let for_selected = category.clone();
                        view! {
                            <option
                                value=category.clone()
                                selected=move || selected.get() == for_selected
                            >
                                {category_label(&category)}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Price order dropdown
#[component]
pub fn PriceSelect(
    /// Current price order
    selected: Signal<PriceOrder>,
    on_change: Callback<PriceOrder>,
) -> impl IntoView {
    let options = [PriceOrder::None, PriceOrder::Ascending, PriceOrder::Descending];

    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-gray-200 shadow-sm">
            <label class="text-sm font-medium text-gray-600">"Price:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| {
                    on_change.run(PriceOrder::from_param(&event_target_value(&ev)));
                }
            >
                {options.into_iter().map(|order| {
                    view! {
                        <option
                            value=order.as_param()
                            selected=move || selected.get() == order
                        >
                            {order.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Pagination component
///
/// There is no total count: "Next" is enabled while the last page came back
/// full.
#[component]
pub fn Pagination(
    /// Current page (1-based)
    page: Signal<u32>,
    can_go_previous: Signal<bool>,
    can_go_next: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-4 mt-12 mb-8">
            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_previous.get()
                on:click=move |_| on_previous.run(())
            >
                "← Previous"
            </button>

            <span class="text-sm font-medium text-gray-600 bg-gray-100 px-4 py-2 rounded-lg">
                "Page " {move || page.get()}
            </span>

            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next →"
            </button>
        </div>
    }
}
