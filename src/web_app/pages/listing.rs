// web_app/pages/listing.rs - Product listing page
//
// Wires the ListingController to the browser. The controller is the single
// owner of the listing state; this page only:
// - turns its FetchRequests into `list_products` server calls and feeds the
//   outcomes back through `apply`
// - drives the search debounce with `set_timeout`
// - mirrors the query into the URL, and reads it back on navigation

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::params::ParamsMap;
use leptos_router::NavigateOptions;

use crate::web_app::components::*;
use crate::web_app::error::StorefrontError;
use crate::web_app::listing::query_string::{
    self, CATEGORY_PARAM, PAGE_PARAM, PRICE_PARAM, SEARCH_PARAM,
};
use crate::web_app::listing::{FetchOutcome, FetchRequest, ListingController};
use crate::web_app::model::{ListingQuery, PriceOrder};
use crate::web_app::server_fns::{list_categories, list_products};

/// Read the listing parameters out of the router's query map.
fn query_from_params(params: &ParamsMap) -> ListingQuery {
    let pairs = [SEARCH_PARAM, CATEGORY_PARAM, PRICE_PARAM, PAGE_PARAM]
        .into_iter()
        .filter_map(|key| params.get_str(key).map(|value| (key, value.to_string())));
    query_string::from_pairs(pairs)
}

/// Listing URL for a query string
pub fn listing_href(query_string: &str) -> String {
    if query_string.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query_string)
    }
}

/// Adopt a query read from the URL.
///
/// Yields the committed search term to show in the search box alongside the
/// request; `None` when the URL only echoes the current query, so text still
/// waiting on the debounce is left alone.
fn adopt_url_query(
    controller: &mut ListingController,
    query: ListingQuery,
) -> Option<(String, FetchRequest)> {
    let request = controller.load_query(query)?;
    Some((controller.query().search_term.clone(), request))
}

/// Run one listing request through the server function.
async fn fetch_page(request: FetchRequest) -> FetchOutcome {
    let result = match list_products(request.params).await {
        Ok(result) => result,
        Err(e) => Err(StorefrontError::network(e.to_string())),
    };
    FetchOutcome {
        revision: request.revision,
        result,
    }
}

/// Main listing page component
///
/// Search bar, category and price controls, reset button, product grid
/// and previous/next pagination.
#[component]
pub fn ListingPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();

    let controller = RwSignal::new(ListingController::default());
    // What the search box shows; may run ahead of the committed term
    let search_text = RwSignal::new(String::new());

    // Loaded once; a failure only leaves the select with "All"
    let categories = Resource::new(
        || (),
        |_| async move {
            match list_categories().await {
                Ok(Ok(categories)) => categories,
                Ok(Err(e)) => {
                    tracing::warn!("Failed to load categories: {} ({})", e, e.detail());
                    Vec::new()
                }
                Err(e) => {
                    tracing::warn!("Failed to load categories: {}", e);
                    Vec::new()
                }
            }
        },
    );
    let category_options = Signal::derive(move || categories.get().unwrap_or_default());

    // Execute a request (if any) and write the controller's query to the URL
    let dispatch = Callback::new(move |request: Option<FetchRequest>| {
        if let Some(request) = request {
            spawn_local(async move {
                let outcome = fetch_page(request).await;
                controller.update(|c| {
                    c.apply(outcome);
                });
            });
        }
        let href = controller.with_untracked(|c| listing_href(&c.query_string()));
        navigate(&href, NavigateOptions::default());
    });

    // URL -> controller; a no-op when the URL was written by `dispatch`
    Effect::new(move |_| {
        let query = query_map.with(query_from_params);
        let adopted = controller.try_update(|c| adopt_url_query(c, query)).flatten();
        if let Some((term, request)) = adopted {
            search_text.set(term);
            spawn_local(async move {
                let outcome = fetch_page(request).await;
                controller.update(|c| {
                    c.apply(outcome);
                });
            });
        }
    });

    let on_search_input = Callback::new(move |text: String| {
        search_text.set(text.clone());
        let Some((ticket, delay)) =
            controller.try_update(|c| (c.set_search_term(text), c.search_delay()))
        else {
            return;
        };
        set_timeout(
            move || {
                // Superseded keystrokes settle to None and do nothing
                if let Some(request) = controller.try_update(|c| c.commit_search(ticket)).flatten() {
                    dispatch.run(Some(request));
                }
            },
            delay,
        );
    });

    let on_category = Callback::new(move |category: String| {
        let request = controller.try_update(|c| c.set_category(category));
        dispatch.run(request);
    });

    let on_price = Callback::new(move |order: PriceOrder| {
        let request = controller.try_update(|c| c.set_price_order(order)).flatten();
        dispatch.run(request);
    });

    let on_previous = Callback::new(move |()| {
        let request = controller.try_update(|c| c.previous_page()).flatten();
        if request.is_some() {
            dispatch.run(request);
        }
    });

    let on_next = Callback::new(move |()| {
        let request = controller.try_update(|c| c.next_page()).flatten();
        if request.is_some() {
            dispatch.run(request);
        }
    });

    let on_reset = Callback::new(move |()| {
        search_text.set(String::new());
        let request = controller.try_update(|c| c.reset_filters());
        dispatch.run(request);
    });

    let products = Signal::derive(move || controller.with(|c| c.products().to_vec()));
    let page = Signal::derive(move || controller.with(|c| c.query().page));
    let selected_category = Signal::derive(move || controller.with(|c| c.query().category.clone()));
    let selected_price = Signal::derive(move || controller.with(|c| c.query().price_order));
    let can_go_previous = Signal::derive(move || controller.with(|c| c.can_go_previous()));
    let can_go_next = Signal::derive(move || controller.with(|c| c.can_go_next()));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            // Controls
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100 space-y-4">
                <div class="flex gap-4">
                    <SearchBar value=search_text.into() on_input=on_search_input />
                </div>
                <div class="flex flex-wrap gap-4 items-center">
                    <CategorySelect
                        categories=category_options
                        selected=selected_category
                        on_change=on_category
                    />
                    <PriceSelect selected=selected_price on_change=on_price />
                    <SecondaryButton on_click=on_reset>"Reset filters"</SecondaryButton>
                </div>
            </section>

            // Results
            {move || {
                let (loading, error) = controller.with(|c| {
                    (c.is_loading(), c.error_message().map(str::to_string))
                });
                if loading {
                    view! { <Loading message="Loading products..." /> }.into_any()
                } else if let Some(error) = error {
                    view! { <ErrorDisplay error=error /> }.into_any()
                } else {
                    view! { <ProductGrid products=products /> }.into_any()
                }
            }}

            <Pagination
                page=page
                can_go_previous=can_go_previous
                can_go_next=can_go_next
                on_previous=on_previous
                on_next=on_next
            />
        </div>
    }
}
