// web_app/components/common.rs - Shared storefront widgets
//
// Stateless pieces used by both pages: spinner, error banner, stars,
// stock badge, price.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::model::Availability;
use crate::web_app::rating::star_breakdown;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Shows a user-facing catalog message such as "Product does not exist".
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-700 font-medium">{error}</p>
        </div>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Star rating display component
///
/// Draws five stars: full, at most one half, then empty.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Whether to show the numeric value
    #[prop(default = true)]
    show_value: bool,
) -> impl IntoView {
    let stars = star_breakdown(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..stars.full).map(|_| view! {
                <span class="text-yellow-400 text-lg">"★"</span>
            }).collect_view()}

            {stars.half.then(|| view! {
                <div class="relative inline-block text-lg">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..stars.empty).map(|_| view! {
                <span class="text-gray-200 text-lg">"★"</span>
            }).collect_view()}

            <Show when=move || show_value>
                <span class="ml-2 text-sm font-bold text-gray-700 bg-gray-100 px-1.5 py-0.5 rounded">
                    {format!("{:.1}", rating)}
                </span>
            </Show>
        </div>
    }
}

/// Badge classes for a stock state
pub fn availability_class(availability: Availability) -> &'static str {
    match availability {
        Availability::InStock => "bg-green-100 text-green-800 border-green-200",
        Availability::OutOfStock => "bg-red-100 text-red-800 border-red-200",
    }
}

/// "In Stock" / "Out of Stock" badge
#[component]
pub fn AvailabilityBadge(availability: Availability) -> impl IntoView {
    view! {
        <span class=format!(
            "px-2.5 py-0.5 text-xs font-medium rounded-full border {}",
            availability_class(availability),
        )>
            {availability.to_string()}
        </span>
    }
}

/// Price with two decimals and a dollar sign
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

/// Price display component
///
/// Formats and displays a price value.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-bold text-blue-600"
    } else {
        "text-gray-900 font-semibold"
    };

    view! {
        <span class=class>
            {format_price(price)}
        </span>
    }
}
