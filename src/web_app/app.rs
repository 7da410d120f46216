// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the navigation bar, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{ListingPage, ProductPage};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Navigation bar
/// - Router with the listing and product routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="SwiftCart" />
        <Meta name="description" content="Browse, search and filter the SwiftCart catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/swiftcart.css" />

        <Router>
            <NavBar />
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ListingPage />
                    <Route path=path!("/products/:id") view=ProductPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Top navigation bar
///
/// Wishlist, cart and login are placeholders; only the brand link navigates.
#[component]
fn NavBar() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="text-xl font-bold text-blue-600">"SwiftCart"</a>
                <nav class="flex items-center gap-6 text-sm text-gray-600">
                    <span>"Wishlist"</span>
                    <span>"Cart"</span>
                    <span>"Login"</span>
                </nav>
            </div>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to products"
                </a>
            </div>
        </div>
    }
}
