// web_app/mod.rs - Root module for the storefront
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - error.rs, config.rs: error taxonomy and environment configuration
// - api/: ProductSource port, payload validation, HTTP client
// - listing/: search/filter/sort/page state machine, debounce, URL codec
// - detail.rs, rating.rs, carousel.rs: product page and display helpers
// - server_fns.rs: Server function declarations (both client and server)
// - components/, pages/, app.rs: Leptos UI (both SSR and hydrate)

pub mod model;
pub mod error;
pub mod config;
pub mod api;
pub mod listing;
pub mod detail;
pub mod rating;
pub mod carousel;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
