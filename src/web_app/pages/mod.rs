// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ListingPage: search, filter, sort and paginate the catalog
// - ProductPage: single product with gallery and reviews

pub mod listing;
pub mod product;

// Re-export page components
pub use listing::ListingPage;
pub use product::ProductPage;
