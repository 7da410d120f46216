// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Loading, ErrorDisplay, StarRating, AvailabilityBadge, PriceDisplay
// - search.rs: Listing controls (SearchBar, CategorySelect, Pagination, etc.)
// - product.rs: Product display components (ProductCard, ProductDetailView)

pub mod common;
pub mod search;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product::*;
