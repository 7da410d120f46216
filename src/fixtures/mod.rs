// fixtures/mod.rs - Test fixtures module
//
// Reusable catalog data for tests: a raw JSON payload in the shape the
// catalog API returns, and small builders for products and reviews so a
// test can state only the fields it cares about.

pub mod catalog;

pub use catalog::{page_of, product, review, PRODUCTS_PAYLOAD};
