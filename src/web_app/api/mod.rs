// web_app/api/mod.rs - Catalog API access
//
// - source: the ProductSource port and request URL builders
// - payload: shape validation of catalog responses
// - http: reqwest implementation (native only)
// - catalog: process-wide catalog client used by server functions (SSR only)

pub mod payload;
pub mod source;

#[cfg(feature = "native")]
pub mod http;

#[cfg(feature = "ssr")]
pub mod catalog;

pub use source::{ProductSource, ProductsRequest};

#[cfg(feature = "native")]
pub use http::HttpProductSource;
