// web_app/api/source.rs - Catalog API port and request URL construction
//
// The listing and detail logic only ever talk to `ProductSource`; the
// HTTP implementation lives in `api::http` and tests use in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::web_app::error::StorefrontResult;
use crate::web_app::model::{PriceOrder, Product, ProductId};

/// Parameters of one `GET /products` call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsRequest {
    pub limit: u32,
    pub skip: u32,
    pub search: Option<String>,
    pub category: Option<String>,
    /// Server-side price ordering; `None` leaves the catalog's order alone
    pub price_order: Option<PriceOrder>,
}

impl ProductsRequest {
    /// Plain page request without filters
    pub fn page(limit: u32, skip: u32) -> Self {
        Self {
            limit,
            skip,
            search: None,
            category: None,
            price_order: None,
        }
    }
}

/// Port trait for the external product catalog.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch one page of products.
    ///
    /// An empty page is `Ok(vec![])`; deciding what that means is up to
    /// the caller.
    async fn list_products(&self, request: &ProductsRequest) -> StorefrontResult<Vec<Product>>;

    /// Fetch a single product; `NotFound` when the catalog has no such id.
    async fn get_product(&self, id: ProductId) -> StorefrontResult<Product>;

    /// Category keys usable as the `category` filter.
    async fn list_categories(&self) -> StorefrontResult<Vec<String>>;
}

/// Append a path segment to the base URL, keeping any existing base path.
fn with_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}/{}", base_path, path));
    url.set_query(None);
    url
}

/// Build `GET /products?limit=..&skip=..[&search][&category][&sortBy&order]`.
pub fn build_products_url(base: &Url, request: &ProductsRequest) -> Url {
    let mut url = with_path(base, "products");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("limit", &request.limit.to_string());
        pairs.append_pair("skip", &request.skip.to_string());

        if let Some(search) = request.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.append_pair("search", search);
        }
        if let Some(category) = request.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.append_pair("category", category);
        }
        if let Some(order @ (PriceOrder::Ascending | PriceOrder::Descending)) = request.price_order {
            pairs.append_pair("sortBy", "price");
            pairs.append_pair("order", order.as_param());
        }
    }
    url
}

/// Build `GET /products/{id}`.
pub fn build_product_url(base: &Url, id: ProductId) -> Url {
    with_path(base, &format!("products/{}", id))
}

/// Build `GET /categories`.
pub fn build_categories_url(base: &Url) -> Url {
    with_path(base, "categories")
}
