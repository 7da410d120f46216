// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: a call into the global catalog client
// - On client: a stub that makes HTTP POST requests to the server
//
// The outer ServerFnError covers transport problems between browser and
// server; the inner StorefrontError is the catalog outcome the listing and
// detail state machines react to.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::api::ProductsRequest;
use crate::web_app::error::StorefrontError;
use crate::web_app::model::{Product, ProductId};

#[cfg(feature = "ssr")]
fn catalog() -> Result<std::sync::Arc<dyn crate::web_app::api::ProductSource>, ServerFnError> {
    use crate::web_app::api::catalog;

    catalog::get_catalog().ok_or_else(|| ServerFnError::new("Catalog client not available"))
}

/// Fetch one page of products
#[server(ListProducts, "/api")]
pub async fn list_products(
    request: ProductsRequest,
) -> Result<Result<Vec<Product>, StorefrontError>, ServerFnError> {
    tracing::info!("List request: {:?}", request);

    let source = catalog()?;
    let result = source.list_products(&request).await;

    match &result {
        Ok(products) => tracing::info!("Listing returned {} products", products.len()),
        Err(e) => tracing::error!("Listing failed: {} ({})", e, e.detail()),
    }

    Ok(result)
}

/// Get a single product by ID
#[server(GetProduct, "/api")]
pub async fn get_product(id: ProductId) -> Result<Result<Product, StorefrontError>, ServerFnError> {
    let source = catalog()?;
    let result = source.get_product(id).await;

    if let Err(e) = &result {
        tracing::error!("Product {} lookup failed: {} ({})", id, e, e.detail());
    }

    Ok(result)
}

/// Category keys for the category filter
#[server(ListCategories, "/api")]
pub async fn list_categories() -> Result<Result<Vec<String>, StorefrontError>, ServerFnError> {
    let source = catalog()?;
    Ok(source.list_categories().await)
}
