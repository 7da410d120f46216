// web_app/api/http.rs - HTTP implementation of `ProductSource` backed by reqwest
//
// No retries: a failed request surfaces once as `Network` and the user
// decides whether to try again.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::payload::{decode_categories, decode_product, decode_products};
use super::source::{
    build_categories_url, build_product_url, build_products_url, ProductSource, ProductsRequest,
};
use crate::web_app::config::StorefrontConfig;
use crate::web_app::error::{StorefrontError, StorefrontResult};
use crate::web_app::model::{Product, ProductId};

/// Catalog client talking to the real API
#[derive(Clone, Debug)]
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductSource {
    /// Create a client for the configured catalog URL and timeout.
    pub fn new(config: &StorefrontConfig) -> StorefrontResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("swiftcart/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.catalog_api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET a URL and parse the body as JSON.
    ///
    /// Returns `Ok(None)` on 404 so callers can decide what "missing" means.
    async fn fetch_json(&self, url: &Url) -> StorefrontResult<Option<Value>> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StorefrontError::network(format!(
                "{} returned HTTP {}",
                url,
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        let value = serde_json::from_str::<Value>(&body)?;
        Ok(Some(value))
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn list_products(&self, request: &ProductsRequest) -> StorefrontResult<Vec<Product>> {
        let url = build_products_url(&self.base_url, request);
        match self.fetch_json(&url).await? {
            Some(value) => decode_products(value),
            None => Ok(Vec::new()),
        }
    }

    async fn get_product(&self, id: ProductId) -> StorefrontResult<Product> {
        let url = build_product_url(&self.base_url, id);
        match self.fetch_json(&url).await? {
            Some(value) => decode_product(value, id),
            None => Err(StorefrontError::NotFound { id }),
        }
    }

    async fn list_categories(&self) -> StorefrontResult<Vec<String>> {
        let url = build_categories_url(&self.base_url);
        match self.fetch_json(&url).await? {
            Some(value) => decode_categories(value),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_base() {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "CATALOG_API_URL").then(|| "http://localhost:9999/api".to_string())
        })
        .unwrap();
        let source = HttpProductSource::new(&config).unwrap();
        assert_eq!(source.base_url().as_str(), "http://localhost:9999/api");
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_network_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let config = StorefrontConfig::from_lookup(|key| match key {
            "CATALOG_API_URL" => Some("http://127.0.0.1:9".to_string()),
            "REQUEST_TIMEOUT_SECS" => Some("2".to_string()),
            _ => None,
        })
        .unwrap();
        let source = HttpProductSource::new(&config).unwrap();

        let err = source.list_products(&ProductsRequest::page(20, 0)).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Network { .. }));
    }
}
