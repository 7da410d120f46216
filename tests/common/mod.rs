// common/mod.rs - Shared test utilities
//
// An in-memory ProductSource that behaves like the catalog API (search,
// category filter, price ordering, limit/skip) and records every request.
// Failures and per-call delays can be scripted to exercise error handling
// and out-of-order responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use swiftcart::web_app::api::{ProductSource, ProductsRequest};
use swiftcart::web_app::error::{StorefrontError, StorefrontResult};
use swiftcart::web_app::model::{PriceOrder, Product, ProductId};

#[derive(Default)]
pub struct FakeProductSource {
    products: Vec<Product>,
    categories: Vec<String>,
    requests: Mutex<Vec<ProductsRequest>>,
    failures: Mutex<VecDeque<StorefrontError>>,
    delays: Mutex<VecDeque<Duration>>,
}

impl FakeProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Self {
            products,
            categories,
            ..Default::default()
        }
    }

    pub fn shared(products: Vec<Product>) -> Arc<Self> {
        Arc::new(Self::new(products))
    }

    /// Make the next list call fail with `error`.
    pub fn fail_next(&self, error: StorefrontError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Delay the next list call by `delay` (tokio time).
    pub fn delay_next(&self, delay: Duration) {
        self.delays.lock().unwrap().push_back(delay);
    }

    /// Every list request seen so far
    pub fn requests(&self) -> Vec<ProductsRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn select(&self, request: &ProductsRequest) -> Vec<Product> {
        let search = request.search.as_deref().map(str::to_lowercase);
        let mut matching: Vec<Product> = self
            .products
            .iter()
            .filter(|p| match &search {
                Some(term) => p.title.to_lowercase().contains(term),
                None => true,
            })
            .filter(|p| match &request.category {
                Some(category) => &p.category == category,
                None => true,
            })
            .cloned()
            .collect();

        match request.price_order {
            Some(PriceOrder::Ascending) => matching.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(PriceOrder::Descending) => matching.sort_by(|a, b| b.price.cmp(&a.price)),
            _ => {}
        }

        matching
            .into_iter()
            .skip(request.skip as usize)
            .take(request.limit as usize)
            .collect()
    }
}

#[async_trait]
impl ProductSource for FakeProductSource {
    async fn list_products(&self, request: &ProductsRequest) -> StorefrontResult<Vec<Product>> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().unwrap().pop_front();
        match failure {
            Some(error) => Err(error),
            None => Ok(self.select(request)),
        }
    }

    async fn get_product(&self, id: ProductId) -> StorefrontResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StorefrontError::NotFound { id })
    }

    async fn list_categories(&self) -> StorefrontResult<Vec<String>> {
        Ok(self.categories.clone())
    }
}
