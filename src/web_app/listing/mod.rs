// web_app/listing/mod.rs - Product listing state machine
//
// The ListingController owns the ListingQuery (search, category, price
// order, page) and the ListingResult derived from the last fetch. It does
// no I/O: operations that need data return a FetchRequest tagged with a
// revision, the caller runs it against a ProductSource and hands the
// FetchOutcome back to `apply`. Outcomes from superseded revisions are
// dropped, so a slow old response never overwrites a newer one.

pub mod debounce;
pub mod query_string;

#[cfg(feature = "native")]
pub mod session;

use std::time::Duration;

use crate::web_app::api::{ProductSource, ProductsRequest};
use crate::web_app::config::ListingConfig;
use crate::web_app::error::{StorefrontError, StorefrontResult};
use crate::web_app::model::{
    ListingQuery, ListingResult, PriceOrder, PriceSortStrategy, Product,
};

pub use debounce::{DebounceTicket, Debouncer};

/// A catalog request issued for one revision of the query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub revision: u64,
    pub params: ProductsRequest,
}

/// What came back for a [`FetchRequest`]
#[derive(Clone, Debug)]
pub struct FetchOutcome {
    pub revision: u64,
    pub result: StorefrontResult<Vec<Product>>,
}

/// Run a request against a product source.
pub async fn execute(source: &dyn ProductSource, request: FetchRequest) -> FetchOutcome {
    tracing::info!(
        "Fetching products (revision {}): {:?}",
        request.revision,
        request.params
    );
    let result = source.list_products(&request.params).await;
    if let Err(e) = &result {
        tracing::error!("Product fetch failed: {} ({})", e, e.detail());
    }
    FetchOutcome {
        revision: request.revision,
        result,
    }
}

/// Stable sort by price; `PriceOrder::None` keeps source order.
pub fn sort_by_price(products: &mut [Product], order: PriceOrder) {
    match order {
        PriceOrder::None => {}
        PriceOrder::Ascending => products.sort_by(|a, b| a.price.cmp(&b.price)),
        PriceOrder::Descending => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

/// Search/filter/sort/pagination state of the product listing
#[derive(Clone, Debug)]
pub struct ListingController {
    config: ListingConfig,
    query: ListingQuery,
    result: ListingResult,
    /// Products exactly as the source returned them; `result.products` is
    /// derived from this when sorting client-side.
    fetched: Vec<Product>,
    loading: bool,
    revision: u64,
    search: Debouncer,
}

impl ListingController {
    pub fn new(config: ListingConfig) -> Self {
        Self::with_query(config, ListingQuery::default())
    }

    /// Start from a known query, e.g. one decoded from the URL.
    pub fn with_query(config: ListingConfig, query: ListingQuery) -> Self {
        let query = normalize(query);
        let search = Debouncer::new(config.search_debounce);
        Self {
            config,
            query,
            result: ListingResult::default(),
            fetched: Vec::new(),
            loading: false,
            revision: 0,
            search,
        }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn result(&self) -> &ListingResult {
        &self.result
    }

    pub fn products(&self) -> &[Product] {
        &self.result.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.result.has_more
    }

    pub fn error_message(&self) -> Option<&str> {
        self.result.error_message.as_deref()
    }

    /// Revision of the most recently issued fetch (0 before the first one)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Search text typed but not yet committed
    pub fn pending_search(&self) -> Option<&str> {
        self.search.pending()
    }

    pub fn search_delay(&self) -> Duration {
        self.search.delay()
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.result.has_more
    }

    /// URL form of the current query
    pub fn query_string(&self) -> String {
        query_string::to_query_string(&self.query)
    }

    /// Record a keystroke; commit it later with [`Self::commit_search`].
    pub fn set_search_term(&mut self, term: impl Into<String>) -> DebounceTicket {
        self.search.push(term)
    }

    /// Commit the debounced term if `ticket` is still the latest keystroke.
    pub fn commit_search(&mut self, ticket: DebounceTicket) -> Option<FetchRequest> {
        let term = self.search.settle(ticket)?;
        tracing::debug!("Committing search term '{}'", term.trim());
        self.query.search_term = term.trim().to_string();
        self.query.page = 1;
        Some(self.issue_fetch())
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> FetchRequest {
        self.query.category = category.into();
        self.query.page = 1;
        self.issue_fetch()
    }

    /// Change the price order.
    ///
    /// Server strategy always refetches page 1 with the order attached.
    /// Client strategy orders only the page held in memory: on page 1 the
    /// held products are re-sorted without a request, otherwise page 1 is
    /// fetched and sorted on arrival.
    pub fn set_price_order(&mut self, order: PriceOrder) -> Option<FetchRequest> {
        self.query.price_order = order;
        match self.config.price_sort {
            PriceSortStrategy::Server => {
                self.query.page = 1;
                Some(self.issue_fetch())
            }
            PriceSortStrategy::Client if self.query.page == 1 && self.revision > 0 => {
                self.rearrange();
                None
            }
            PriceSortStrategy::Client => {
                self.query.page = 1;
                Some(self.issue_fetch())
            }
        }
    }

    /// Go to page `page`; values below 1 are ignored.
    pub fn set_page(&mut self, page: i64) -> Option<FetchRequest> {
        let page = match u32::try_from(page) {
            Ok(page) if page >= 1 => page,
            _ => {
                tracing::debug!("Ignoring invalid page {}", page);
                return None;
            }
        };
        self.query.page = page;
        Some(self.issue_fetch())
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if !self.can_go_next() {
            return None;
        }
        self.set_page(i64::from(self.query.page) + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        if !self.can_go_previous() {
            return None;
        }
        self.set_page(i64::from(self.query.page) - 1)
    }

    /// Clear search, category and price order and go back to page 1.
    pub fn reset_filters(&mut self) -> FetchRequest {
        self.search.cancel();
        self.query = ListingQuery::default();
        self.issue_fetch()
    }

    /// Fetch the current query again (initial load, retry).
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue_fetch()
    }

    /// Adopt a query read back from the URL.
    ///
    /// Returns `None` when it matches what is already loaded, which is the
    /// case right after the controller wrote the URL itself.
    pub fn load_query(&mut self, query: ListingQuery) -> Option<FetchRequest> {
        let query = normalize(query);
        if query == self.query && self.revision > 0 {
            return None;
        }
        self.search.cancel();
        self.query = query;
        Some(self.issue_fetch())
    }

    /// Apply a fetch outcome; returns false when it was stale and dropped.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.revision != self.revision {
            tracing::warn!(
                "Discarding stale response for revision {} (latest is {})",
                outcome.revision,
                self.revision
            );
            return false;
        }

        self.loading = false;
        match outcome.result {
            Ok(products) if products.is_empty() => {
                self.fail(StorefrontError::EmptyResult);
            }
            Ok(products) => {
                let page_size = self.config.page_size as usize;
                self.result.has_more = products.len() == page_size;
                self.result.error_message = None;
                self.fetched = products;
                self.rearrange();
                tracing::info!(
                    "Loaded {} products (page {}, has_more={})",
                    self.result.products.len(),
                    self.query.page,
                    self.result.has_more
                );
            }
            Err(e) => self.fail(e),
        }
        true
    }

    fn fail(&mut self, error: StorefrontError) {
        self.fetched.clear();
        self.result = ListingResult {
            products: Vec::new(),
            has_more: false,
            error_message: Some(error.to_string()),
        };
    }

    /// Rebuild the displayed products from what was fetched.
    fn rearrange(&mut self) {
        let mut products = self.fetched.clone();
        if self.config.price_sort == PriceSortStrategy::Client {
            sort_by_price(&mut products, self.query.price_order);
        }
        self.result.products = products;
    }

    fn issue_fetch(&mut self) -> FetchRequest {
        self.revision += 1;
        self.loading = true;

        let page_size = self.config.page_size;
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let price_order = match (self.config.price_sort, self.query.price_order) {
            (PriceSortStrategy::Server, order) if order != PriceOrder::None => Some(order),
            _ => None,
        };

        let params = ProductsRequest {
            limit: page_size,
            skip: (self.query.page - 1).saturating_mul(page_size),
            search: non_empty(&self.query.search_term),
            category: non_empty(&self.query.category),
            price_order,
        };

        tracing::debug!("Issuing revision {} for {:?}", self.revision, self.query);
        FetchRequest {
            revision: self.revision,
            params,
        }
    }
}

/// Same shape a typed search commits: trimmed term, page at least 1.
fn normalize(mut query: ListingQuery) -> ListingQuery {
    query.search_term = query.search_term.trim().to_string();
    query.page = query.page.max(1);
    query
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new(ListingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64, price: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            category: "misc".to_string(),
            price: Decimal::new(price, 0),
            rating: 4.0,
            images: vec![],
            stock: 1,
            tags: vec![],
            reviews: vec![],
        }
    }

    fn ok(request: &FetchRequest, products: Vec<Product>) -> FetchOutcome {
        FetchOutcome {
            revision: request.revision,
            result: Ok(products),
        }
    }

    #[test]
    fn test_first_request_parameters() {
        let mut controller = ListingController::default();
        let request = controller.refresh();

        assert_eq!(request.revision, 1);
        assert_eq!(request.params, ProductsRequest::page(20, 0));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_skip_follows_page() {
        let mut controller = ListingController::default();
        let request = controller.set_page(3).unwrap();
        assert_eq!(request.params.skip, 40);
        assert_eq!(request.params.limit, 20);
    }

    #[test]
    fn test_loading_clears_on_current_outcome() {
        let mut controller = ListingController::default();
        let request = controller.refresh();
        assert!(controller.apply(ok(&request, vec![product(1, 5)])));
        assert!(!controller.is_loading());
        assert_eq!(controller.products().len(), 1);
    }

    #[test]
    fn test_stale_outcome_keeps_loading() {
        let mut controller = ListingController::default();
        let old = controller.refresh();
        let _new = controller.set_category("beauty");

        assert!(!controller.apply(ok(&old, vec![product(1, 5)])));
        assert!(controller.is_loading());
        assert!(controller.products().is_empty());
    }

    #[test]
    fn test_server_sort_passes_order() {
        let mut controller = ListingController::default();
        let request = controller.set_price_order(PriceOrder::Descending).unwrap();
        assert_eq!(request.params.price_order, Some(PriceOrder::Descending));
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let mut products = vec![product(1, 5), product(2, 3), product(3, 5), product(4, 1)];
        sort_by_price(&mut products, PriceOrder::Descending);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);

        sort_by_price(&mut products, PriceOrder::Ascending);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }
}
