// web_app/listing/session.rs - Tokio driver for the listing controller
//
// Pairs a ListingController with a ProductSource. Each user action locks
// the controller just long enough to issue a request, runs the fetch
// without holding the lock and then applies the outcome, so a newer
// action can supersede a fetch that is still in flight.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::{execute, FetchRequest, ListingController};
use crate::web_app::api::ProductSource;
use crate::web_app::model::{ListingQuery, ListingResult, PriceOrder};

#[derive(Clone)]
pub struct ListingSession {
    controller: Arc<Mutex<ListingController>>,
    source: Arc<dyn ProductSource>,
}

impl ListingSession {
    pub fn new(controller: ListingController, source: Arc<dyn ProductSource>) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            source,
        }
    }

    pub async fn query(&self) -> ListingQuery {
        self.controller.lock().await.query().clone()
    }

    pub async fn result(&self) -> ListingResult {
        self.controller.lock().await.result().clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.controller.lock().await.is_loading()
    }

    pub async fn query_string(&self) -> String {
        self.controller.lock().await.query_string()
    }

    /// Record a keystroke and commit it once the debounce delay passes
    /// without a newer one.
    ///
    /// The keystroke is recorded before this returns; the handle resolves
    /// to true only if this keystroke produced the applied result.
    pub async fn search(&self, term: impl Into<String>) -> JoinHandle<bool> {
        let (ticket, delay) = {
            let mut controller = self.controller.lock().await;
            (controller.set_search_term(term), controller.search_delay())
        };

        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let request = session.controller.lock().await.commit_search(ticket);
            session.run(request).await
        })
    }

    pub async fn set_category(&self, category: impl Into<String>) -> bool {
        let request = self.controller.lock().await.set_category(category);
        self.run(Some(request)).await
    }

    pub async fn set_price_order(&self, order: PriceOrder) -> bool {
        let request = self.controller.lock().await.set_price_order(order);
        self.run(request).await
    }

    pub async fn set_page(&self, page: i64) -> bool {
        let request = self.controller.lock().await.set_page(page);
        self.run(request).await
    }

    pub async fn next_page(&self) -> bool {
        let request = self.controller.lock().await.next_page();
        self.run(request).await
    }

    pub async fn previous_page(&self) -> bool {
        let request = self.controller.lock().await.previous_page();
        self.run(request).await
    }

    pub async fn reset_filters(&self) -> bool {
        let request = self.controller.lock().await.reset_filters();
        self.run(Some(request)).await
    }

    pub async fn refresh(&self) -> bool {
        let request = self.controller.lock().await.refresh();
        self.run(Some(request)).await
    }

    pub async fn load_query(&self, query: ListingQuery) -> bool {
        let request = self.controller.lock().await.load_query(query);
        self.run(request).await
    }

    /// Execute a request (if any) and apply its outcome.
    async fn run(&self, request: Option<FetchRequest>) -> bool {
        let Some(request) = request else {
            return false;
        };
        let outcome = execute(self.source.as_ref(), request).await;
        self.controller.lock().await.apply(outcome)
    }
}
