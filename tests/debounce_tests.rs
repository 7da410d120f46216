/// Search Debounce Tests
///
/// Keystrokes go through ListingSession::search on a paused tokio clock, so
/// the debounce delay elapses deterministically.

mod common;

use std::time::Duration;

use anyhow::Result;
use common::FakeProductSource;
use swiftcart::fixtures::product;
use swiftcart::web_app::config::ListingConfig;
use swiftcart::web_app::listing::session::ListingSession;
use swiftcart::web_app::listing::ListingController;

fn catalog() -> Vec<swiftcart::web_app::model::Product> {
    vec![
        product(1, "Apple AirPods", 12999),
        product(2, "Apple Watch", 39999),
        product(3, "Samsung Galaxy", 69999),
        product(4, "Pineapple Slicer", 1599),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_typing_commits_once() -> Result<()> {
    let source = FakeProductSource::shared(catalog());
    let session = ListingSession::new(ListingController::default(), source.clone());

    let a = session.search("a").await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    let ap = session.search("ap").await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    let app = session.search("app").await;

    assert!(!a.await?);
    assert!(!ap.await?);
    assert!(app.await?);

    let requests = source.requests();
    assert_eq!(requests.len(), 1, "only the last keystroke is searched");
    assert_eq!(requests[0].search.as_deref(), Some("app"));

    let result = session.result().await;
    assert_eq!(result.products.len(), 3);
    assert_eq!(session.query().await.search_term, "app");
    println!("  ✓ 'a', 'ap', 'app' produced one committed query");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_pause_longer_than_delay_commits_each() -> Result<()> {
    let source = FakeProductSource::shared(catalog());
    let session = ListingSession::new(ListingController::default(), source.clone());

    let first = session.search("apple").await;
    tokio::time::sleep(Duration::from_millis(400)).await;
    let second = session.search("samsung").await;

    assert!(first.await?);
    assert!(second.await?);
    assert_eq!(source.request_count(), 2);
    assert_eq!(session.result().await.products[0].id, 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_nothing_before_delay() -> Result<()> {
    let source = FakeProductSource::shared(catalog());
    let session = ListingSession::new(ListingController::default(), source.clone());

    let pending = session.search("watch").await;
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert_eq!(source.request_count(), 0);

    assert!(pending.await?);
    assert_eq!(source.request_count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_custom_delay() -> Result<()> {
    let source = FakeProductSource::shared(catalog());
    let config = ListingConfig {
        search_debounce: Duration::from_millis(50),
        ..ListingConfig::default()
    };
    let session = ListingSession::new(ListingController::new(config), source.clone());

    let first = session.search("app").await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(source.request_count(), 1);
    assert!(first.await?);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_search() -> Result<()> {
    let source = FakeProductSource::shared(catalog());
    let session = ListingSession::new(ListingController::default(), source.clone());

    let pending = session.search("galaxy").await;
    assert!(session.reset_filters().await);
    assert!(!pending.await?);

    assert_eq!(source.request_count(), 1);
    assert_eq!(session.query().await.search_term, "");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_search_resets_page() -> Result<()> {
    let source = FakeProductSource::shared(catalog());
    let session = ListingSession::new(ListingController::default(), source.clone());

    session.set_page(3).await;
    let pending = session.search("apple").await;
    assert!(pending.await?);

    assert_eq!(session.query().await.page, 1);
    assert_eq!(session.query_string().await, "search=apple");
    Ok(())
}
