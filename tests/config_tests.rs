/// Configuration Tests
///
/// Environment keys are fed through `from_lookup` so tests never touch the
/// real process environment.

use std::collections::HashMap;
use std::time::Duration;

use swiftcart::web_app::config::{ConfigError, StorefrontConfig};
use swiftcart::web_app::listing::ListingController;
use swiftcart::web_app::model::PriceSortStrategy;

fn load(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    StorefrontConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_all_keys() {
    let config = load(&[
        ("CATALOG_API_URL", "http://localhost:4000/api"),
        ("PAGE_SIZE", "12"),
        ("SEARCH_DEBOUNCE_MS", "150"),
        ("PRICE_SORT", "client"),
        ("REQUEST_TIMEOUT_SECS", "5"),
    ])
    .unwrap();

    assert_eq!(config.catalog_api_url.as_str(), "http://localhost:4000/api");
    assert_eq!(config.listing.page_size, 12);
    assert_eq!(config.listing.search_debounce, Duration::from_millis(150));
    assert_eq!(config.listing.price_sort, PriceSortStrategy::Client);
    assert_eq!(config.request_timeout, Duration::from_secs(5));
}

#[test]
fn test_values_are_trimmed() {
    let config = load(&[("PAGE_SIZE", " 8 "), ("PRICE_SORT", " server ")]).unwrap();
    assert_eq!(config.listing.page_size, 8);
    assert_eq!(config.listing.price_sort, PriceSortStrategy::Server);
}

#[test]
fn test_invalid_values_name_the_key() {
    let cases = [
        ("CATALOG_API_URL", "not a url"),
        ("PAGE_SIZE", "-3"),
        ("PAGE_SIZE", "zero"),
        ("SEARCH_DEBOUNCE_MS", "fast"),
        ("PRICE_SORT", "database"),
        ("REQUEST_TIMEOUT_SECS", "1.5"),
    ];

    for (key, value) in cases {
        match load(&[(key, value)]) {
            Err(ConfigError::InvalidValue(name, _)) => assert_eq!(name, key),
            other => panic!("{}={} should be rejected, got {:?}", key, value, other),
        }
    }
}

#[test]
fn test_page_size_drives_requests() {
    let config = load(&[("PAGE_SIZE", "12")]).unwrap();
    let mut controller = ListingController::new(config.listing);

    let request = controller.set_page(3).unwrap();
    assert_eq!(request.params.limit, 12);
    assert_eq!(request.params.skip, 24);
}
