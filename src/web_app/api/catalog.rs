// web_app/api/catalog.rs - Process-wide catalog client
//
// The server binary builds one ProductSource at startup and registers it
// here; server functions pick it up without threading it through Actix.
// Tests can swap in a fake with `set_test_catalog`.

use std::sync::{Arc, Mutex, OnceLock};

use crate::web_app::api::ProductSource;

static CATALOG: OnceLock<Arc<dyn ProductSource>> = OnceLock::new();
static TEST_CATALOG_OVERRIDE: Mutex<Option<Arc<dyn ProductSource>>> = Mutex::new(None);

/// Register the global catalog client
pub fn init_catalog(source: Arc<dyn ProductSource>) {
    tracing::info!("Initializing global catalog client");
    if CATALOG.set(source).is_err() {
        tracing::warn!("Catalog client already initialized");
    }
}

/// Set a catalog override for testing
pub fn set_test_catalog(source: Arc<dyn ProductSource>) {
    match TEST_CATALOG_OVERRIDE.lock() {
        Ok(mut guard) => *guard = Some(source),
        Err(poisoned) => *poisoned.into_inner() = Some(source),
    }
}

/// Get the catalog client, preferring a test override
pub fn get_catalog() -> Option<Arc<dyn ProductSource>> {
    if let Ok(guard) = TEST_CATALOG_OVERRIDE.lock() {
        if let Some(source) = guard.as_ref() {
            return Some(Arc::clone(source));
        }
    }

    let source = CATALOG.get().cloned();
    if source.is_none() {
        tracing::warn!("Global catalog client is empty!");
    }
    source
}
