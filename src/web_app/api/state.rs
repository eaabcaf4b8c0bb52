// web_app/api/state.rs - Process-wide sheet loader
//
// The server binary registers one loader at startup; server functions pick
// it up from here. Tests can swap in a loader backed by a stub source.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::config::SheetConfig;
use super::sheet::SheetDataLoader;

static LOADER: OnceLock<SheetDataLoader> = OnceLock::new();
static TEST_LOADER_OVERRIDE: Mutex<Option<SheetDataLoader>> = Mutex::new(None);

/// Initialize the global sheet loader
pub fn init_loader(loader: SheetDataLoader) {
    tracing::info!("Initializing global sheet loader for sheet '{}'", loader.config().sheet_id);
    if LOADER.set(loader).is_err() {
        tracing::warn!("Sheet loader already initialized");
    } else {
        tracing::info!("Global sheet loader initialized successfully");
    }
}

/// Set a loader override for testing
pub fn set_test_loader(loader: SheetDataLoader) {
    let mut guard = TEST_LOADER_OVERRIDE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(loader);
}

/// Remove the testing override
pub fn clear_test_loader() {
    let mut guard = TEST_LOADER_OVERRIDE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Get the global sheet loader
pub fn get_loader() -> Option<SheetDataLoader> {
    // Check for test override first
    {
        let guard = TEST_LOADER_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(ref loader) = *guard {
            return Some(loader.clone());
        }
    }

    let loader = LOADER.get().cloned();
    if loader.is_some() {
        tracing::debug!("Global sheet loader retrieved successfully");
    } else {
        tracing::warn!("Global sheet loader is empty!");
    }
    loader
}

/// Create an HTTP-backed loader from the environment
///
/// Reads `SHEET_ID` and `SHEET_EXPORT_URL` (see [`SheetConfig::from_env`]).
pub fn create_loader() -> SheetDataLoader {
    SheetDataLoader::new(SheetConfig::from_env())
}
