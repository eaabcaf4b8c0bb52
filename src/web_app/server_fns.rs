// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

/// Error returned when no loader is registered anywhere
pub const LOADER_UNAVAILABLE: &str = "Sheet loader not available";

#[cfg(feature = "ssr")]
async fn loader() -> Result<crate::web_app::api::SheetDataLoader, ServerFnError> {
    use actix_web::web::Data;
    use leptos_actix::extract;
    use crate::web_app::api::{state, SheetDataLoader};

    // First try to get from context (for testing or if manually set)
    if let Some(loader) = use_context::<SheetDataLoader>() {
        return Ok(loader);
    }

    // Actix app data registered by the server binary
    match extract::<Data<SheetDataLoader>>().await {
        Ok(data) => return Ok(data.as_ref().clone()),
        Err(e) => tracing::debug!("No loader in request app_data: {}", e),
    }

    if let Some(loader) = state::get_loader() {
        return Ok(loader);
    }

    tracing::error!("Sheet loader could not be resolved from any source");
    Err(ServerFnError::new(LOADER_UNAVAILABLE))
}

/// Load every gem of the configured sheet, sorted by id descending
///
/// Fails as a whole when the sheet cannot be fetched; the caller decides how
/// to present that.
#[server(LoadGems, "/api")]
pub async fn load_gems() -> Result<Vec<Gem>, ServerFnError> {
    let loader = loader().await?;

    tracing::info!("Gallery load request for sheet '{}'", loader.config().sheet_id);

    let result = loader.load().await;

    match &result {
        Ok(gems) => tracing::info!("Gallery load successful: {} gems", gems.len()),
        Err(e) => tracing::error!("Gallery load failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to fetch sheet data: {}", e)))
}
