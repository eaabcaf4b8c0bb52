// sheet_dump - fetch a published sheet and print the normalized gems
//
// Usage: sheet_dump [SHEET_ID] [--json]
//
// Without SHEET_ID the id comes from SHEET_ID / .env, as for the server.

use anyhow::{Context, Result};
use gem_gallery::web_app::api::{SheetConfig, SheetDataLoader};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    // Create a Tokio runtime explicitly to avoid macro issues if features aren't perfect
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let mut sheet_id = None;
    let mut as_json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            _ => sheet_id = Some(arg),
        }
    }

    let env_config = SheetConfig::from_env();
    let config = match sheet_id {
        Some(id) => SheetConfig::new(id).with_export_url_template(env_config.export_url_template),
        None => env_config,
    };

    println!("Fetching {}", config.export_url());

    let loader = SheetDataLoader::new(config);
    let gems = loader
        .load()
        .await
        .with_context(|| format!("loading sheet '{}'", loader.config().sheet_id))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&gems)?);
        return Ok(());
    }

    println!("✓ {} gems\n", gems.len());
    for gem in &gems {
        println!("  [{}] {} ({})", gem.id, gem.name, gem.category);
    }

    Ok(())
}
