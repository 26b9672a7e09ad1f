use dotenvy::dotenv;
use jewel_catalog::{
    config::settings::load_default_settings,
    core::{AdminGate, Catalog},
    errors::Result,
    storage::LocalStore,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();

    // 3. Load settings (config.toml + environment overrides)
    let settings = load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 4. Open the local store
    let local = LocalStore::connect(&settings.local.database_url)
        .await
        .inspect(|_| info!("Local store ready at {}", settings.local.database_url))
        .inspect_err(|e| error!("Failed to open local store: {}", e))?;

    // 5. Pick the storage mode once and build the facade
    let catalog = Catalog::from_settings(&settings.remote, local);
    let admin = AdminGate::from_settings(&settings.admin);
    info!(
        "Admin editing {}",
        if admin.is_enabled() { "enabled" } else { "locked (no passcode set)" }
    );

    // 6. Log a snapshot of what the storefront would show
    let products = catalog.list_products().await;
    info!("{} products in catalog ({:?} mode)", products.len(), catalog.mode());
    for price in catalog.list_prices().await {
        info!(
            "{}: buy {} / sell {}",
            price.karat, price.buy, price.sell
        );
    }
    info!(
        "{} favorites, {} saved requests",
        catalog.favorites().await.len(),
        catalog.requests().await.len()
    );

    Ok(())
}
