pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use catalog::Catalog;
pub use error::StoreError;
pub use logic::{
    OptionResolver, PriceCalculator, PriceListLookup, PricingError, QuoteError, StorefrontService,
};
pub use model::*;
pub use store::{CatalogStore, JsonFileOverrideStore, MemoryOverrideStore, OverrideStore};

use std::sync::Arc;

/// Build the storefront service from configuration.
pub fn build_service(
    config: &config::AppConfig,
) -> anyhow::Result<StorefrontService<Catalog, JsonFileOverrideStore>> {
    let catalog = Catalog::load(config.storage.catalog_path.as_deref())?;
    log::info!("catalog loaded with {} products", catalog.len());

    let overrides = JsonFileOverrideStore::new(&config.storage.overrides_path);
    log::info!("admin overrides read from {}", overrides.path().display());

    Ok(StorefrontService::new(Arc::new(catalog), Arc::new(overrides)))
}

/// Serve the storefront API on an already-bound listener.
pub async fn serve<C, O>(
    listener: tokio::net::TcpListener,
    service: StorefrontService<C, O>,
) -> anyhow::Result<()>
where
    C: CatalogStore + 'static,
    O: OverrideStore + 'static,
{
    let app = routes::create_router().with_state(service);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Load `.env` and configuration, then serve until shutdown.
pub async fn run_server() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Default to Info, RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    log::info!("framestore: storefront pricing server");

    let config = crate::config::AppConfig::load()?;
    log::info!(
        "configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let service = build_service(&config)?;

    let bind_address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log::info!("framestore server running on http://{}", bind_address);

    serve(listener, service).await
}
