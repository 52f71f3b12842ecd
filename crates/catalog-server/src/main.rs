//! # Product Catalog Server
//!
//! Loads configuration, wires the shaku module, and serves the REST API
//! until Ctrl+C or SIGTERM.

use catalog_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{register_metrics, DatabasePoolInterface};
use catalog_rest::create_router;
use catalog_server::{
    di::build_catalog_module,
    startup::{init_logging, print_startup_info, shutdown_signal},
};
use shaku::HasComponent;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    info!("Starting product catalog server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> CatalogResult<()> {
    register_metrics();

    let module = build_catalog_module(&config).await?;
    let router = create_router(module.as_ref(), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::Internal(format!("REST server error: {}", e)))?;

    let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
    pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}
