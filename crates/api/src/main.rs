use std::sync::Arc;

use anyhow::Context;

use labkit_api::config::ServerConfig;
use labkit_inventory::InventoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    labkit_observability::init();

    let config = ServerConfig::from_env();
    let store = Arc::new(InventoryStore::seeded());
    let app = labkit_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("ctrl-c received; shutting down"),
        Err(e) => {
            // Without a signal handler, run until the process is killed.
            tracing::warn!("cannot listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
