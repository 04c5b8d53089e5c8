use anyhow::Context;
use tracing::info;

use crm_inventory::config::Config;
use crm_inventory::{inventory_router, InventoryState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,crm_inventory=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    // The inventory service always listens on 8082.
    let config = Config::fixed(8082);

    let state = InventoryState::seeded();
    info!(
        count = state.products.read().await.len(),
        "Seeded product store"
    );

    let app = inventory_router(state);

    let addr = config.addr();
    info!("Inventory service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
