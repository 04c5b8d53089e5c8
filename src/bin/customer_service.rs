use anyhow::Context;
use tracing::info;

use crm_inventory::config::Config;
use crm_inventory::{customer_router, CustomerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,crm_inventory=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env(8081)?;

    let state = CustomerState::seeded();
    info!(
        count = state.customers.read().await.len(),
        "Seeded customer store"
    );

    let app = customer_router(state);

    let addr = config.addr();
    info!("Customer service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
