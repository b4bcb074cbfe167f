use std::sync::Arc;

use fraudscreen_api::config::ServiceConfig;
use fraudscreen_api::screening::Screener;
use fraudscreen_api::state::AppState;
use fraudscreen_core::scoring::RandomScorer;
use fraudscreen_storage::store::DecisionStore;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServiceConfig::from_env()?;

    let store = DecisionStore::connect(&config.database_url, config.max_connections).await?;
    store.init().await?;

    // The random scorer stands in until a trained model is wired up.
    let screener = Screener::new(
        store.clone(),
        Arc::new(RandomScorer),
        config.rules.clone(),
        config.model_threshold,
    );
    let app = fraudscreen_api::router(AppState::new(screener));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        high_amount_threshold = config.rules.high_amount_threshold,
        risky_payer_prefix = %config.rules.risky_payer_prefix,
        model_threshold = config.model_threshold,
        "fraud screening API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
    }
}
