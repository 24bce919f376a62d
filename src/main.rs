//! Binary entry point: configuration, migrations, serving.

use std::sync::Arc;
use todos_web::{router, AppConfig, AppState, PgListStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(env = ?config.env, addr = %config.bind_addr, "starting");

    let store = PgListStore::connect(&config.database_url).await?;
    store.migrate().await?;

    let app = router(AppState::new(Arc::new(store)));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
