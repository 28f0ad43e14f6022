//! Bookdesk server — HTTP entry point for the desk agent.
//!
//! Configuration is environment-driven:
//! - `BOOKDESK_DATABASE_URL` (default `sqlite://library.db`)
//! - `BOOKDESK_BIND_ADDR` (default `0.0.0.0:8000`)
//! - `BOOKDESK_SEED_DEMO` (`1`/`true` to insert the demo catalog)
//! - `RUST_LOG` for log filtering

use anyhow::Context;
use bookdesk_store::BookStore;
use bookdesk_web::{router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("BOOKDESK_DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://library.db".to_string());
    let bind_addr =
        std::env::var("BOOKDESK_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let store = BookStore::connect(&database_url)
        .await
        .with_context(|| format!("opening database at {database_url}"))?;
    store.migrate().await.context("applying schema")?;

    if std::env::var("BOOKDESK_SEED_DEMO")
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    {
        store.seed_demo().await.context("seeding demo data")?;
    }

    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!(%bind_addr, %database_url, "bookdesk server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
