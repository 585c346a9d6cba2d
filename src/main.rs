//! # Shop Back Office
//!
//! Starts the [`ShopSystem`], registers the admin account when one is configured, and serves
//! the HTTP API until Ctrl-C.
//!
//! ```bash
//! ADMIN_USERNAME=admin ADMIN_PASSWORD=secret RUST_LOG=info cargo run
//! ```

use anyhow::Context;
use shop_backoffice::api::{self, AppState};
use shop_backoffice::lifecycle::{setup_tracing, Config, ShopSystem};
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(?config, "Starting shop back office");

    let system = ShopSystem::with_buffer_size(config.actor_buffer_size);

    if let Some(admin) = &config.admin {
        system
            .user_client
            .register(&admin.username, &admin.password)
            .instrument(info_span!("admin_bootstrap"))
            .await
            .context("failed to register the admin account")?;
    }

    let address = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "Listening");

    let app = api::router(AppState::from_system(&system));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // `app` was moved into the server, so its clients are gone and the actors can stop.
    system.shutdown().await.context("actor shutdown failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
