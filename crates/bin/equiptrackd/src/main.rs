//! # equiptrackd — equiptrack daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize `tracing` from the configured filter
//! - Construct the in-memory store, empty or seeded with demo data
//! - Construct application services, injecting the store via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use equiptrack_adapter_http_axum::state::AppState;
use equiptrack_adapter_storage_memory::InMemoryStore;
use equiptrack_app::services::equipment_service::EquipmentService;
use equiptrack_app::services::maintenance_service::MaintenanceService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Store
    let store = Arc::new(if config.store.seed {
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    });

    // Services
    let clock = config.clock();
    let rule = config.freshness_rule();
    let equipment_service =
        EquipmentService::new(Arc::clone(&store), Arc::clone(&store), clock)
            .with_freshness_rule(rule);
    let maintenance_service = MaintenanceService::new(Arc::clone(&store), store);

    // HTTP
    let state = AppState::new(equipment_service, maintenance_service);
    let app = equiptrack_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        ?clock,
        window_days = rule.window_days(),
        seeded = config.store.seed,
        "equiptrackd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("equiptrackd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig_term) => {
                sig_term.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
