//! Controller configuration provisioner.
//!
//! Periodically reconciles desired configuration from local files against
//! the live configuration of a remote network controller, pushing updates
//! only when the two diverge.
//!
//! # Architecture Overview
//!
//! ```text
//!   config files ──▶ FileSource ─┐
//!                                ├─▶ Reconciler ──▶ ControllerClient ──▶ controller API
//!   environment ──▶ Provisioner ─┘        │
//!                     Config              ▼
//!                                    CycleOutcome
//!                                         │
//!   SIGINT ──▶ Shutdown ──────────▶ Supervisor (sleep / retry / stop)
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onos_provisioner::source::FileSource;
use onos_provisioner::{ControllerClient, ProvisionerConfig, Reconciler, Shutdown, Supervisor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onos_provisioner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("onos-provisioner v0.1.0 starting");

    let config = ProvisionerConfig::from_env()?;
    tracing::info!(
        controller = %config.controller.address,
        items = config.items.len(),
        success_interval = ?config.intervals.after_success,
        failure_interval = ?config.intervals.after_failure,
        "configuration loaded"
    );

    let client = ControllerClient::new(&config.controller)?;
    let reconciler = Reconciler::new(client, FileSource, config.items);
    let supervisor = Supervisor::new(reconciler, config.intervals);

    let shutdown = Shutdown::new();
    let loop_handle = tokio::spawn(supervisor.run(shutdown.subscribe()));

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            shutdown.trigger();
        }
    });

    loop_handle.await?;
    tracing::info!("exit: reconciliation loop stopped");
    Ok(())
}
