//! Supervising loop around the reconciler.
//!
//! # Responsibilities
//! - Run reconciliation cycles back to back, first one immediately
//! - Sleep the success or failure interval between cycles
//! - Keep retrying through transient controller failures, stop on
//!   anything fatal
//! - Exit promptly when the shutdown signal arrives
//!
//! # Design Decisions
//! - The sleep is a `select!` over the timer and the shutdown receiver,
//!   so cancellation latency is bounded by signal delivery, not by the
//!   configured interval
//! - Fatal failures are logged before the loop exits; a silent exit
//!   would leave operators guessing

use tokio::sync::broadcast;
use tokio::time;

use crate::config::schema::IntervalConfig;
use crate::controller::ConfigService;
use crate::reconcile::{CycleOutcome, Reconciler};
use crate::source::ConfigSource;

/// Drives the reconciler until shutdown or a fatal outcome.
pub struct Supervisor<C, S> {
    reconciler: Reconciler<C, S>,
    intervals: IntervalConfig,
}

impl<C: ConfigService, S: ConfigSource> Supervisor<C, S> {
    pub fn new(reconciler: Reconciler<C, S>, intervals: IntervalConfig) -> Self {
        Self {
            reconciler,
            intervals,
        }
    }

    /// Run cycles until cancellation or a fatal reconciliation failure.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        loop {
            let sleep_for = match self.reconciler.run_cycle().await {
                CycleOutcome::Success => {
                    tracing::info!(
                        interval = ?self.intervals.after_success,
                        "cycle complete, will sleep after success"
                    );
                    self.intervals.after_success
                }
                CycleOutcome::TransientFailure(err) => {
                    tracing::error!(
                        error = %err,
                        interval = ?self.intervals.after_failure,
                        "cycle failed, will sleep after failure and retry"
                    );
                    self.intervals.after_failure
                }
                CycleOutcome::FatalFailure(err) => {
                    tracing::error!(
                        error = %err,
                        "unrecoverable reconciliation failure, stopping the loop"
                    );
                    break;
                }
            };

            tokio::select! {
                _ = time::sleep(sleep_for) => {}
                _ = shutdown.recv() => {
                    tracing::info!("shutdown signal received, exiting reconciliation loop");
                    break;
                }
            }
        }
    }
}
