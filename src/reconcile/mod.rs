//! Reconciliation engine.
//!
//! # Data Flow
//! ```text
//! ConfigSource ──desired bytes──▶ engine.rs
//! ConfigService ──remote bytes──▶ engine.rs
//!     → diff.rs (decode + compare by string value)
//!     → divergence? write desired bytes, re-read to confirm
//!     → CycleOutcome (consumed by the supervisor)
//! ```
//!
//! # Design Decisions
//! - One write attempt per divergence per cycle; retry is the
//!   supervisor's job, coarse and interval-based
//! - Classification is carried in the returned [`CycleOutcome`] variant,
//!   not recovered downstream by inspecting error types
//! - Comparison is one-directional: remote keys absent from the desired
//!   set never trigger a push

pub mod diff;
pub mod engine;

use crate::controller::ApiError;
use crate::source::SourceError;

pub use engine::Reconciler;

/// A failure raised while reconciling one configuration item.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// Desired configuration could not be retrieved.
    #[error(transparent)]
    Retrieval(#[from] SourceError),

    /// Desired configuration is not a flat JSON object.
    #[error("cannot decode desired configuration {name}, probably it has a wrong format: {source}")]
    DesiredDecode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The controller's configuration document is not the expected
    /// two-level JSON object.
    #[error("cannot decode controller configuration {name}, probably it has a wrong format: {source}")]
    RemoteDecode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A controller API call failed; the only retryable kind.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The write was accepted but the follow-up read found nothing.
    #[error("configuration {0} was not found after a successful write, check the controller logs")]
    Confirmation(String),
}

impl ReconcileError {
    /// Whether the supervisor should keep the loop alive and retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// Outcome of one reconciler invocation, as consumed by the supervisor.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Item(s) reconciled, or nothing needed doing.
    Success,

    /// A retryable failure; the supervisor sleeps the failure interval
    /// and runs another cycle.
    TransientFailure(ReconcileError),

    /// A failure requiring operator intervention; the supervisor logs it
    /// and stops.
    FatalFailure(ReconcileError),
}

impl From<ReconcileError> for CycleOutcome {
    fn from(err: ReconcileError) -> Self {
        if err.is_transient() {
            Self::TransientFailure(err)
        } else {
            Self::FatalFailure(err)
        }
    }
}
