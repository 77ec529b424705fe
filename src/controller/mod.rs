//! Controller API access.
//!
//! # Responsibilities
//! - Define the seam the reconciler uses to read and write controller
//!   configuration
//! - Provide the HTTP implementation against the controller's
//!   configuration REST endpoint
//!
//! # Design Decisions
//! - Every transport or HTTP failure surfaces as [`ApiError`], the one
//!   error kind the supervisor treats as retryable
//! - A 404 on read is not an error; it maps to `found = false` so the
//!   reconciler can provision the missing item

use std::future::Future;

pub mod client;

pub use client::ClientError;
pub use client::ControllerClient;

/// Controller API failure: network, timeout or a non-success response.
#[derive(Debug, thiserror::Error)]
#[error("controller API request failed: {msg}")]
pub struct ApiError {
    pub msg: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Read and write access to named controller configurations.
pub trait ConfigService: Send + Sync {
    /// Fetch the configuration stored under `name`.
    ///
    /// Returns the raw response body and whether the controller holds the
    /// item at all.
    fn read(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<(Vec<u8>, bool), ApiError>> + Send;

    /// Push `payload` as the configuration for `name`.
    fn write(
        &self,
        name: &str,
        payload: &[u8],
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
