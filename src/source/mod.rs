//! Desired-configuration sources.
//!
//! # Responsibilities
//! - Define the seam through which the reconciler obtains desired
//!   configuration bytes for an item's location
//! - Provide the filesystem implementation used in production
//!
//! # Design Decisions
//! - Reads are synchronous; desired configs are small local files and the
//!   reconciler awaits nothing while loading them
//! - An unreadable location is an error; an empty file is a valid
//!   "nothing to provision" state handled by the reconciler

use std::fs;
use std::path::Path;

/// Error returned when a source cannot produce desired configuration.
#[derive(Debug, thiserror::Error)]
#[error("cannot read desired configuration from {location}: {source}")]
pub struct SourceError {
    pub location: String,
    #[source]
    pub source: std::io::Error,
}

/// Supplier of raw desired-configuration bytes.
pub trait ConfigSource: Send + Sync {
    /// Return the desired configuration stored at `location`.
    fn get(&self, location: &str) -> Result<Vec<u8>, SourceError>;
}

/// Filesystem-backed [`ConfigSource`]; locations are file paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl ConfigSource for FileSource {
    fn get(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        fs::read(Path::new(location)).map_err(|source| SourceError {
            location: location.to_string(),
            source,
        })
    }
}
