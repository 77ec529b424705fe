//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables, parse intervals)
//!     → ProvisionerConfig (validated, immutable)
//!     → passed by value into the client, reconciler and supervisor
//! ```
//!
//! # Design Decisions
//! - Config is resolved once at startup; the loop never re-reads the
//!   environment between cycles
//! - Intervals default when absent, but a present-and-malformed interval
//!   is a startup error rather than a silent fallback
//! - The managed item set is a fixed table; items are never discovered
//!   at runtime

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::IntervalConfig;
pub use schema::ItemConfig;
pub use schema::ProvisionerConfig;
