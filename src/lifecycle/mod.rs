//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT (ctrl-c)
//!     → listener task triggers the Shutdown broadcast
//!     → supervisor wakes from its interval sleep and exits the loop
//!     → main's join on the loop task completes, process exits
//! ```
//!
//! # Design Decisions
//! - One broadcast channel serves every long-running task
//! - The supervisor never polls a flag; cancellation is raced against
//!   the interval timer so latency stays bounded

pub mod shutdown;

pub use shutdown::Shutdown;
