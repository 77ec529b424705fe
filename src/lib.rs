//! Controller configuration provisioner library.

pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod reconcile;
pub mod source;
pub mod supervisor;

pub use config::ProvisionerConfig;
pub use controller::ControllerClient;
pub use lifecycle::Shutdown;
pub use reconcile::Reconciler;
pub use supervisor::Supervisor;
