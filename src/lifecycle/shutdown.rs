//! Shutdown coordination for the provisioner.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// The supervisor subscribes before starting; the signal listener triggers
/// the channel when an interrupt arrives. A subscriber sleeping in a
/// `select!` wakes as soon as the signal is delivered.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
