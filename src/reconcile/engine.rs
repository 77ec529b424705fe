//! The reconciler: diff, push and verify.

use crate::config::schema::ItemConfig;
use crate::controller::ConfigService;
use crate::reconcile::diff::{self, FlatConfig};
use crate::reconcile::{CycleOutcome, ReconcileError};
use crate::source::ConfigSource;

/// Reconciles desired configuration against the controller's live state.
pub struct Reconciler<C, S> {
    service: C,
    source: S,
    items: Vec<ItemConfig>,
}

impl<C: ConfigService, S: ConfigSource> Reconciler<C, S> {
    pub fn new(service: C, source: S, items: Vec<ItemConfig>) -> Self {
        Self {
            service,
            source,
            items,
        }
    }

    /// Reconcile every item in declaration order.
    ///
    /// The cycle aborts on the first failing item; remaining items wait
    /// for the next cycle.
    pub async fn run_cycle(&self) -> CycleOutcome {
        for item in &self.items {
            match self.reconcile(item).await {
                CycleOutcome::Success => continue,
                failure => return failure,
            }
        }
        CycleOutcome::Success
    }

    /// Reconcile a single item.
    pub async fn reconcile(&self, item: &ItemConfig) -> CycleOutcome {
        match self.reconcile_item(item).await {
            Ok(()) => CycleOutcome::Success,
            Err(err) => err.into(),
        }
    }

    async fn reconcile_item(&self, item: &ItemConfig) -> Result<(), ReconcileError> {
        tracing::info!(name = %item.name, "reconciling controller configuration");

        let desired = self.source.get(&item.location)?;
        if desired.is_empty() {
            tracing::info!(
                name = %item.name,
                location = %item.location,
                "nothing to provision"
            );
            return Ok(());
        }
        tracing::debug!(
            name = %item.name,
            desired = %String::from_utf8_lossy(&desired),
            "desired configuration loaded"
        );

        let desired_map =
            diff::decode_desired(&desired).map_err(|source| ReconcileError::DesiredDecode {
                name: item.name.clone(),
                source,
            })?;
        if desired_map.is_empty() {
            tracing::info!(
                name = %item.name,
                location = %item.location,
                "nothing to provision"
            );
            return Ok(());
        }

        if !self.is_diverged(item, &desired_map).await? {
            tracing::info!(
                name = %item.name,
                "configuration already matches the controller, no provisioning needed"
            );
            return Ok(());
        }

        self.service.write(&item.name, &desired).await?;

        let (confirmation, found) = self.service.read(&item.name).await?;
        if !found {
            return Err(ReconcileError::Confirmation(item.name.clone()));
        }
        tracing::info!(name = %item.name, "configuration provisioned");
        tracing::debug!(
            name = %item.name,
            response = %String::from_utf8_lossy(&confirmation),
            "controller confirmation"
        );

        Ok(())
    }

    async fn is_diverged(
        &self,
        item: &ItemConfig,
        desired_map: &FlatConfig,
    ) -> Result<bool, ReconcileError> {
        let (remote, found) = self.service.read(&item.name).await?;
        if !found || remote.is_empty() {
            return Ok(true);
        }

        let remote_map =
            diff::decode_remote(&remote).map_err(|source| ReconcileError::RemoteDecode {
                name: item.name.clone(),
                source,
            })?;

        let diverged = diff::is_diverged(desired_map, &remote_map, &item.name);
        if diverged {
            tracing::debug!(
                name = %item.name,
                remote = %String::from_utf8_lossy(&remote),
                "controller configuration differs from the desired configuration"
            );
        }
        Ok(diverged)
    }
}
