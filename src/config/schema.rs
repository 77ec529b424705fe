//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! provisioner. The set of managed items and the loop intervals are fixed
//! here at startup; nothing re-reads the environment once the process is
//! running.

use std::time::Duration;

/// Component id of the controller's LLDP link provider.
pub const LLDP_LINK_PROVIDER: &str = "org.onosproject.provider.lldp.impl.LldpLinkProvider";

/// Component id of the controller's OLT flow service.
pub const OLT_FLOW_SERVICE: &str = "org.opencord.olt.impl.OltFlowService";

/// Root configuration for the provisioner.
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// Controller API endpoint and credentials.
    pub controller: ControllerConfig,

    /// Managed configuration items, reconciled in declaration order.
    pub items: Vec<ItemConfig>,

    /// Sleep intervals between reconciliation cycles.
    pub intervals: IntervalConfig,
}

/// Controller API connection settings.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller base URL (e.g., "http://onos:8181").
    pub address: String,

    /// Basic auth login; empty disables auth.
    pub login: String,

    /// Basic auth password.
    pub password: String,
}

/// One managed configuration item.
#[derive(Debug, Clone)]
pub struct ItemConfig {
    /// Component name the controller knows this configuration by.
    pub name: String,

    /// Location the desired configuration is read from.
    pub location: String,
}

/// Sleep intervals applied between reconciliation cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalConfig {
    /// Sleep after a cycle where every item reconciled cleanly.
    pub after_success: Duration,

    /// Sleep after a cycle that hit a transient controller failure.
    pub after_failure: Duration,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            after_success: Duration::from_secs(10),
            after_failure: Duration::from_secs(1),
        }
    }
}
