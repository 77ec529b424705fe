//! Configuration loading from the process environment.

use std::env;
use std::time::Duration;

use crate::config::schema::{
    ControllerConfig, IntervalConfig, ItemConfig, ProvisionerConfig, LLDP_LINK_PROVIDER,
    OLT_FLOW_SERVICE,
};

/// Environment variable naming the controller base URL.
pub const VAR_API_ADDRESS: &str = "ONOS_API_ADDRESS";
/// Environment variables for basic auth credentials.
pub const VAR_API_LOGIN: &str = "ONOS_API_LOGIN";
pub const VAR_API_PASS: &str = "ONOS_API_PASS";
/// Environment variables for the per-cycle sleep intervals.
pub const VAR_SLEEP_AFTER_SUCCESS: &str = "SLEEP_AFTER_SUCCESS";
pub const VAR_SLEEP_AFTER_FAILURE: &str = "SLEEP_AFTER_FAILURE";

/// Managed components and the variable naming each one's config location.
const MANAGED_COMPONENTS: &[(&str, &str)] = &[
    (
        LLDP_LINK_PROVIDER,
        "ONOS_COMPONENT_LLDPLINKPROVIDER_CONFIG_FILE",
    ),
    (OLT_FLOW_SERVICE, "ONOS_COMPONENT_OLTFLOWSERVICE_CONFIG_FILE"),
];

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    MissingSetting(&'static str),

    #[error("invalid duration {value:?} in {key}: {reason}")]
    InvalidInterval {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ProvisionerConfig {
    /// Build the full configuration from the environment in one pass.
    ///
    /// Every setting is resolved here; a missing required variable or a
    /// malformed interval fails loading before any reconciliation work
    /// starts.
    pub fn from_env() -> Result<Self, ConfigError> {
        let controller = ControllerConfig {
            address: require_var(VAR_API_ADDRESS)?,
            login: read_var(VAR_API_LOGIN).unwrap_or_default(),
            password: read_var(VAR_API_PASS).unwrap_or_default(),
        };

        let mut items = Vec::with_capacity(MANAGED_COMPONENTS.len());
        for &(name, location_var) in MANAGED_COMPONENTS {
            items.push(ItemConfig {
                name: name.to_string(),
                location: require_var(location_var)?,
            });
        }

        let defaults = IntervalConfig::default();
        let intervals = IntervalConfig {
            after_success: read_interval(VAR_SLEEP_AFTER_SUCCESS, defaults.after_success)?,
            after_failure: read_interval(VAR_SLEEP_AFTER_FAILURE, defaults.after_failure)?,
        };

        Ok(Self {
            controller,
            items,
            intervals,
        })
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn require_var(key: &'static str) -> Result<String, ConfigError> {
    read_var(key).ok_or(ConfigError::MissingSetting(key))
}

fn read_interval(key: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match read_var(key) {
        None => Ok(default),
        Some(value) => parse_duration(&value).map_err(|reason| ConfigError::InvalidInterval {
            key,
            value,
            reason,
        }),
    }
}

/// Parse a duration string of the form `<integer><unit>`, where the unit is
/// one of `ms`, `s`, `m`, `h` (e.g., "250ms", "1s", "5m").
///
/// Exactly one integer and one unit: compound ("1m30s") and fractional
/// ("1.5s") forms are rejected.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    let digits = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(digits);

    let number: u64 = number
        .parse()
        .map_err(|_| "expected an integer count before the unit".to_string())?;

    match unit {
        "ms" => Ok(Duration::from_millis(number)),
        "s" => Ok(Duration::from_secs(number)),
        "m" => Ok(Duration::from_secs(number.saturating_mul(60))),
        "h" => Ok(Duration::from_secs(number.saturating_mul(3600))),
        "" => Err("missing unit (expected ms, s, m or h)".to_string()),
        other => Err(format!("unknown unit {other:?} (expected ms, s, m or h)")),
    }
}
