//! Decoding and comparison of desired vs remote configuration.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Desired configuration: flat key → scalar value.
pub type FlatConfig = BTreeMap<String, Value>;

/// Controller configuration document: component name → flat config.
pub type RemoteConfig = HashMap<String, FlatConfig>;

/// Decode desired configuration bytes into a flat mapping.
pub fn decode_desired(bytes: &[u8]) -> serde_json::Result<FlatConfig> {
    serde_json::from_slice(bytes)
}

/// Decode a controller configuration document.
pub fn decode_remote(bytes: &[u8]) -> serde_json::Result<RemoteConfig> {
    serde_json::from_slice(bytes)
}

/// Whether the remote slice for `name` diverges from the desired mapping.
///
/// Values compare by string representation, so JSON number `1` equals
/// string `"1"`. Keys present only remotely are ignored; a missing or
/// empty slice counts as diverged.
pub fn is_diverged(desired: &FlatConfig, remote: &RemoteConfig, name: &str) -> bool {
    let Some(slice) = remote.get(name) else {
        return true;
    };

    desired.iter().any(|(key, want)| match slice.get(key) {
        None => true,
        Some(have) => scalar_repr(have) != scalar_repr(want),
    })
}

fn scalar_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(json: &str) -> FlatConfig {
        decode_desired(json.as_bytes()).unwrap()
    }

    fn remote(json: &str) -> RemoteConfig {
        decode_remote(json.as_bytes()).unwrap()
    }

    #[test]
    fn equal_values_of_different_json_types_match() {
        let desired = flat(r#"{"a":"1","b":"2","c":"true"}"#);
        let current = remote(r#"{"svc":{"a":1,"b":"2","c":true}}"#);
        assert!(!is_diverged(&desired, &current, "svc"));
    }

    #[test]
    fn differing_value_diverges() {
        let desired = flat(r#"{"a":"1"}"#);
        let current = remote(r#"{"svc":{"a":"2"}}"#);
        assert!(is_diverged(&desired, &current, "svc"));
    }

    #[test]
    fn missing_key_diverges() {
        let desired = flat(r#"{"a":"1","b":"2"}"#);
        let current = remote(r#"{"svc":{"a":"1"}}"#);
        assert!(is_diverged(&desired, &current, "svc"));
    }

    #[test]
    fn extra_remote_keys_are_ignored() {
        let desired = flat(r#"{"a":"1"}"#);
        let current = remote(r#"{"svc":{"a":"1","z":"unmanaged"}}"#);
        assert!(!is_diverged(&desired, &current, "svc"));
    }

    #[test]
    fn missing_or_empty_slice_diverges() {
        let desired = flat(r#"{"a":"1"}"#);
        assert!(is_diverged(&desired, &remote(r#"{}"#), "svc"));
        assert!(is_diverged(&desired, &remote(r#"{"svc":{}}"#), "svc"));
        assert!(is_diverged(
            &desired,
            &remote(r#"{"other":{"a":"1"}}"#),
            "svc"
        ));
    }

    #[test]
    fn non_object_remote_document_fails_decoding() {
        assert!(decode_remote(br#"{"svc":"scalar"}"#).is_err());
        assert!(decode_remote(b"[]").is_err());
        assert!(decode_desired(b"not json").is_err());
    }
}
