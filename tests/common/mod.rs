//! In-memory collaborators for reconciliation tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use onos_provisioner::config::ItemConfig;
use onos_provisioner::controller::{ApiError, ConfigService};
use onos_provisioner::source::{ConfigSource, SourceError};

pub fn item(name: &str, location: &str) -> ItemConfig {
    ItemConfig {
        name: name.to_string(),
        location: location.to_string(),
    }
}

#[derive(Default)]
pub struct ServiceState {
    remote: Mutex<HashMap<String, Vec<u8>>>,
    last_write: Mutex<Option<Vec<u8>>>,
    reads: AtomicU32,
    writes: AtomicU32,
    fail_reads: AtomicBool,
    fail_reads_from: AtomicU32,
    fail_writes: AtomicBool,
    drop_writes: AtomicBool,
}

/// Scriptable in-memory [`ConfigService`].
///
/// Clones share state so tests can inspect calls after handing the
/// service to a reconciler.
#[derive(Clone, Default)]
pub struct MockService(Arc<ServiceState>);

impl MockService {
    pub fn with_remote(name: &str, document: &str) -> Self {
        let service = Self::default();
        service.set_remote(name, document);
        service
    }

    pub fn set_remote(&self, name: &str, document: &str) {
        self.0
            .remote
            .lock()
            .unwrap()
            .insert(name.to_string(), document.as_bytes().to_vec());
    }

    pub fn stored(&self, name: &str) -> Option<Vec<u8>> {
        self.0.remote.lock().unwrap().get(name).cloned()
    }

    /// Raw payload of the most recent write call.
    pub fn last_write(&self) -> Option<Vec<u8>> {
        self.0.last_write.lock().unwrap().clone()
    }

    pub fn reads(&self) -> u32 {
        self.0.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> u32 {
        self.0.writes.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, on: bool) {
        self.0.fail_reads.store(on, Ordering::SeqCst);
    }

    /// Fail every read from the given ordinal on (1-based); earlier
    /// reads still succeed. Zero disables the switch.
    pub fn fail_reads_from(&self, ordinal: u32) {
        self.0.fail_reads_from.store(ordinal, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.0.fail_writes.store(on, Ordering::SeqCst);
    }

    /// Accept writes without storing them, so the confirmation read
    /// finds nothing.
    pub fn drop_writes(&self, on: bool) {
        self.0.drop_writes.store(on, Ordering::SeqCst);
    }
}

impl ConfigService for MockService {
    async fn read(&self, name: &str) -> Result<(Vec<u8>, bool), ApiError> {
        let ordinal = self.0.reads.fetch_add(1, Ordering::SeqCst) + 1;
        let fail_from = self.0.fail_reads_from.load(Ordering::SeqCst);
        if self.0.fail_reads.load(Ordering::SeqCst) || (fail_from > 0 && ordinal >= fail_from) {
            return Err(ApiError::new("connection refused"));
        }
        match self.0.remote.lock().unwrap().get(name) {
            Some(bytes) => Ok((bytes.clone(), true)),
            None => Ok((Vec::new(), false)),
        }
    }

    async fn write(&self, name: &str, payload: &[u8]) -> Result<(), ApiError> {
        self.0.writes.fetch_add(1, Ordering::SeqCst);
        if self.0.fail_writes.load(Ordering::SeqCst) {
            return Err(ApiError::new("connection refused"));
        }
        *self.0.last_write.lock().unwrap() = Some(payload.to_vec());
        if !self.0.drop_writes.load(Ordering::SeqCst) {
            // Store what the controller would serve back: the accepted
            // flat config nested under its component name.
            let flat: serde_json::Value =
                serde_json::from_slice(payload).map_err(|e| ApiError::new(e.to_string()))?;
            let mut document = serde_json::Map::new();
            document.insert(name.to_string(), flat);
            let document = serde_json::Value::Object(document);
            self.0
                .remote
                .lock()
                .unwrap()
                .insert(name.to_string(), document.to_string().into_bytes());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SourceState {
    files: Mutex<HashMap<String, Vec<u8>>>,
    gets: AtomicU32,
}

/// In-memory [`ConfigSource`] keyed by location.
#[derive(Clone, Default)]
pub struct MockSource(Arc<SourceState>);

impl MockSource {
    pub fn with_file(location: &str, content: &[u8]) -> Self {
        let source = Self::default();
        source.insert(location, content);
        source
    }

    pub fn insert(&self, location: &str, content: &[u8]) {
        self.0
            .files
            .lock()
            .unwrap()
            .insert(location.to_string(), content.to_vec());
    }

    pub fn gets(&self) -> u32 {
        self.0.gets.load(Ordering::SeqCst)
    }
}

impl ConfigSource for MockSource {
    fn get(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        self.0.gets.fetch_add(1, Ordering::SeqCst);
        self.0
            .files
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .ok_or_else(|| SourceError {
                location: location.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such location"),
            })
    }
}
