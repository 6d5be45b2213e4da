// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key-value store adapters.
//!
//! The coordinator mirrors each claimed run timestamp here so it survives
//! cache eviction and restarts. Audit-only: nothing reads it back.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key-value store surviving cache eviction and restarts.
#[async_trait]
pub trait DurableStore: Clone + Send + Sync + 'static {
    /// Set a key, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store using a dotenv-style `key=value` file.
///
/// Each write re-reads the file, merges the key, and writes the whole file
/// back. Safe for the low write frequency of claim mirroring.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Read a single key back. Inspection helper, not part of the
    /// [`DurableStore`] contract.
    pub fn get(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(read_kv_file(&self.path)?.get(key).cloned())
    }
}

#[async_trait]
impl DurableStore for FileStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = read_kv_file(&self.path)?;
        entries.insert(key.to_string(), value.to_string());
        write_kv_file(&self.path, &entries)?;
        Ok(())
    }
}

/// Parse a dotenv-style file into ordered key-value pairs.
/// Returns an empty map if the file doesn't exist.
fn read_kv_file(path: &Path) -> std::io::Result<BTreeMap<String, String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e),
    };
    Ok(parse_kv(&content))
}

/// Parse `key=value` lines; blank lines and `#` comments are skipped.
fn parse_kv(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(eq_pos) = trimmed.find('=') {
            let key = trimmed[..eq_pos].trim().to_string();
            let value = trimmed[eq_pos + 1..].to_string();
            if !key.is_empty() {
                map.insert(key, value);
            }
        }
    }
    map
}

/// Write the map back as `key=value` lines. Creates parent directories.
fn write_kv_file(path: &Path, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content: String = entries
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, content + "\n")
}

/// Fake store for testing
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    inner: Arc<parking_lot::Mutex<FakeStoreState>>,
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
struct FakeStoreState {
    writes: Vec<(String, String)>,
    fail: bool,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded writes, in order
    pub fn writes(&self) -> Vec<(String, String)> {
        self.inner.lock().writes.clone()
    }

    /// Last value written for a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .writes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Make every subsequent write fail
    pub fn set_failing(&self, fail: bool) {
        self.inner.lock().fail = fail;
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl DurableStore for FakeStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        if state.fail {
            return Err(StoreError::Io(std::io::Error::other("injected failure")));
        }
        state.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
