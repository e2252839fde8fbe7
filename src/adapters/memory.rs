// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration store adapter.
//!
//! A `ConfigStore` backed by a hash map, used to wire the facade in tests
//! and in deployments where the persisted store is seeded at startup.
//! Values are held as strings and converted on read, matching the zero-value
//! semantics of the store contract: a missing or unparsable entry yields
//! `""`, `false`, or `0`.

use crate::domain::{ConfigKey, ConfigValue, Scope};
use crate::ports::ConfigStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// An in-memory implementation of [`ConfigStore`].
///
/// All scopes share one map today; the scope argument is accepted to honor
/// the store contract and ignored until per-tenant scopes exist.
///
/// # Examples
///
/// ```rust
/// use corecfg::adapters::MemoryStore;
/// use corecfg::ports::ConfigStore;
/// use corecfg::domain::Scope;
///
/// let store = MemoryStore::new();
/// store.set("with_trivy", "true");
/// store.set("metric_port", "9090");
///
/// assert!(store.get_str(Scope::System, "with_trivy") == "true");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, ConfigValue>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated from key-value pairs.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        MemoryStore {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }

    /// Sets a value, replacing any previous entry for the key.
    pub fn set(&self, key: &str, value: &str) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), ConfigValue::from(value));
    }

    /// Removes a value if present.
    pub fn remove(&self, key: &str) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(key.as_str()).cloned()
    }
}

impl ConfigStore for MemoryStore {
    fn get_string(&self, _scope: Scope, key: &ConfigKey) -> String {
        self.get(key).map(|v| v.as_string()).unwrap_or_default()
    }

    fn get_bool(&self, _scope: Scope, key: &ConfigKey) -> bool {
        match self.get(key) {
            Some(value) => value.as_bool(key.as_str()).unwrap_or_else(|e| {
                tracing::debug!("unparsable boolean for key '{}': {}", key, e);
                false
            }),
            None => false,
        }
    }

    fn get_int(&self, _scope: Scope, key: &ConfigKey) -> i32 {
        match self.get(key) {
            Some(value) => value.as_i32(key.as_str()).unwrap_or_else(|e| {
                tracing::debug!("unparsable integer for key '{}': {}", key, e);
                0
            }),
            None => 0,
        }
    }
}
