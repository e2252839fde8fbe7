// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory secret-to-principal store for service-to-service calls.
//!
//! When one internal component calls another it asserts a shared secret;
//! the receiving side looks the secret up here to learn which principal is
//! calling. The store is built once from a literal mapping and is immutable
//! afterwards. Today the only entry is the job service, but the shape
//! supports any number of principal/secret pairs.

use std::collections::HashMap;

/// Principal name asserted by the job service.
pub const JOBSERVICE_USER: &str = "jobservice";

/// Principal name asserted by the core service.
pub const CORE_USER: &str = "core";

/// An immutable mapping from shared-secret value to principal identity.
///
/// # Examples
///
/// ```
/// use corecfg::domain::secret::{SecretStore, JOBSERVICE_USER};
/// use std::collections::HashMap;
///
/// let mut m = HashMap::new();
/// m.insert("abc".to_string(), JOBSERVICE_USER.to_string());
/// let store = SecretStore::new(m);
///
/// assert_eq!(store.principal("abc"), Some(JOBSERVICE_USER));
/// assert!(store.is_valid("abc"));
/// assert!(!store.is_valid("xyz"));
/// ```
#[derive(Clone, Debug)]
pub struct SecretStore {
    secrets: HashMap<String, String>,
}

impl SecretStore {
    /// Creates a store from a secret-to-principal mapping.
    pub fn new(secrets: HashMap<String, String>) -> Self {
        SecretStore { secrets }
    }

    /// Returns the principal asserting the given secret, if the secret is
    /// known.
    pub fn principal(&self, secret: &str) -> Option<&str> {
        self.secrets.get(secret).map(String::as_str)
    }

    /// Returns true if the secret belongs to a known principal.
    pub fn is_valid(&self, secret: &str) -> bool {
        self.secrets.contains_key(secret)
    }

    /// Number of registered principal/secret pairs.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Returns true if no pairs are registered.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}
