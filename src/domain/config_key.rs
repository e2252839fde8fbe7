// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype and resolution scope.
//!
//! `ConfigKey` is a newtype wrapper around `String` that provides type safety
//! for persisted-store keys and prevents accidental string confusion. `Scope`
//! names the namespace a key is resolved under.
//!
//! Note that the environment-variable spelling of a setting and its
//! store-key spelling are two different identifiers on purpose; the same
//! logical setting is reconciled by resolution order, not by a shared key.

use std::fmt;

/// The namespace under which a persisted configuration key is resolved.
///
/// Today every caller resolves under the shared [`Scope::System`] namespace;
/// the enum is non-exhaustive so per-tenant scopes can be added without
/// breaking the `ConfigStore` contract. Accessors take the scope explicitly
/// so the decision is visible at the call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Scope {
    /// The shared, deployment-wide namespace.
    System,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::System => write!(f, "system"),
        }
    }
}

/// A type-safe wrapper for persisted-store configuration keys.
///
/// # Examples
///
/// ```
/// use corecfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("postgresql_host");
/// assert_eq!(key.as_str(), "postgresql_host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
