// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backing typed configuration store trait.
//!
//! The persisted store is an external collaborator; this trait captures the
//! contract the facade relies on and nothing more. Queries never fail: a
//! missing or malformed entry yields the type's zero value (empty string,
//! `false`, `0`). Precedence against environment overrides and literal
//! defaults is the facade's job, not the store's.

use crate::domain::{ConfigKey, Scope};

/// A typed key-value configuration store queried under an explicit scope.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; any accessor may be called from
/// any thread.
///
/// # Examples
///
/// ```rust
/// use corecfg::ports::ConfigStore;
/// use corecfg::domain::{ConfigKey, Scope};
///
/// struct FixedStore;
///
/// impl ConfigStore for FixedStore {
///     fn get_string(&self, _scope: Scope, key: &ConfigKey) -> String {
///         if key.as_str() == "core_url" {
///             "http://core:8080".to_string()
///         } else {
///             String::new()
///         }
///     }
///
///     fn get_bool(&self, _scope: Scope, _key: &ConfigKey) -> bool {
///         false
///     }
///
///     fn get_int(&self, _scope: Scope, _key: &ConfigKey) -> i32 {
///         0
///     }
/// }
/// ```
pub trait ConfigStore: Send + Sync {
    /// Returns the string value for `key` under `scope`, or `""` if absent.
    fn get_string(&self, scope: Scope, key: &ConfigKey) -> String;

    /// Returns the boolean value for `key` under `scope`, or `false` if
    /// absent or unparsable.
    fn get_bool(&self, scope: Scope, key: &ConfigKey) -> bool;

    /// Returns the integer value for `key` under `scope`, or `0` if absent
    /// or unparsable.
    fn get_int(&self, scope: Scope, key: &ConfigKey) -> i32;

    /// Convenience form of [`ConfigStore::get_string`] taking the key as a
    /// string slice.
    fn get_str(&self, scope: Scope, key: &str) -> String {
        self.get_string(scope, &ConfigKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ZeroStore;

    impl ConfigStore for ZeroStore {
        fn get_string(&self, _scope: Scope, _key: &ConfigKey) -> String {
            String::new()
        }

        fn get_bool(&self, _scope: Scope, _key: &ConfigKey) -> bool {
            false
        }

        fn get_int(&self, _scope: Scope, _key: &ConfigKey) -> i32 {
            0
        }
    }

    #[test]
    fn test_zero_values_for_missing_keys() {
        let store = ZeroStore;
        let key = ConfigKey::from("anything");
        assert_eq!(store.get_string(Scope::System, &key), "");
        assert!(!store.get_bool(Scope::System, &key));
        assert_eq!(store.get_int(Scope::System, &key), 0);
    }

    #[test]
    fn test_get_str_delegates() {
        let store = ZeroStore;
        assert_eq!(store.get_str(Scope::System, "ext_endpoint"), "");
    }

    #[test]
    fn test_config_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConfigStore>();
    }
}
