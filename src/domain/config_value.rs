// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! `ConfigValue` stores values as strings, the lowest common denominator of
//! every source, and converts to concrete types at the point of use. Sources
//! stay uniform; type errors carry the key they occurred on.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for configuration values.
///
/// # Examples
///
/// ```
/// use corecfg::domain::ConfigValue;
///
/// let value = ConfigValue::from("5432");
/// assert_eq!(value.as_i32("postgresql_port").unwrap(), 5432);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns true if the value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes `true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off`,
    /// case-insensitively.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.0
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_and_string() {
        let value = ConfigValue::from("registry");
        assert_eq!(value.as_str(), "registry");
        assert_eq!(value.as_string(), "registry");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ConfigValue::default().is_empty());
    }

    #[test]
    fn test_as_bool_true_variants() {
        for val in ["true", "True", "TRUE", "yes", "1", "on"] {
            assert!(
                ConfigValue::from(val).as_bool("with_trivy").unwrap(),
                "failed for value: {}",
                val
            );
        }
    }

    #[test]
    fn test_as_bool_false_variants() {
        for val in ["false", "No", "0", "off"] {
            assert!(
                !ConfigValue::from(val).as_bool("with_trivy").unwrap(),
                "failed for value: {}",
                val
            );
        }
    }

    #[test]
    fn test_as_bool_invalid() {
        assert!(ConfigValue::from("maybe").as_bool("with_trivy").is_err());
    }

    #[test]
    fn test_as_i32() {
        assert_eq!(ConfigValue::from("-42").as_i32("k").unwrap(), -42);
        assert!(ConfigValue::from("3.14").as_i32("k").is_err());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(
            ConfigValue::from("9223372036854775807").as_i64("k").unwrap(),
            9223372036854775807
        );
        assert!(ConfigValue::from("not-a-number").as_i64("k").is_err());
    }

    #[test]
    fn test_conversion_error_names_key() {
        let err = ConfigValue::from("x").as_i32("metric_port").unwrap_err();
        assert!(err.to_string().contains("metric_port"));
    }

    #[test]
    fn test_display_round_trip() {
        let value = ConfigValue::from("http://core:8080");
        assert_eq!(format!("{}", value), "http://core:8080");
        let s: String = value.into();
        assert_eq!(s, "http://core:8080");
    }
}
