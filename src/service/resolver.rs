// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-layer resolution helpers.
//!
//! The environment is the highest-precedence source: a set, non-empty
//! variable wins and short-circuits the store and the literal default. An
//! unset or empty variable is "no override", and so is a malformed integer
//! override — the integer overrides are diagnostic-only, and a value that
//! fails to parse is discarded in favor of the next source rather than
//! surfaced as an error.

use std::env;

/// Returns the value of the environment variable if it is set and
/// non-empty.
///
/// # Examples
///
/// ```
/// use corecfg::service::resolver::env_value;
///
/// std::env::set_var("RESOLVER_DOC_VAR", "x");
/// assert_eq!(env_value("RESOLVER_DOC_VAR"), Some("x".to_string()));
/// std::env::remove_var("RESOLVER_DOC_VAR");
/// assert_eq!(env_value("RESOLVER_DOC_VAR"), None);
/// ```
pub fn env_value(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Returns the environment value, or the literal default when the variable
/// is unset or empty.
pub fn env_or(name: &str, default: &str) -> String {
    env_value(name).unwrap_or_else(|| default.to_string())
}

/// Returns the environment value, or the empty string.
///
/// Used by accessors whose value has no meaningful default and whose
/// emptiness the caller decides how to treat.
pub fn env_or_empty(name: &str) -> String {
    env_value(name).unwrap_or_default()
}

/// Splits a comma-separated environment value into a list.
///
/// An unset or empty variable yields an empty vec, never a vec containing
/// the empty string.
pub fn env_list(name: &str) -> Vec<String> {
    match env_value(name) {
        Some(value) => value.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Parses an integer environment override, falling back to the default when
/// the variable is unset or malformed.
///
/// A malformed override is logged at debug and otherwise ignored; it is
/// never an error.
pub fn env_i64_or(name: &str, default: i64) -> i64 {
    match env_value(name) {
        Some(value) => match value.parse::<i64>() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(
                    "ignoring malformed integer override {}='{}': {}",
                    name,
                    value,
                    e
                );
                default
            }
        },
        None => default,
    }
}
