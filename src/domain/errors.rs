// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for configuration resolution.
//!
//! All errors use `thiserror`. The taxonomy is small on purpose: a value
//! with no sensible default that resolves to empty is
//! [`ConfigError::MissingRequiredValue`]; a typed conversion that fails at
//! the point of use is [`ConfigError::TypeConversionError`]; collaborator
//! failures (the key provider's file read, for instance) pass through
//! unwrapped. Malformed environment overrides are *not* errors — the
//! resolver discards them in favor of the next source.

use std::num::ParseIntError;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Marked `#[non_exhaustive]` to allow future additions without breaking
/// backwards compatibility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required configuration value resolved to empty and has no default.
    #[error("missing required configuration value: {key}")]
    MissingRequiredValue {
        /// The key that resolved to empty
        key: String,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A key provider failed to produce key material.
    #[error("key provider error: {message}")]
    KeyProviderError {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration or key material.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `TypeConversionError` from a `ParseIntError`.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a `TypeConversionError` from a `ParseBoolError`.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
