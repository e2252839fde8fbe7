// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and business logic.
//!
//! This module defines the fundamental concepts used throughout the crate:
//! configuration keys and scopes, typed values, composite settings models,
//! the secret store, and the error taxonomy. It is independent of any
//! concrete configuration source.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod models;
pub mod secret;

// Re-export commonly used types
pub use config_key::{ConfigKey, Scope};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use models::{Database, Metric, Postgres};
pub use secret::SecretStore;
