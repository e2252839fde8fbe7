// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed system-configuration facade for a multi-service container registry
//! deployment.
//!
//! This crate resolves named configuration values (service URLs, credentials,
//! feature flags, database settings) from layered sources with a fixed
//! precedence — explicit environment variable, then a backing typed store,
//! then a hard-coded default — and lazily constructs two security-sensitive
//! objects owned for the lifetime of the process: a cryptographic key
//! provider and an inter-service secret store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `Scope`, `ConfigValue`,
//!   errors, composite settings models, `SecretStore`)
//! - **Ports**: Trait definitions (`ConfigStore`, `KeyProvider`)
//! - **Adapters**: Concrete implementations (in-memory store, file-backed
//!   key provider)
//! - **Service**: The `SystemConfig` facade exposing the typed accessor
//!   surface
//!
//! # Resolution order
//!
//! For every accessor that admits a deployment-time override, a non-empty
//! environment variable wins. Otherwise the backing store is queried under
//! an explicit [`Scope`](domain::Scope), and finally a literal default
//! applies. Malformed integer overrides are discarded in favor of the next
//! source rather than surfaced as errors; these overrides are
//! diagnostic-only and this is intentional.
//!
//! # Quick Start
//!
//! ```rust
//! use corecfg::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! store.set("ext_endpoint", "https://registry.example.com");
//!
//! let cfg = SystemConfig::new(store);
//! assert_eq!(cfg.ext_url(Scope::System), "registry.example.com");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{FileKeyProvider, MemoryStore};
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, Database, Metric, Postgres, Result, Scope,
        SecretStore,
    };
    pub use crate::ports::{ConfigStore, KeyProvider};
    pub use crate::service::{SystemConfig, SystemConfigBuilder};
}
