// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the system-configuration facade.
//!
//! This module contains the [`SystemConfig`] facade with its typed accessor
//! surface, the environment-layer resolution helpers, the pure derivation
//! functions, and the key and default constants shared by all of them.

pub mod derived;
pub mod keys;
pub mod resolver;
pub mod system;

// Re-export commonly used types
pub use system::{SystemConfig, SystemConfigBuilder};
