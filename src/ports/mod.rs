// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits define the seams between the facade and its collaborators:
//! the backing typed store and the cryptographic key provider. Concrete
//! implementations live in the adapters layer.

pub mod key_provider;
pub mod store;

// Re-export commonly used types
pub use key_provider::KeyProvider;
pub use store::ConfigStore;
