// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete collaborator implementations.
//!
//! This module contains the in-process implementations of the ports: an
//! in-memory typed store and a file-backed key provider.

pub mod file_key;
pub mod memory;

// Re-export adapters
pub use file_key::FileKeyProvider;
pub use memory::MemoryStore;
