// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cryptographic key provider trait.
//!
//! The key provider supplies the key material used to encrypt and decrypt
//! stored secrets. The facade records where the key lives at initialization
//! time; the material itself is fetched on every call, never cached here.

use crate::domain::Result;

/// A source of cryptographic key material.
///
/// The `name` parameter selects among multiple keys; it is reserved for
/// future multi-key lookups and every current caller passes `None`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; `get` may be called concurrently
/// from any number of threads.
///
/// # Examples
///
/// ```rust
/// use corecfg::ports::KeyProvider;
/// use corecfg::domain::Result;
///
/// struct FixedKey;
///
/// impl KeyProvider for FixedKey {
///     fn get(&self, _name: Option<&str>) -> Result<String> {
///         Ok("not-a-real-key".to_string())
///     }
/// }
///
/// let provider = FixedKey;
/// assert_eq!(provider.get(None).unwrap(), "not-a-real-key");
/// ```
pub trait KeyProvider: Send + Sync {
    /// Returns the key material, optionally selected by name.
    fn get(&self, name: Option<&str>) -> Result<String>;
}
