// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed key provider adapter.
//!
//! Construction only records the path; the key file is read on every `get`
//! call so a rotated file takes effect without restarting the process.

use crate::domain::{ConfigError, Result};
use crate::ports::KeyProvider;
use std::fs;
use std::path::{Path, PathBuf};

/// A [`KeyProvider`] that reads key material from a file on each call.
///
/// # Examples
///
/// ```rust,no_run
/// use corecfg::adapters::FileKeyProvider;
/// use corecfg::ports::KeyProvider;
///
/// let provider = FileKeyProvider::new("/etc/core/key");
/// let key = provider.get(None)?;
/// # Ok::<(), corecfg::domain::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileKeyProvider {
    path: PathBuf,
}

impl FileKeyProvider {
    /// Creates a provider bound to the given key file path.
    ///
    /// The file is not touched here; existence and readability are checked
    /// on each [`KeyProvider::get`] call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileKeyProvider { path: path.into() }
    }

    /// The path this provider reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyProvider for FileKeyProvider {
    fn get(&self, _name: Option<&str>) -> Result<String> {
        let material = fs::read_to_string(&self.path)?;
        let material = material.trim_end_matches(['\r', '\n']);
        if material.is_empty() {
            return Err(ConfigError::KeyProviderError {
                message: format!("empty key file: {}", self.path.display()),
                source: None,
            });
        }
        Ok(material.to_string())
    }
}
