// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage-medium abstraction used for plugin discovery.

use std::path::Path;

use async_trait::async_trait;

use crate::error::PlugscoutError;

/// Lists plugin folders and reads single files out of archives.
///
/// Implementations do no caching: every call goes back to the medium.
#[async_trait]
pub trait FileBackend: Send + Sync + 'static {
    /// Selector this backend is registered under (e.g. `"local"`).
    fn protocol(&self) -> &str;

    /// Returns entry names in `location`, in whatever order the medium yields them.
    ///
    /// Fails with [`PlugscoutError::NotFound`] if `location` does not exist.
    async fn list_entries(&self, location: &Path) -> Result<Vec<String>, PlugscoutError>;

    /// Returns the raw bytes of `inner_file` inside the archive at `entry_path`.
    ///
    /// Fails with [`PlugscoutError::CorruptArchive`] if the archive cannot be
    /// opened and [`PlugscoutError::MissingManifest`] if `inner_file` is absent.
    async fn extract_file(
        &self,
        entry_path: &Path,
        inner_file: &str,
    ) -> Result<Vec<u8>, PlugscoutError>;
}
