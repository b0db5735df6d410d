// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote plugin library abstraction.

use async_trait::async_trait;

use crate::error::PlugscoutError;

/// Answers "what is the newest published version of this plugin".
#[async_trait]
pub trait LibrarySource: Send + Sync + 'static {
    /// Selector this source is registered under (e.g. `"spigot"`).
    fn name(&self) -> &str;

    /// Latest published version for `plugin_name`.
    ///
    /// An unknown plugin is not an error: it yields [`crate::NOT_FOUND`].
    /// Transport, timeout and decode failures surface as
    /// [`PlugscoutError::SourceUnavailable`].
    async fn latest_version(&self, plugin_name: &str) -> Result<String, PlugscoutError>;
}
