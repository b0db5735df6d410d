// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modrinth projects via the v2 API.

use async_trait::async_trait;
use plugscout_config::LibraryConfig;
use plugscout_core::{LibrarySource, PlugscoutError, NOT_FOUND};
use serde::Deserialize;
use tracing::debug;

use crate::http::RegistryClient;

#[derive(Debug, Deserialize)]
struct ProjectVersion {
    version_number: String,
}

/// [`LibrarySource`] backed by `api.modrinth.com`.
///
/// The plugin name is used as the project slug (lower-cased). Modrinth lists
/// versions newest first.
#[derive(Debug, Clone)]
pub struct ModrinthSource {
    client: RegistryClient,
    base_url: String,
}

impl ModrinthSource {
    pub const NAME: &'static str = "modrinth";

    pub fn new(client: RegistryClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Result<Self, PlugscoutError> {
        Ok(Self::new(
            RegistryClient::new(Self::NAME, config)?,
            &config.modrinth_url,
        ))
    }
}

#[async_trait]
impl LibrarySource for ModrinthSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn latest_version(&self, plugin_name: &str) -> Result<String, PlugscoutError> {
        let slug = plugin_name.to_lowercase();
        let url = self
            .client
            .endpoint(&self.base_url, &["project", &slug, "version"])?;
        let versions: Option<Vec<ProjectVersion>> = self.client.get_json(url, &[]).await?;

        let latest = versions.and_then(|v| v.into_iter().next());
        debug!(plugin = plugin_name, found = latest.is_some(), "modrinth lookup done");
        Ok(latest.map_or_else(|| NOT_FOUND.to_string(), |v| v.version_number))
    }
}
