// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PaperMC Hangar projects.

use async_trait::async_trait;
use plugscout_config::LibraryConfig;
use plugscout_core::{LibrarySource, PlugscoutError, NOT_FOUND};
use tracing::debug;

use crate::http::RegistryClient;

/// [`LibrarySource`] backed by `hangar.papermc.io`.
///
/// `latestrelease` answers with the bare version string as plain text.
#[derive(Debug, Clone)]
pub struct HangarSource {
    client: RegistryClient,
    base_url: String,
}

impl HangarSource {
    pub const NAME: &'static str = "hangar";

    pub fn new(client: RegistryClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Result<Self, PlugscoutError> {
        Ok(Self::new(
            RegistryClient::new(Self::NAME, config)?,
            &config.hangar_url,
        ))
    }
}

#[async_trait]
impl LibrarySource for HangarSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn latest_version(&self, plugin_name: &str) -> Result<String, PlugscoutError> {
        let url = self
            .client
            .endpoint(&self.base_url, &["projects", plugin_name, "latestrelease"])?;
        let body = self.client.get_text(url).await?;

        let version = body
            .map(|b| b.trim().trim_matches('"').to_string())
            .filter(|v| !v.is_empty());
        debug!(plugin = plugin_name, found = version.is_some(), "hangar lookup done");
        Ok(version.unwrap_or_else(|| NOT_FOUND.to_string()))
    }
}
