// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SpigotMC resources via the Spiget API.
//!
//! Lookup is two requests: a name search to find the resource id, then the
//! resource's latest version.

use async_trait::async_trait;
use plugscout_config::LibraryConfig;
use plugscout_core::{LibrarySource, PlugscoutError, NOT_FOUND};
use serde::Deserialize;
use tracing::debug;

use crate::http::RegistryClient;

/// How many search hits to consider when looking for an exact name match.
const SEARCH_SIZE: &str = "10";

#[derive(Debug, Deserialize)]
struct Resource {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ResourceVersion {
    name: String,
}

/// [`LibrarySource`] backed by `api.spiget.org`.
#[derive(Debug, Clone)]
pub struct SpigotSource {
    client: RegistryClient,
    base_url: String,
}

impl SpigotSource {
    pub const NAME: &'static str = "spigot";

    pub fn new(client: RegistryClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Result<Self, PlugscoutError> {
        Ok(Self::new(
            RegistryClient::new(Self::NAME, config)?,
            &config.spigot_url,
        ))
    }

    async fn find_resource(&self, plugin_name: &str) -> Result<Option<Resource>, PlugscoutError> {
        let url = self
            .client
            .endpoint(&self.base_url, &["search", "resources", plugin_name])?;
        let hits: Vec<Resource> = self
            .client
            .get_json(url, &[("field", "name"), ("size", SEARCH_SIZE)])
            .await?
            .unwrap_or_default();

        let wanted = plugin_name.to_lowercase();
        let exact = hits.iter().position(|r| r.name.to_lowercase() == wanted);
        Ok(match exact {
            Some(idx) => hits.into_iter().nth(idx),
            None => hits.into_iter().next(),
        })
    }
}

#[async_trait]
impl LibrarySource for SpigotSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn latest_version(&self, plugin_name: &str) -> Result<String, PlugscoutError> {
        let Some(resource) = self.find_resource(plugin_name).await? else {
            debug!(plugin = plugin_name, "no spigot resource found");
            return Ok(NOT_FOUND.to_string());
        };

        let id = resource.id.to_string();
        let url = self
            .client
            .endpoint(&self.base_url, &["resources", &id, "versions", "latest"])?;
        let version: Option<ResourceVersion> = self.client.get_json(url, &[]).await?;

        debug!(plugin = plugin_name, resource = %resource.name, id = resource.id, "spigot lookup done");
        Ok(version.map_or_else(|| NOT_FOUND.to_string(), |v| v.name))
    }
}

#[cfg(test)]
mod tests {
    use plugscout_core::ErrorKind;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::test_support::test_config;

    fn source(server: &MockServer) -> SpigotSource {
        SpigotSource::from_config(&test_config(&server.uri())).unwrap()
    }

    #[tokio::test]
    async fn latest_version_prefers_exact_name_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/resources/Essentials"))
            .and(query_param("field", "name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "EssentialsX Chat"},
                {"id": 9089, "name": "EssentialsX"},
                {"id": 42, "name": "essentials"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resources/42/versions/latest"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 7, "name": "2.20.1"})),
            )
            .mount(&server)
            .await;

        let version = source(&server).latest_version("Essentials").await.unwrap();
        assert_eq!(version, "2.20.1");
    }

    #[tokio::test]
    async fn latest_version_falls_back_to_first_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/resources/Vault"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 34315, "name": "Vault Reloaded"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resources/34315/versions/latest"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "1.7.3"})),
            )
            .mount(&server)
            .await;

        assert_eq!(source(&server).latest_version("Vault").await.unwrap(), "1.7.3");
    }

    #[tokio::test]
    async fn search_404_is_not_found_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/resources/Nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert_eq!(source(&server).latest_version("Nope").await.unwrap(), NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_search_is_not_found_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/resources/Nope"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        assert_eq!(source(&server).latest_version("Nope").await.unwrap(), NOT_FOUND);
    }

    #[tokio::test]
    async fn garbage_body_is_source_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/resources/Foo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source(&server).latest_version("Foo").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    }
}
