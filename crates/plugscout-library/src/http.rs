// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared HTTP client for registry APIs.
//!
//! Provides [`RegistryClient`] which handles timeouts, the user agent,
//! transient error retry, and the 404-means-absent convention.

use std::time::Duration;

use plugscout_config::LibraryConfig;
use plugscout_core::PlugscoutError;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("plugscout/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one library selector (used in error messages).
///
/// Retries 429 and 5xx gateway statuses `max_retries` times; a 404 is
/// returned as `Ok(None)` so callers can map it to the "Not Found" sentinel.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    library: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl RegistryClient {
    /// Creates a client using the timeout and retry settings from `config`.
    pub fn new(library: &str, config: &LibraryConfig) -> Result<Self, PlugscoutError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| PlugscoutError::SourceUnavailable {
                library: library.to_string(),
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            library: library.to_string(),
            timeout: config.timeout(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
        })
    }

    /// Joins path segments onto `base`, percent-encoding each segment.
    pub fn endpoint(&self, base: &str, segments: &[&str]) -> Result<Url, PlugscoutError> {
        let mut url = Url::parse(base).map_err(|e| {
            PlugscoutError::Config(format!("invalid {} base URL `{base}`: {e}", self.library))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PlugscoutError::Config(format!("{} base URL `{base}` cannot have a path", self.library))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode a JSON body. `Ok(None)` on 404.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, PlugscoutError> {
        let Some(body) = self.get_body(url, query).await? else {
            return Ok(None);
        };
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| PlugscoutError::SourceUnavailable {
                library: self.library.clone(),
                message: format!("failed to parse response: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// GET `url` and return the body as text. `Ok(None)` on 404.
    pub async fn get_text(&self, url: Url) -> Result<Option<String>, PlugscoutError> {
        self.get_body(url, &[]).await
    }

    async fn get_body(
        &self,
        mut url: Url,
        query: &[(&str, &str)],
    ) -> Result<Option<String>, PlugscoutError> {
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(library = %self.library, attempt, "retrying request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            debug!(library = %self.library, url = %url, status = %status, attempt, "registry response received");

            if status == StatusCode::NOT_FOUND {
                return Ok(None);
            }

            if status.is_success() {
                let body = response.text().await.map_err(|e| self.transport_error(e))?;
                return Ok(Some(body));
            }

            if is_transient_error(status) && attempt < self.max_retries {
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(PlugscoutError::source_unavailable(
                &self.library,
                format!("registry returned {status}: {}", truncate(&body, 200)),
            ));
        }

        Err(PlugscoutError::source_unavailable(
            &self.library,
            "request failed after retries",
        ))
    }

    fn transport_error(&self, e: reqwest::Error) -> PlugscoutError {
        let message = if e.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else {
            format!("HTTP request failed: {e}")
        };
        PlugscoutError::SourceUnavailable {
            library: self.library.clone(),
            message,
            source: Some(Box::new(e)),
        }
    }
}

/// Returns true for HTTP status codes that warrant a retry.
fn is_transient_error(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
