// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock library source for deterministic testing.
//!
//! `MockLibrarySource` answers from a fixed table, returns the "Not Found"
//! sentinel for anything else, and records every lookup for assertions.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use plugscout_core::{LibrarySource, NOT_FOUND, PlugscoutError};

/// A library source with pre-configured answers.
pub struct MockLibrarySource {
    name: String,
    versions: HashMap<String, String>,
    failing: HashSet<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockLibrarySource {
    /// Create a mock registered as `"mock"` that knows no plugins.
    pub fn new() -> Self {
        Self::named("mock")
    }

    /// Create a mock with a custom selector name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            versions: HashMap::new(),
            failing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Publish `version` as the latest release of `plugin`.
    pub fn with_version(mut self, plugin: &str, version: &str) -> Self {
        self.versions
            .insert(plugin.to_string(), version.to_string());
        self
    }

    /// Make lookups for `plugin` fail with `SourceUnavailable`.
    pub fn failing_for(mut self, plugin: &str) -> Self {
        self.failing.insert(plugin.to_string());
        self
    }

    /// Plugin names looked up so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of lookups so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

impl Default for MockLibrarySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibrarySource for MockLibrarySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn latest_version(&self, plugin_name: &str) -> Result<String, PlugscoutError> {
        self.calls.lock().await.push(plugin_name.to_string());
        if self.failing.contains(plugin_name) {
            return Err(PlugscoutError::source_unavailable(
                &self.name,
                format!("scripted failure for {plugin_name}"),
            ));
        }
        Ok(self
            .versions
            .get(plugin_name)
            .cloned()
            .unwrap_or_else(|| NOT_FOUND.to_string()))
    }
}
