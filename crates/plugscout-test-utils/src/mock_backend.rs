// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory file backend for deterministic testing.
//!
//! `MockFileBackend` serves a single scripted folder. Entries keep the order
//! they were added in, and archives are looked up by file name so any folder
//! path works.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use plugscout_core::{FileBackend, PlugscoutError};

use crate::fixtures::plugin_yml;

enum MockArchive {
    Files(HashMap<String, Vec<u8>>),
    Corrupt,
}

/// A scripted plugin folder.
pub struct MockFileBackend {
    entries: Vec<String>,
    archives: HashMap<String, MockArchive>,
    delays: HashMap<String, Duration>,
    missing: bool,
    extracted: Arc<Mutex<Vec<String>>>,
}

impl MockFileBackend {
    /// Create an empty, existing folder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            archives: HashMap::new(),
            delays: HashMap::new(),
            missing: false,
            extracted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A folder that does not exist: `list_entries` fails with `NotFound`.
    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::new()
        }
    }

    /// Add `entry` as an archive with a valid `plugin.yml`.
    pub fn with_plugin(self, entry: &str, name: &str, version: &str) -> Self {
        self.with_manifest(entry, &plugin_yml(name, version))
    }

    /// Add `entry` as an archive whose `plugin.yml` is `body` verbatim.
    pub fn with_manifest(mut self, entry: &str, body: &str) -> Self {
        let files = HashMap::from([("plugin.yml".to_string(), body.as_bytes().to_vec())]);
        self.entries.push(entry.to_string());
        self.archives
            .insert(entry.to_string(), MockArchive::Files(files));
        self
    }

    /// Add `entry` as a readable archive with no `plugin.yml`.
    pub fn with_empty_archive(mut self, entry: &str) -> Self {
        self.entries.push(entry.to_string());
        self.archives
            .insert(entry.to_string(), MockArchive::Files(HashMap::new()));
        self
    }

    /// Add `entry` as an archive that cannot be opened.
    pub fn with_corrupt_archive(mut self, entry: &str) -> Self {
        self.entries.push(entry.to_string());
        self.archives.insert(entry.to_string(), MockArchive::Corrupt);
        self
    }

    /// Add a plain entry (file or directory) with no archive behind it.
    pub fn with_entry(mut self, entry: &str) -> Self {
        self.entries.push(entry.to_string());
        self
    }

    /// Make extraction from `entry` take `delay` before answering.
    pub fn with_delay(mut self, entry: &str, delay: Duration) -> Self {
        self.delays.insert(entry.to_string(), delay);
        self
    }

    /// Entry names passed to `extract_file`, in call order.
    pub async fn extracted(&self) -> Vec<String> {
        self.extracted.lock().await.clone()
    }
}

impl Default for MockFileBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileBackend for MockFileBackend {
    fn protocol(&self) -> &str {
        "mock"
    }

    async fn list_entries(&self, location: &Path) -> Result<Vec<String>, PlugscoutError> {
        if self.missing {
            return Err(PlugscoutError::NotFound {
                location: location.to_path_buf(),
            });
        }
        Ok(self.entries.clone())
    }

    async fn extract_file(
        &self,
        entry_path: &Path,
        inner_file: &str,
    ) -> Result<Vec<u8>, PlugscoutError> {
        let entry = entry_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.extracted.lock().await.push(entry.clone());

        if let Some(delay) = self.delays.get(&entry) {
            tokio::time::sleep(*delay).await;
        }

        match self.archives.get(&entry) {
            Some(MockArchive::Files(files)) => {
                files
                    .get(inner_file)
                    .cloned()
                    .ok_or_else(|| PlugscoutError::MissingManifest {
                        path: entry_path.to_path_buf(),
                        file: inner_file.to_string(),
                    })
            }
            Some(MockArchive::Corrupt) | None => Err(PlugscoutError::CorruptArchive {
                path: entry_path.to_path_buf(),
                source: "not a zip archive".into(),
            }),
        }
    }
}
