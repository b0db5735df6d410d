// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end plugin discovery.
//!
//! A scan lists the folder, keeps `.jar` entries, and for each one reads the
//! manifest, asks the library for the latest version and builds a [`Plugin`].
//! Entries run through a bounded pipeline that keeps enumeration order; the
//! first failing entry fails the whole scan and no partial list is returned.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use plugscout_config::{LibraryConfig, PlugscoutConfig};
use plugscout_core::{FileBackend, LibrarySource, Plugin, PlugscoutError};
use tracing::{debug, info};

use crate::manifest::{parse_manifest, MANIFEST_FILE};
use crate::registry::BackendRegistry;

/// Entries ending with this are treated as plugin archives.
pub const ARCHIVE_EXTENSION: &str = ".jar";

/// Returns true if a folder entry name looks like a plugin archive.
pub fn is_plugin_archive(entry: &str) -> bool {
    entry.ends_with(ARCHIVE_EXTENSION)
}

/// Discovers installed plugins and checks them against a library.
pub struct PluginManager {
    folder: PathBuf,
    files: Arc<dyn FileBackend>,
    library: Arc<dyn LibrarySource>,
    concurrency: usize,
}

impl std::fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginManager")
            .field("folder", &self.folder)
            .field("protocol", &self.files.protocol())
            .field("library", &self.library.name())
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl PluginManager {
    /// Build a manager from selector strings.
    ///
    /// Both selectors are resolved here; an unknown one fails with
    /// `UnsupportedProtocol` / `UnsupportedLibrary` and nothing is read.
    pub fn new(
        folder: impl Into<PathBuf>,
        file_protocol: &str,
        library: &str,
        registry: &BackendRegistry,
        library_config: &LibraryConfig,
    ) -> Result<Self, PlugscoutError> {
        let files = registry.file_backend(file_protocol)?;
        let library = registry.library_source(library, library_config)?;
        Ok(Self::with_backends(folder, files, library).with_concurrency(library_config.concurrency))
    }

    /// Build a manager from loaded configuration. `folder` overrides `plugins.path`.
    pub fn from_config(
        config: &PlugscoutConfig,
        folder: Option<PathBuf>,
        registry: &BackendRegistry,
    ) -> Result<Self, PlugscoutError> {
        let folder = folder.unwrap_or_else(|| PathBuf::from(&config.plugins.path));
        Self::new(
            folder,
            &config.plugins.protocol,
            &config.plugins.default_library,
            registry,
            &config.library,
        )
    }

    /// Build a manager around already-constructed backends. Processes one entry at a time.
    pub fn with_backends(
        folder: impl Into<PathBuf>,
        files: Arc<dyn FileBackend>,
        library: Arc<dyn LibrarySource>,
    ) -> Self {
        Self {
            folder: folder.into(),
            files,
            library,
            concurrency: 1,
        }
    }

    /// Number of archives processed at once (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn protocol(&self) -> &str {
        self.files.protocol()
    }

    pub fn library(&self) -> &str {
        self.library.name()
    }

    /// Scan the folder and return one [`Plugin`] per archive, in enumeration order.
    ///
    /// Non-archive entries are skipped. Any per-archive failure (unreadable
    /// archive, missing or malformed manifest, unreachable library) aborts the
    /// scan with that error.
    pub async fn list_plugins(&self) -> Result<Vec<Plugin>, PlugscoutError> {
        let entries = self.files.list_entries(&self.folder).await?;
        let total = entries.len();

        let archives: Vec<PathBuf> = entries
            .into_iter()
            .filter(|entry| is_plugin_archive(entry))
            .map(|entry| self.folder.join(entry))
            .collect();
        debug!(
            folder = %self.folder.display(),
            entries = total,
            archives = archives.len(),
            "listed plugin folder"
        );

        let plugins: Vec<Plugin> = stream::iter(archives)
            .map(|path| self.inspect_archive(path))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        info!(
            folder = %self.folder.display(),
            library = self.library.name(),
            count = plugins.len(),
            "plugin scan complete"
        );
        Ok(plugins)
    }

    async fn inspect_archive(&self, path: PathBuf) -> Result<Plugin, PlugscoutError> {
        let raw = self.files.extract_file(&path, MANIFEST_FILE).await?;
        let manifest = parse_manifest(&raw, &path)?;
        let last_version = self.library.latest_version(&manifest.name).await?;

        debug!(
            plugin = %manifest.name,
            version = %manifest.version,
            last_version = %last_version,
            main = manifest.main_class().unwrap_or("-"),
            description = manifest.description().unwrap_or("-"),
            "plugin inspected"
        );
        Ok(Plugin::new(
            manifest.name,
            manifest.version,
            last_version,
            path,
        ))
    }

    /// First plugin whose name equals `name` exactly (case-sensitive).
    ///
    /// `"all"` has no special meaning here; callers that use it as a
    /// "don't filter" marker must check for it themselves.
    pub fn find_by_name<'a>(name: &str, plugins: &'a [Plugin]) -> Option<&'a Plugin> {
        plugins.iter().find(|plugin| plugin.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use plugscout_test_utils::{MockFileBackend, MockLibrarySource};
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn archive_filter_matches_jar_suffix_only() {
        assert!(is_plugin_archive("Essentials.jar"));
        assert!(is_plugin_archive("a.b.jar"));
        assert!(!is_plugin_archive("readme.txt"));
        assert!(!is_plugin_archive("Essentials"));
        assert!(!is_plugin_archive("old.jar.bak"));
        assert!(!is_plugin_archive("UPPER.JAR"));
    }

    #[test]
    fn find_by_name_empty_is_none() {
        assert!(PluginManager::find_by_name("Foo", &[]).is_none());
    }

    #[test]
    fn find_by_name_returns_exact_match() {
        let plugins = vec![
            Plugin::new("Foo", "1.0", "1.0", "Foo.jar"),
            Plugin::new("Bar", "2.0", "3.0", "Bar.jar"),
        ];
        let found = PluginManager::find_by_name("Foo", &plugins).unwrap();
        assert_eq!(found.name(), "Foo");
        assert!(PluginManager::find_by_name("foo", &plugins).is_none());
        assert!(PluginManager::find_by_name("all", &plugins).is_none());
    }

    #[test]
    fn find_by_name_first_match_wins() {
        let plugins = vec![
            Plugin::new("Foo", "1.0", "1.0", "a/Foo.jar"),
            Plugin::new("Foo", "2.0", "2.0", "b/Foo.jar"),
        ];
        let found = PluginManager::find_by_name("Foo", &plugins).unwrap();
        assert_eq!(found.version(), "1.0");
    }

    #[tokio::test]
    #[traced_test]
    async fn scan_logs_summary() {
        let manager = PluginManager::with_backends(
            "plugins",
            Arc::new(MockFileBackend::new().with_plugin("a.jar", "A", "1.0")),
            Arc::new(MockLibrarySource::new()),
        );
        manager.list_plugins().await.unwrap();
        assert!(logs_contain("plugin scan complete"));
        assert!(logs_contain("count=1"));
    }

    #[tokio::test]
    #[traced_test]
    async fn inspection_logs_manifest_details() {
        let manager = PluginManager::with_backends(
            "plugins",
            Arc::new(MockFileBackend::new().with_manifest(
                "a.jar",
                "name: A\nversion: 1.0\nmain: org.example.a.Main\ndescription: Does things\n",
            )),
            Arc::new(MockLibrarySource::new()),
        );
        manager.list_plugins().await.unwrap();
        assert!(logs_contain("plugin inspected"));
        assert!(logs_contain("org.example.a.Main"));
        assert!(logs_contain("Does things"));
    }

    #[test]
    fn concurrency_is_at_least_one() {
        let manager = PluginManager::with_backends(
            "plugins",
            Arc::new(MockFileBackend::new()),
            Arc::new(MockLibrarySource::new()),
        )
        .with_concurrency(0);
        assert_eq!(manager.concurrency, 1);
    }
}
