// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selector-to-backend registry.
//!
//! `BackendRegistry` maps configuration selector strings (`"local"`,
//! `"spigot"`, ...) to factories. Unknown selectors fail when the backend is
//! requested, before any I/O happens.

use std::collections::HashMap;
use std::sync::Arc;

use plugscout_config::LibraryConfig;
use plugscout_core::{FileBackend, LibrarySource, PlugscoutError};
use plugscout_fs::LocalFileBackend;
use plugscout_library::{HangarSource, ModrinthSource, SpigotSource};
use tracing::debug;

/// Factory trait for creating file backends.
pub trait FileBackendFactory: Send + Sync {
    fn create(&self) -> Result<Arc<dyn FileBackend>, PlugscoutError>;
}

/// Factory trait for creating library sources from library settings.
pub trait LibrarySourceFactory: Send + Sync {
    fn create(&self, config: &LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError>;
}

impl<F> FileBackendFactory for F
where
    F: Fn() -> Result<Arc<dyn FileBackend>, PlugscoutError> + Send + Sync,
{
    fn create(&self) -> Result<Arc<dyn FileBackend>, PlugscoutError> {
        self()
    }
}

impl<F> LibrarySourceFactory for F
where
    F: Fn(&LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError> + Send + Sync,
{
    fn create(&self, config: &LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError> {
        self(config)
    }
}

/// Hands out clones of one pre-built file backend.
struct SharedFileBackend(Arc<dyn FileBackend>);

impl FileBackendFactory for SharedFileBackend {
    fn create(&self) -> Result<Arc<dyn FileBackend>, PlugscoutError> {
        Ok(Arc::clone(&self.0))
    }
}

/// Hands out clones of one pre-built library source.
struct SharedLibrarySource(Arc<dyn LibrarySource>);

impl LibrarySourceFactory for SharedLibrarySource {
    fn create(&self, _config: &LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError> {
        Ok(Arc::clone(&self.0))
    }
}

fn local_backend() -> Result<Arc<dyn FileBackend>, PlugscoutError> {
    Ok(Arc::new(LocalFileBackend::new()))
}

fn spigot_source(config: &LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError> {
    Ok(Arc::new(SpigotSource::from_config(config)?))
}

fn modrinth_source(config: &LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError> {
    Ok(Arc::new(ModrinthSource::from_config(config)?))
}

fn hangar_source(config: &LibraryConfig) -> Result<Arc<dyn LibrarySource>, PlugscoutError> {
    Ok(Arc::new(HangarSource::from_config(config)?))
}

/// Registry of file backend and library source factories, keyed by selector.
pub struct BackendRegistry {
    file_backends: HashMap<String, Box<dyn FileBackendFactory>>,
    libraries: HashMap<String, Box<dyn LibrarySourceFactory>>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            file_backends: HashMap::new(),
            libraries: HashMap::new(),
        }
    }

    /// Registry with every built-in backend: `local`, `spigot`, `modrinth`, `hangar`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_file_backend(LocalFileBackend::PROTOCOL, local_backend);
        registry.register_library(SpigotSource::NAME, spigot_source);
        registry.register_library(ModrinthSource::NAME, modrinth_source);
        registry.register_library(HangarSource::NAME, hangar_source);
        registry
    }

    /// Register (or replace) a file backend factory.
    pub fn register_file_backend(
        &mut self,
        protocol: impl Into<String>,
        factory: impl FileBackendFactory + 'static,
    ) {
        self.file_backends.insert(protocol.into(), Box::new(factory));
    }

    /// Register (or replace) a library source factory.
    pub fn register_library(
        &mut self,
        library: impl Into<String>,
        factory: impl LibrarySourceFactory + 'static,
    ) {
        self.libraries.insert(library.into(), Box::new(factory));
    }

    /// Register an already-built file backend under `protocol`.
    pub fn register_file_backend_instance(
        &mut self,
        protocol: impl Into<String>,
        backend: Arc<dyn FileBackend>,
    ) {
        self.register_file_backend(protocol, SharedFileBackend(backend));
    }

    /// Register an already-built library source under `library`.
    pub fn register_library_instance(
        &mut self,
        library: impl Into<String>,
        source: Arc<dyn LibrarySource>,
    ) {
        self.register_library(library, SharedLibrarySource(source));
    }

    /// Resolve a protocol selector to a file backend.
    pub fn file_backend(&self, protocol: &str) -> Result<Arc<dyn FileBackend>, PlugscoutError> {
        let factory = self.file_backends.get(protocol).ok_or_else(|| {
            PlugscoutError::UnsupportedProtocol {
                protocol: protocol.to_string(),
                available: self.protocols().join(", "),
            }
        })?;
        debug!(protocol, "creating file backend");
        factory.create()
    }

    /// Resolve a library selector to a library source.
    pub fn library_source(
        &self,
        library: &str,
        config: &LibraryConfig,
    ) -> Result<Arc<dyn LibrarySource>, PlugscoutError> {
        let factory = self.libraries.get(library).ok_or_else(|| {
            PlugscoutError::UnsupportedLibrary {
                library: library.to_string(),
                available: self.libraries().join(", "),
            }
        })?;
        debug!(library, "creating library source");
        factory.create(config)
    }

    /// Registered protocol selectors, sorted.
    pub fn protocols(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.file_backends.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered library selectors, sorted.
    pub fn libraries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.libraries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
