// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for plugin discovery and version lookup.

use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

/// The primary error type used across backends, library sources and the manager.
#[derive(Debug, Error)]
pub enum PlugscoutError {
    /// The requested folder or location does not exist (or is not a directory).
    #[error("location not found: {}", location.display())]
    NotFound { location: PathBuf },

    /// No file backend is registered under the given protocol selector.
    #[error("unsupported file protocol `{protocol}` (available: {available})")]
    UnsupportedProtocol { protocol: String, available: String },

    /// No library source is registered under the given selector.
    #[error("unsupported library `{library}` (available: {available})")]
    UnsupportedLibrary { library: String, available: String },

    /// The archive could not be opened or read.
    #[error("corrupt archive {}: {source}", path.display())]
    CorruptArchive {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The archive opened fine but does not contain the manifest.
    #[error("archive {} has no `{file}`", path.display())]
    MissingManifest { path: PathBuf, file: String },

    /// The manifest was found but is not a usable key-value document.
    #[error("malformed manifest in {}: {message}", path.display())]
    MalformedManifest { path: PathBuf, message: String },

    /// The library source could not be reached or answered garbage.
    #[error("library `{library}` unavailable: {message}")]
    SourceUnavailable {
        library: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O failure on a location that exists.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration values the core was handed are unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse classification of a [`PlugscoutError`], stable for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    NotFound,
    UnsupportedProtocol,
    UnsupportedLibrary,
    CorruptArchive,
    MissingManifest,
    MalformedManifest,
    SourceUnavailable,
    Io,
    Config,
    Internal,
}

impl PlugscoutError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::UnsupportedProtocol { .. } => ErrorKind::UnsupportedProtocol,
            Self::UnsupportedLibrary { .. } => ErrorKind::UnsupportedLibrary,
            Self::CorruptArchive { .. } => ErrorKind::CorruptArchive,
            Self::MissingManifest { .. } => ErrorKind::MissingManifest,
            Self::MalformedManifest { .. } => ErrorKind::MalformedManifest,
            Self::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            Self::Io { .. } => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Shorthand for a [`PlugscoutError::SourceUnavailable`] without an underlying error.
    pub fn source_unavailable(library: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            library: library.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a [`PlugscoutError::MalformedManifest`].
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedManifest {
            path: path.into(),
            message: message.into(),
        }
    }
}
