// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin discovery for plugscout.
//!
//! [`PluginManager`] lists a plugin folder through a [`plugscout_core::FileBackend`],
//! reads each archive's `plugin.yml`, asks a [`plugscout_core::LibrarySource`]
//! for the newest version, and returns [`plugscout_core::Plugin`] records.
//! Backends are looked up by selector string in a [`BackendRegistry`].

pub mod manager;
pub mod manifest;
pub mod registry;

pub use manager::{is_plugin_archive, PluginManager, ARCHIVE_EXTENSION};
pub use manifest::{parse_manifest, MANIFEST_FILE};
pub use registry::{BackendRegistry, FileBackendFactory, LibrarySourceFactory};
