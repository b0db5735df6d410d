// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote plugin library sources.
//!
//! Each source implements [`plugscout_core::LibrarySource`] over one registry's
//! HTTP API. "Plugin unknown" is reported as the `"Not Found"` sentinel; only
//! transport-level problems become errors.

pub mod hangar;
pub mod http;
pub mod modrinth;
pub mod spigot;

pub use hangar::HangarSource;
pub use http::RegistryClient;
pub use modrinth::ModrinthSource;
pub use spigot::SpigotSource;
