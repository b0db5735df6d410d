// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for plugscout integration tests.
//!
//! Provides in-memory backends and jar fixtures for fast, deterministic,
//! CI-runnable tests without a real plugin folder or network access.
//!
//! # Components
//!
//! - [`MockFileBackend`] - In-memory plugin folder with scripted archives
//! - [`MockLibrarySource`] - Library source with fixed versions and call capture
//! - [`fixtures`] - Helpers that write real `.jar` files to disk

pub mod fixtures;
pub mod mock_backend;
pub mod mock_library;

pub use fixtures::{plugin_yml, write_jar, write_plugin_jar};
pub use mock_backend::MockFileBackend;
pub use mock_library::MockLibrarySource;
