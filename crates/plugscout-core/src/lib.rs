// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for plugscout.
//!
//! Holds the plugin record, the update classification, the error taxonomy,
//! and the two backend traits every file backend and library source implements.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ErrorKind, PlugscoutError};
pub use traits::{FileBackend, LibrarySource};
pub use types::{Manifest, NOT_FOUND, Plugin, UpdateStatus};
