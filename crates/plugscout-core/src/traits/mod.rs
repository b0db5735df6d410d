// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend trait definitions.
//!
//! Both traits use `#[async_trait]` so the manager can hold them as
//! `Arc<dyn Trait>` and swap implementations by selector.

pub mod file_backend;
pub mod library_source;

pub use file_backend::FileBackend;
pub use library_source::LibrarySource;
