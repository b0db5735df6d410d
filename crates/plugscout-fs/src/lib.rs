// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local filesystem file backend.
//!
//! Lists plugin folders on disk and reads single entries out of jar/zip
//! archives. Registered under the `local` protocol selector.

pub mod local;

pub use local::LocalFileBackend;
