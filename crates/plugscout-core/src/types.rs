// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin records and the update classification derived from them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::Display;

/// Sentinel a library source returns when it has no record of a plugin.
pub const NOT_FOUND: &str = "Not Found";

/// Whether a newer version of a plugin is published.
///
/// `Unknown` is a first-class state: the library had no record of the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    #[strum(serialize = "yes")]
    Available,
    #[strum(serialize = "no")]
    UpToDate,
    #[strum(serialize = "unknown")]
    Unknown,
}

impl UpdateStatus {
    /// Textual containment check between the installed and the published version.
    ///
    /// Either string containing the other counts as "same release" so that
    /// `1.2` and `1.2.0-b45` compare equal. This does not order versions.
    pub fn classify(version: &str, last_version: &str) -> Self {
        if last_version == NOT_FOUND {
            return Self::Unknown;
        }
        if last_version.contains(version) || version.contains(last_version) {
            return Self::UpToDate;
        }
        Self::Available
    }

    /// `Some(true)` / `Some(false)` for a known answer, `None` for unknown.
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::Available => Some(true),
            Self::UpToDate => Some(false),
            Self::Unknown => None,
        }
    }
}

/// One discovered plugin archive.
///
/// Built only through [`Plugin::new`], which derives the update status; the
/// record is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    name: String,
    version: String,
    last_version: String,
    file_path: PathBuf,
    update_available: UpdateStatus,
}

impl Plugin {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        last_version: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        let version = version.into();
        let last_version = last_version.into();
        let update_available = UpdateStatus::classify(&version, &last_version);
        Self {
            name: name.into(),
            version,
            last_version,
            file_path: file_path.into(),
            update_available,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Installed version exactly as written in the manifest.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Latest published version, or [`NOT_FOUND`].
    pub fn last_version(&self) -> &str {
        &self.last_version
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn update_available(&self) -> UpdateStatus {
        self.update_available
    }
}

/// Key-value metadata read from inside a plugin archive.
///
/// Transient: parsed once per archive and dropped after the [`Plugin`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    /// Every other top-level key, stringified when scalar.
    pub extra: BTreeMap<String, String>,
}

impl Manifest {
    pub fn description(&self) -> Option<&str> {
        self.extra.get("description").map(String::as_str)
    }

    pub fn main_class(&self) -> Option<&str> {
        self.extra.get("main").map(String::as_str)
    }
}
