// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`FileBackend`] over the local filesystem.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use plugscout_core::{FileBackend, PlugscoutError};
use tracing::{debug, warn};
use zip::result::ZipError;
use zip::ZipArchive;

/// Largest inner file `extract_file` will return. Manifests are a few KiB.
pub const MAX_INNER_FILE_BYTES: u64 = 1024 * 1024;

/// Reads real directories and zip-format archives (jars).
#[derive(Debug, Clone, Default)]
pub struct LocalFileBackend;

impl LocalFileBackend {
    pub const PROTOCOL: &'static str = "local";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileBackend for LocalFileBackend {
    fn protocol(&self) -> &str {
        Self::PROTOCOL
    }

    async fn list_entries(&self, location: &Path) -> Result<Vec<String>, PlugscoutError> {
        let mut dir = tokio::fs::read_dir(location)
            .await
            .map_err(|e| io_to_plugscout(location, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| io_to_plugscout(location, e))?
        {
            match entry.file_name().into_string() {
                Ok(name) => entries.push(name),
                Err(raw) => {
                    warn!(location = %location.display(), name = ?raw, "skipping entry with non-UTF-8 name");
                }
            }
        }

        debug!(location = %location.display(), count = entries.len(), "listed entries");
        Ok(entries)
    }

    async fn extract_file(
        &self,
        entry_path: &Path,
        inner_file: &str,
    ) -> Result<Vec<u8>, PlugscoutError> {
        let path = entry_path.to_path_buf();
        let inner = inner_file.to_string();
        tokio::task::spawn_blocking(move || read_from_archive(&path, &inner))
            .await
            .map_err(|e| PlugscoutError::Internal(format!("archive reader task failed: {e}")))?
    }
}

/// Blocking read of `inner` from the zip archive at `path`.
fn read_from_archive(path: &Path, inner: &str) -> Result<Vec<u8>, PlugscoutError> {
    let corrupt = |source: Box<dyn std::error::Error + Send + Sync>| PlugscoutError::CorruptArchive {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| corrupt(Box::new(e)))?;
    let mut archive = ZipArchive::new(file).map_err(|e| corrupt(Box::new(e)))?;

    let mut entry = match archive.by_name(inner) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(PlugscoutError::MissingManifest {
                path: path.to_path_buf(),
                file: inner.to_string(),
            });
        }
        Err(e) => return Err(corrupt(Box::new(e))),
    };

    // The declared size is untrusted header data; cap what is actually read.
    let mut buf = Vec::new();
    (&mut entry)
        .take(MAX_INNER_FILE_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| corrupt(Box::new(e)))?;
    if buf.len() as u64 > MAX_INNER_FILE_BYTES {
        return Err(corrupt(
            format!("`{inner}` is larger than {MAX_INNER_FILE_BYTES} bytes").into(),
        ));
    }
    Ok(buf)
}

fn io_to_plugscout(location: &Path, err: std::io::Error) -> PlugscoutError {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => PlugscoutError::NotFound {
            location: PathBuf::from(location),
        },
        _ => PlugscoutError::Io {
            path: PathBuf::from(location),
            source: err,
        },
    }
}
