// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk jar fixtures.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Minimal `plugin.yml` body with the two required keys.
pub fn plugin_yml(name: &str, version: &str) -> String {
    format!("name: {name}\nversion: '{version}'\nmain: com.example.{name}\n")
}

/// Write a zip archive at `path` containing `files` as `(inner name, bytes)`.
pub fn write_jar(path: &Path, files: &[(&str, &[u8])]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    for (name, content) in files {
        zip.start_file(*name, SimpleFileOptions::default())
            .map_err(io::Error::other)?;
        zip.write_all(content)?;
    }
    zip.finish().map_err(io::Error::other)?;
    Ok(())
}

/// Write `<dir>/<file_name>` as a jar whose `plugin.yml` declares `name` and `version`.
pub fn write_plugin_jar(
    dir: &Path,
    file_name: &str,
    name: &str,
    version: &str,
) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    let manifest = plugin_yml(name, version);
    write_jar(
        &path,
        &[
            ("plugin.yml", manifest.as_bytes()),
            ("com/example/Main.class", b"\xca\xfe\xba\xbe".as_slice()),
        ],
    )?;
    Ok(path)
}
