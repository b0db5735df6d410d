// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugscout check` command implementation.
//!
//! Scans the plugin folder, then prints either every plugin or the one named
//! on the command line. `"all"` is handled here, not by the manager.

use std::io::IsTerminal;
use std::path::PathBuf;

use plugscout_config::PlugscoutConfig;
use plugscout_core::{ErrorKind, Plugin, PlugscoutError};
use plugscout_plugin::{BackendRegistry, PluginManager};

use crate::render;

/// Name that selects every plugin.
pub const ALL_PLUGINS: &str = "all";

/// Run the `plugscout check` command.
///
/// With `--json` the selected records are printed as a JSON array. With
/// `--plain`, or when stdout is not a TTY, colors are disabled.
pub async fn run_check(
    config: &PlugscoutConfig,
    plugin_name: &str,
    folder: Option<PathBuf>,
    json: bool,
    plain: bool,
) -> Result<(), PlugscoutError> {
    let registry = BackendRegistry::with_defaults();
    let manager = PluginManager::from_config(config, folder, &registry)?;
    let plugins = manager.list_plugins().await?;

    let selected = match select(plugin_name, &plugins) {
        Selection::All => plugins.as_slice(),
        Selection::One(plugin) => std::slice::from_ref(plugin),
        Selection::Missing => {
            if json {
                println!("[]");
            } else {
                println!("Plugin not installed!");
            }
            return Ok(());
        }
    };

    if json {
        let out = serde_json::to_string_pretty(selected)
            .map_err(|e| PlugscoutError::Internal(format!("failed to encode plugins: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    if selected.is_empty() {
        println!("No plugins found!");
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    println!("{}", render::plugin_table(selected, use_color));
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Selection<'a> {
    All,
    One(&'a Plugin),
    Missing,
}

fn select<'a>(plugin_name: &str, plugins: &'a [Plugin]) -> Selection<'a> {
    if plugin_name == ALL_PLUGINS {
        return Selection::All;
    }
    match PluginManager::find_by_name(plugin_name, plugins) {
        Some(plugin) => Selection::One(plugin),
        None => Selection::Missing,
    }
}

/// One-line, kind-specific message for a failed check.
pub fn describe_error(err: &PlugscoutError) -> String {
    match err.kind() {
        ErrorKind::NotFound => format!("plugin folder not found ({err})"),
        ErrorKind::UnsupportedProtocol | ErrorKind::UnsupportedLibrary => {
            format!("{err}; check `plugins.protocol` and `plugins.default_library`")
        }
        ErrorKind::CorruptArchive => format!("could not open plugin archive: {err}"),
        ErrorKind::MissingManifest | ErrorKind::MalformedManifest => {
            format!("invalid plugin archive: {err}")
        }
        ErrorKind::SourceUnavailable => {
            format!("{err}; the plugin library may be down, try again later")
        }
        ErrorKind::Io | ErrorKind::Config | ErrorKind::Internal => err.to_string(),
    }
}
