// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugscout config` command implementation.

use std::path::Path;

use plugscout_config::{get_value, persist_value, set_value, ConfigError, PlugscoutConfig};

/// Show `name`, or set it to `value` and write that one entry to `target`.
///
/// The new value is checked against the effective configuration; only the
/// changed entry is written, so overrides from other layers stay out of the file.
pub fn run_config(
    mut config: PlugscoutConfig,
    name: &str,
    value: Option<&str>,
    target: Option<&Path>,
) -> Result<(), ConfigError> {
    let before = get_value(&config, name)?;
    let Some(value) = value else {
        println!("{}", render_entry(name, &before));
        return Ok(());
    };

    let target = target.ok_or_else(|| {
        ConfigError::Other("no user configuration directory; pass --config <FILE>".to_string())
    })?;
    set_value(&mut config, name, value)?;
    let after = get_value(&config, name)?;

    println!("Value before: {before}");
    println!("Changing config to:\n{}", render_entry(name, &after));
    persist_value(&config, name, target)?;
    tracing::info!(key = name, path = %target.display(), "configuration saved");
    Ok(())
}

/// `[section]\nname = value`, the way the entry appears in the file.
fn render_entry(key: &str, value: &str) -> String {
    match key.split_once('.') {
        Some((section, name)) => format!("[{section}]\n{name} = {value}"),
        None => format!("{key} = {value}"),
    }
}
