// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted-key access to the configuration (`plugins.path`, `library.timeout_secs`).
//!
//! Values are edited on the TOML representation and re-deserialized, so a
//! `set_value` that would produce an ill-typed config is rejected.

use std::path::Path;

use toml::Value;
use tracing::debug;

use crate::diagnostic::{suggest_key, ConfigError};
use crate::model::PlugscoutConfig;
use crate::validation::validate_config;

/// Read a value by `section.name`.
pub fn get_value(config: &PlugscoutConfig, key: &str) -> Result<String, ConfigError> {
    let (section, name) = split_key(key)?;
    let table = to_table(config)?;
    let value = lookup(&table, section, name)?;
    Ok(render_value(value))
}

/// Set a value by `section.name`, type-checking it against the model.
///
/// The raw string is parsed as a TOML value first (so `5` stays an integer);
/// anything that does not parse is taken as a string.
pub fn set_value(config: &mut PlugscoutConfig, key: &str, raw: &str) -> Result<(), ConfigError> {
    let (section, name) = split_key(key)?;
    let mut table = to_table(config)?;
    let current = lookup(&table, section, name)?.clone();

    let new_value = coerce(raw, &current);
    if let Some(Value::Table(section_table)) = table.get_mut(section) {
        section_table.insert(name.to_string(), new_value);
    }

    let updated: PlugscoutConfig =
        Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::InvalidType {
                key: key.to_string(),
                detail: e.message().to_string(),
                expected: type_name(&current).to_string(),
                span: None,
                src: None,
            })?;
    validate_config(&updated).map_err(|mut errors| errors.remove(0))?;

    debug!(key, value = raw, "config value updated");
    *config = updated;
    Ok(())
}

/// Write `key`'s value from `config` into the TOML file at `path`.
///
/// Only that entry changes. Every other entry of the file is kept as it was,
/// and values `config` picked up from other layers (env vars, other files)
/// are not copied in. Parent directories are created as needed.
pub fn persist_value(config: &PlugscoutConfig, key: &str, path: &Path) -> Result<(), ConfigError> {
    let (section, name) = split_key(key)?;
    let value = lookup(&to_table(config)?, section, name)?.clone();

    let io_err = |e: &dyn std::fmt::Display| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let mut file = match std::fs::read_to_string(path) {
        Ok(content) => content.parse::<toml::Table>().map_err(|e| io_err(&e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => return Err(io_err(&e)),
    };

    let entry = file
        .entry(section)
        .or_insert_with(|| Value::Table(toml::Table::new()));
    let Value::Table(section_table) = entry else {
        return Err(io_err(&format!("`{section}` is not a table")));
    };
    section_table.insert(name.to_string(), value);

    let content = toml::to_string_pretty(&file).map_err(|e| io_err(&e))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| io_err(&e))?;
    }
    std::fs::write(path, content).map_err(|e| io_err(&e))?;
    debug!(key, path = %path.display(), "config value persisted");
    Ok(())
}

fn split_key(key: &str) -> Result<(&str, &str), ConfigError> {
    match key.split_once('.') {
        Some((section, name)) if !section.is_empty() && !name.is_empty() && !name.contains('.') => {
            Ok((section, name))
        }
        _ => Err(ConfigError::InvalidKeyFormat {
            key: key.to_string(),
        }),
    }
}

fn to_table(config: &PlugscoutConfig) -> Result<toml::Table, ConfigError> {
    toml::Table::try_from(config).map_err(|e| ConfigError::Other(e.to_string()))
}

fn lookup<'a>(table: &'a toml::Table, section: &str, name: &str) -> Result<&'a Value, ConfigError> {
    let Some(Value::Table(section_table)) = table.get(section) else {
        let valid: Vec<&str> = table.keys().map(String::as_str).collect();
        return Err(ConfigError::UnknownSection {
            section: section.to_string(),
            suggestion: suggest_key(section, &valid),
            valid_sections: valid.join(", "),
            span: None,
            src: None,
        });
    };

    section_table.get(name).ok_or_else(|| {
        let valid: Vec<&str> = section_table.keys().map(String::as_str).collect();
        ConfigError::UnknownKey {
            key: format!("{section}.{name}"),
            suggestion: suggest_key(name, &valid),
            valid_keys: valid.join(", "),
            span: None,
            src: None,
        }
    })
}

fn coerce(raw: &str, current: &Value) -> Value {
    if current.is_str() {
        return Value::String(raw.to_string());
    }
    format!("v = {raw}")
        .parse::<toml::Table>()
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "a string",
        Value::Integer(_) => "an integer",
        Value::Float(_) => "a float",
        Value::Boolean(_) => "a boolean",
        Value::Datetime(_) => "a datetime",
        Value::Array(_) => "an array",
        Value::Table(_) => "a table",
    }
}
