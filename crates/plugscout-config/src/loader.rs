// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./plugscout.toml` > `~/.config/plugscout/plugscout.toml` >
//! `/etc/plugscout/plugscout.toml` with environment variable overrides via `PLUGSCOUT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PlugscoutConfig;

pub(crate) const LOCAL_CONFIG_FILE: &str = "plugscout.toml";
pub(crate) const SYSTEM_CONFIG_FILE: &str = "/etc/plugscout/plugscout.toml";

/// Path of the per-user config file (`$XDG_CONFIG_HOME/plugscout/plugscout.toml`).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("plugscout").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/plugscout/plugscout.toml` (system-wide)
/// 3. `~/.config/plugscout/plugscout.toml` (user XDG config)
/// 4. `./plugscout.toml` (local directory)
/// 5. `PLUGSCOUT_*` environment variables
pub fn load_config() -> Result<PlugscoutConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PlugscoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlugscoutConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlugscoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlugscoutConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PlugscoutConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using an explicit section map.
///
/// Uses `Env::map()` rather than `Env::split("_")`: `PLUGSCOUT_PLUGINS_DEFAULT_LIBRARY`
/// must become `plugins.default_library`, not `plugins.default.library`.
fn env_provider() -> Env {
    Env::prefixed("PLUGSCOUT_").map(|key| {
        // Keys arrive as written in the environment (`PLUGINS_PATH`).
        let key_str = key.as_str().to_ascii_lowercase();
        for section in ["plugins", "library", "log"] {
            if let Some(rest) = key_str
                .strip_prefix(section)
                .and_then(|r| r.strip_prefix('_'))
            {
                return format!("{section}.{rest}").into();
            }
        }
        key_str.into()
    })
}
