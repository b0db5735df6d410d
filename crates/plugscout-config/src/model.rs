// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for plugscout.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level plugscout configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlugscoutConfig {
    /// Where plugins live and which backends read them.
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Remote library settings.
    #[serde(default)]
    pub library: LibraryConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Plugin folder and backend selection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Default plugins folder, used when no folder is given on the command line.
    #[serde(default = "default_plugins_path")]
    pub path: String,

    /// File backend selector (e.g. `local`).
    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// Library source selector (e.g. `spigot`, `modrinth`, `hangar`).
    #[serde(default = "default_library")]
    pub default_library: String,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            path: default_plugins_path(),
            protocol: default_protocol(),
            default_library: default_library(),
        }
    }
}

fn default_plugins_path() -> String {
    "plugins".to_string()
}

fn default_protocol() -> String {
    "local".to_string()
}

fn default_library() -> String {
    "spigot".to_string()
}

/// Remote library client settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries on transient HTTP statuses (429, 5xx).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// How many archives are processed at once during a scan.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Base URL of the Spiget API.
    #[serde(default = "default_spigot_url")]
    pub spigot_url: String,

    /// Base URL of the Modrinth API.
    #[serde(default = "default_modrinth_url")]
    pub modrinth_url: String,

    /// Base URL of the Hangar API.
    #[serde(default = "default_hangar_url")]
    pub hangar_url: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            concurrency: default_concurrency(),
            spigot_url: default_spigot_url(),
            modrinth_url: default_modrinth_url(),
            hangar_url: default_hangar_url(),
        }
    }
}

impl LibraryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_concurrency() -> usize {
    4
}

fn default_spigot_url() -> String {
    "https://api.spiget.org/v2".to_string()
}

fn default_modrinth_url() -> String {
    "https://api.modrinth.com/v2".to_string()
}

fn default_hangar_url() -> String {
    "https://hangar.papermc.io/api/v1".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
