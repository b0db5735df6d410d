// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty selectors, positive timeouts and well-formed URLs.

use crate::diagnostic::ConfigError;
use crate::model::PlugscoutConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PlugscoutConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let required = [
        ("plugins.path", &config.plugins.path),
        ("plugins.protocol", &config.plugins.protocol),
        ("plugins.default_library", &config.plugins.default_library),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if config.library.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "library.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.library.concurrency == 0 {
        errors.push(ConfigError::Validation {
            message: "library.concurrency must be at least 1".to_string(),
        });
    }

    let urls = [
        ("library.spigot_url", &config.library.spigot_url),
        ("library.modrinth_url", &config.library.modrinth_url),
        ("library.hangar_url", &config.library.hangar_url),
    ];
    for (key, url) in urls {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ConfigError::Validation {
                message: format!("{key} `{url}` must be an http(s) URL"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
