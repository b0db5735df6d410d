// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugin.yml` parsing.
//!
//! Only `name` and `version` are required. Both keep their source text, so
//! `version: 1.10` stays `"1.10"` even though YAML reads it as a float. Other
//! scalar keys are kept in `extra` in their resolved form.

use std::collections::BTreeMap;
use std::path::Path;

use plugscout_core::{Manifest, PlugscoutError};
use serde::Deserialize;
use serde_yaml::Value;

/// File name of the manifest inside a plugin archive.
pub const MANIFEST_FILE: &str = "plugin.yml";

/// Parse manifest bytes read from the archive at `path`.
pub fn parse_manifest(bytes: &[u8], path: &Path) -> Result<Manifest, PlugscoutError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| PlugscoutError::malformed(path, format!("not valid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let doc: Value = serde_yaml::from_str(text)
        .map_err(|e| PlugscoutError::malformed(path, format!("invalid YAML: {e}")))?;
    let Value::Mapping(mapping) = doc else {
        return Err(PlugscoutError::malformed(
            path,
            "expected a key-value document",
        ));
    };

    let mut name = None;
    let mut version = None;
    let mut extra = BTreeMap::new();

    for (key, value) in &mapping {
        let Some(key) = scalar(key) else {
            continue;
        };
        match key.as_str() {
            "name" => name = Some(required_scalar(path, "name", value)?),
            "version" => version = Some(required_scalar(path, "version", value)?),
            _ => {
                if let Some(value) = scalar(value) {
                    extra.insert(key, value);
                }
            }
        }
    }

    if name.is_none() {
        return Err(PlugscoutError::malformed(path, "missing `name` key"));
    }
    if version.is_none() {
        return Err(PlugscoutError::malformed(path, "missing `version` key"));
    }

    // Second pass: a plain scalar deserialized as a string is its source text.
    let raw: RawFields = serde_yaml::from_str(text)
        .map_err(|e| PlugscoutError::malformed(path, format!("invalid YAML: {e}")))?;
    let (Some(name), Some(version)) = (raw.name.or(name), raw.version.or(version)) else {
        return Err(PlugscoutError::malformed(path, "missing `name` or `version` key"));
    };

    Ok(Manifest {
        name,
        version,
        extra,
    })
}

#[derive(Deserialize)]
struct RawFields {
    name: Option<String>,
    version: Option<String>,
}

fn required_scalar(path: &Path, key: &str, value: &Value) -> Result<String, PlugscoutError> {
    match scalar(value) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(PlugscoutError::malformed(
            path,
            format!("`{key}` must not be empty"),
        )),
        None => Err(PlugscoutError::malformed(
            path,
            format!("`{key}` must be a plain value"),
        )),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use plugscout_core::ErrorKind;

    use super::*;

    fn parse(yaml: &str) -> Result<Manifest, PlugscoutError> {
        parse_manifest(yaml.as_bytes(), Path::new("plugins/Test.jar"))
    }

    #[test]
    fn parse_typical_plugin_yml() {
        let manifest = parse(
            r#"
name: Essentials
version: 2.20.1
main: com.earth2me.essentials.Essentials
api-version: "1.13"
description: Provides an essential, core set of commands for Bukkit.
authors: [zenexer, ementalo]
softdepend: [Vault]
"#,
        )
        .unwrap();
        assert_eq!(manifest.name, "Essentials");
        assert_eq!(manifest.version, "2.20.1");
        assert_eq!(manifest.main_class(), Some("com.earth2me.essentials.Essentials"));
        assert_eq!(manifest.extra.get("api-version").map(String::as_str), Some("1.13"));
        assert!(manifest.description().unwrap().starts_with("Provides"));
        assert!(!manifest.extra.contains_key("authors"));
    }

    #[test]
    fn numeric_version_is_stringified() {
        let manifest = parse("name: Foo\nversion: 1.2\n").unwrap();
        assert_eq!(manifest.version, "1.2");

        let manifest = parse("name: Foo\nversion: 3\n").unwrap();
        assert_eq!(manifest.version, "3");
    }

    #[test]
    fn numeric_version_keeps_source_text() {
        for version in ["1.10", "2.50", "0x1F", "1e3", "007"] {
            let manifest = parse(&format!("name: Foo\nversion: {version}\n")).unwrap();
            assert_eq!(manifest.version, version);
        }

        let manifest = parse("name: 1.20\nversion: 1.0\n").unwrap();
        assert_eq!(manifest.name, "1.20");
        assert_eq!(manifest.version, "1.0");
    }

    #[test]
    fn missing_version_is_malformed() {
        let err = parse("name: Foo\nmain: a.b.C\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedManifest);
        assert!(err.to_string().contains("missing `version`"));
    }

    #[test]
    fn missing_name_is_malformed() {
        let err = parse("version: 1.0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedManifest);
        assert!(err.to_string().contains("missing `name`"));
    }

    #[test]
    fn null_or_list_version_is_malformed() {
        let err = parse("name: Foo\nversion:\n").unwrap_err();
        assert!(err.to_string().contains("plain value"));

        let err = parse("name: Foo\nversion: [1, 2]\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedManifest);
    }

    #[test]
    fn empty_name_is_malformed() {
        let err = parse("name: \"\"\nversion: 1.0\n").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn non_mapping_document_is_malformed() {
        let err = parse("- just\n- a list\n").unwrap_err();
        assert!(err.to_string().contains("key-value document"));
    }

    #[test]
    fn invalid_yaml_is_malformed() {
        let err = parse("name: [unclosed\nversion: 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedManifest);
    }

    #[test]
    fn non_utf8_is_malformed() {
        let err = parse_manifest(&[0xff, 0xfe, 0x00], Path::new("x.jar")).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let manifest = parse("\u{feff}name: Foo\nversion: 1.0.0\n").unwrap();
        assert_eq!(manifest.name, "Foo");
    }
}
