// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration errors as miette diagnostics.
//!
//! Figment reports an unknown key relative to whatever it was deserializing;
//! here it is re-keyed to `section.name`, matched against the keys
//! [`PlugscoutConfig`] actually has, and pointed at the line of the TOML file
//! it came from.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::fmt::Write as _;
use std::io::IsTerminal;

use figment::error::Kind;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

use crate::model::PlugscoutConfig;

/// Jaro-Winkler score a candidate needs before it is offered as a correction.
const MIN_SIMILARITY: f64 = 0.75;

/// Anything wrong with loading, validating or editing the configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(plugscout::config::unknown_key),
        help("{}", did_you_mean(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// Dotted `section.name`.
        key: String,
        suggestion: Option<String>,
        /// Comma-separated keys of the section.
        valid_keys: String,
        #[label("unknown key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("unknown configuration section `{section}`")]
    #[diagnostic(
        code(plugscout::config::unknown_section),
        help("{}", did_you_mean(suggestion.as_deref(), valid_sections))
    )]
    UnknownSection {
        section: String,
        suggestion: Option<String>,
        valid_sections: String,
        #[label("unknown section")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("invalid key `{key}`")]
    #[diagnostic(
        code(plugscout::config::invalid_key_format),
        help("keys use the form `section.name`, e.g. `plugins.path`")
    )]
    InvalidKeyFormat { key: String },

    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(plugscout::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
        #[label("wrong type")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value parsed but is not usable (empty selector, zero timeout, ...).
    #[error("validation error: {message}")]
    #[diagnostic(code(plugscout::config::validation))]
    Validation { message: String },

    #[error("cannot access {path}: {message}")]
    #[diagnostic(code(plugscout::config::io))]
    Io { path: String, message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(plugscout::config::other))]
    Other(String),
}

impl ConfigError {
    /// Convert every error figment collected into a diagnostic.
    ///
    /// `sources` are `(path, content)` pairs of the TOML files that were merged;
    /// they are only used to attach source spans.
    pub fn from_figment(err: figment::Error, sources: &[(String, String)]) -> Vec<Self> {
        err.into_iter()
            .map(|error| convert(error, sources))
            .collect()
    }
}

fn convert(error: figment::Error, sources: &[(String, String)]) -> ConfigError {
    let source = source_of(&error, sources);
    let known = known_keys();

    match &error.kind {
        Kind::UnknownField(field, _) => match error.path.first() {
            None => {
                let sections: Vec<&str> = known.keys().map(String::as_str).collect();
                let (span, src) = span_in(source, |content| find_section(content, field), field);
                ConfigError::UnknownSection {
                    section: field.clone(),
                    suggestion: suggest_key(field, &sections),
                    valid_sections: sections.join(", "),
                    span,
                    src,
                }
            }
            Some(section) => {
                let keys: Vec<&str> = known
                    .get(section)
                    .and_then(toml::Value::as_table)
                    .map(|t| t.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                let (span, src) =
                    span_in(source, |content| find_key(content, section, field), field);
                ConfigError::UnknownKey {
                    key: format!("{section}.{field}"),
                    suggestion: suggest_key(field, &keys),
                    valid_keys: keys.join(", "),
                    span,
                    src,
                }
            }
        },
        Kind::InvalidType(actual, expected) => {
            let (span, src) = match error.path.as_slice() {
                [section, field] => {
                    span_in(source, |content| find_key(content, section, field), field)
                }
                _ => (None, None),
            };
            ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.clone(),
                span,
                src,
            }
        }
        _ => ConfigError::Other(error.to_string()),
    }
}

/// Sections and keys of the model, taken from its serialized defaults.
fn known_keys() -> toml::Table {
    toml::Table::try_from(PlugscoutConfig::default()).unwrap_or_default()
}

fn source_of<'a>(
    error: &figment::Error,
    sources: &'a [(String, String)],
) -> Option<&'a (String, String)> {
    match error.metadata.as_ref().and_then(|m| m.source.as_ref()) {
        Some(figment::Source::File(path)) => {
            let path = path.display().to_string();
            sources.iter().find(|(p, _)| *p == path)
        }
        // Inline strings carry no path.
        _ if sources.len() == 1 => sources.first(),
        _ => None,
    }
}

fn span_in(
    source: Option<&(String, String)>,
    find: impl FnOnce(&str) -> Option<usize>,
    needle: &str,
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let Some((path, content)) = source else {
        return (None, None);
    };
    match find(content) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), needle.len())),
            Some(NamedSource::new(path, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of the `[name]` header's name.
pub fn find_section(content: &str, name: &str) -> Option<usize> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if header_of(line) == Some(name) {
            return line.find(name).map(|col| offset + col);
        }
        offset += line.len();
    }
    None
}

/// Byte offset of `key = ...` inside the `[section]` table.
pub fn find_key(content: &str, section: &str, key: &str) -> Option<usize> {
    let mut current = None;
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if let Some(header) = header_of(line) {
            current = Some(header);
        } else if current == Some(section)
            && let Some((lhs, _)) = line.split_once('=')
            && lhs.trim() == key
        {
            return line.find(key).map(|col| offset + col);
        }
        offset += line.len();
    }
    None
}

fn header_of(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Closest candidate to `unknown`, if any is similar enough.
pub fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), *candidate))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

fn did_you_mean(suggestion: Option<&str>, valid: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid: {valid}"),
        None => format!("valid: {valid}"),
    }
}

/// Print diagnostics to stderr, colored only when stderr is a terminal.
pub fn render_errors(errors: &[ConfigError]) {
    let theme = if std::io::stderr().is_terminal() {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme);

    let mut out = String::new();
    for error in errors {
        if handler.render_report(&mut out, error).is_err() {
            let _ = writeln!(out, "error: {error}");
        }
    }
    eprint!("{out}");
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[plugins]\npath = \"x\"\npth = \"y\"\n\n[ library ]\ntimeout_secs = \"ten\"\n";

    #[test]
    fn suggestions_pick_the_closest_key() {
        let keys = &["path", "protocol", "default_library"];
        assert_eq!(suggest_key("pth", keys), Some("path".to_string()));
        assert_eq!(
            suggest_key("default_libary", keys),
            Some("default_library".to_string())
        );
        assert_eq!(suggest_key("zzzzzz", keys), None);
    }

    #[test]
    fn finds_key_only_inside_its_section() {
        let offset = find_key(SAMPLE, "plugins", "pth").unwrap();
        assert_eq!(&SAMPLE[offset..offset + 3], "pth");
        assert_eq!(find_key(SAMPLE, "library", "pth"), None);
        assert_eq!(find_key(SAMPLE, "log", "level"), None);
    }

    #[test]
    fn finds_padded_section_header() {
        let offset = find_section(SAMPLE, "library").unwrap();
        assert_eq!(&SAMPLE[offset..offset + 7], "library");
    }

    #[test]
    fn known_keys_cover_every_section() {
        let known = known_keys();
        let sections: Vec<&str> = known.keys().map(String::as_str).collect();
        assert_eq!(sections, vec!["library", "log", "plugins"]);
    }

    #[test]
    fn unknown_key_gets_span_and_dotted_name() {
        let sources = vec![("plugscout.toml".to_string(), "[plugins]\npth = \"x\"\n".to_string())];
        let err = crate::loader::load_config_from_str(&sources[0].1).unwrap_err();
        let errors = ConfigError::from_figment(err, &sources);
        match &errors[0] {
            ConfigError::UnknownKey {
                key,
                suggestion,
                span,
                ..
            } => {
                assert_eq!(key, "plugins.pth");
                assert_eq!(suggestion.as_deref(), Some("path"));
                assert_eq!(span.map(|s| s.offset()), Some(10));
            }
            other => panic!("expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn unknown_section_suggests_real_one() {
        let sources = vec![("<inline>".to_string(), "[logging]\nlevel = \"debug\"\n".to_string())];
        let err = crate::loader::load_config_from_str(&sources[0].1).unwrap_err();
        let errors = ConfigError::from_figment(err, &sources);
        assert!(matches!(
            &errors[0],
            ConfigError::UnknownSection { suggestion: Some(s), .. } if s == "log"
        ));
    }
}
