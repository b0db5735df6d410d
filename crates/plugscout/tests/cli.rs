// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs the `plugscout` binary in an isolated directory with a clean environment.

use std::path::Path;
use std::process::{Command, Output};

use plugscout_test_utils::write_plugin_jar;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn plugscout(home: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plugscout"))
        .args(args)
        .current_dir(home)
        .env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .envs(envs.iter().copied())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

async fn spiget() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/resources/Essentials"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 9089, "name": "Essentials"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/resources/9089/versions/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "2.20.1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/resources/Vault"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn check_all_prints_table() {
    let server = spiget().await;
    let home = tempfile::tempdir().unwrap();
    let plugins = home.path().join("plugins");
    std::fs::create_dir(&plugins).unwrap();
    write_plugin_jar(&plugins, "Essentials.jar", "Essentials", "2.19.0").unwrap();
    write_plugin_jar(&plugins, "Vault.jar", "Vault", "1.7.3").unwrap();

    let uri = server.uri();
    let output = plugscout(
        home.path(),
        &["check", "--plain"],
        &[("PLUGSCOUT_LIBRARY_SPIGOT_URL", uri.as_str())],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Current Version"));
    assert!(out.contains("Update Available"));
    assert!(out.contains("Essentials"));
    assert!(out.contains("2.20.1"));
    assert!(out.contains("Not Found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_named_plugin_as_json() {
    let server = spiget().await;
    let home = tempfile::tempdir().unwrap();
    let folder = home.path().join("srv");
    std::fs::create_dir(&folder).unwrap();
    write_plugin_jar(&folder, "Essentials.jar", "Essentials", "2.19.0").unwrap();
    write_plugin_jar(&folder, "Vault.jar", "Vault", "1.7.3").unwrap();

    let uri = server.uri();
    let folder_arg = folder.to_string_lossy().into_owned();
    let output = plugscout(
        home.path(),
        &["check", "Essentials", &folder_arg, "--json"],
        &[("PLUGSCOUT_LIBRARY_SPIGOT_URL", uri.as_str())],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let records: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Essentials");
    assert_eq!(records[0]["version"], "2.19.0");
    assert_eq!(records[0]["last_version"], "2.20.1");
    assert_eq!(records[0]["update_available"], "available");
}

#[test]
fn check_empty_folder_says_no_plugins() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir(home.path().join("plugins")).unwrap();

    let output = plugscout(home.path(), &["check"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No plugins found!"));
}

#[test]
fn check_missing_plugin_says_not_installed() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir(home.path().join("plugins")).unwrap();

    let output = plugscout(home.path(), &["check", "Essentials"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Plugin not installed!"));
}

#[test]
fn check_missing_folder_fails() {
    let home = tempfile::tempdir().unwrap();

    let output = plugscout(home.path(), &["check", "all", "no-such-dir"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("plugin folder not found"));
}

#[test]
fn unknown_library_selector_fails() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir(home.path().join("plugins")).unwrap();

    let output = plugscout(
        home.path(),
        &["check"],
        &[("PLUGSCOUT_PLUGINS_DEFAULT_LIBRARY", "curseforge")],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("curseforge"));
}

#[test]
fn config_shows_value() {
    let home = tempfile::tempdir().unwrap();

    let output = plugscout(home.path(), &["config", "plugins.path"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "[plugins]\npath = plugins");
}

#[test]
fn config_set_persists_to_explicit_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("custom.toml");
    std::fs::write(&file, "[plugins]\npath = \"old\"\n").unwrap();
    let file_arg = file.to_string_lossy().into_owned();

    let output = plugscout(
        home.path(),
        &["--config", &file_arg, "config", "plugins.path", "/srv/mc/plugins"],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Value before: old"));
    assert!(out.contains("path = /srv/mc/plugins"));

    let output = plugscout(
        home.path(),
        &["--config", &file_arg, "config", "plugins.path"],
        &[],
    );
    assert!(stdout(&output).contains("path = /srv/mc/plugins"));
}

#[test]
fn config_set_defaults_to_user_file() {
    let home = tempfile::tempdir().unwrap();

    let output = plugscout(home.path(), &["config", "library.concurrency", "8"], &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let saved =
        std::fs::read_to_string(home.path().join(".config/plugscout/plugscout.toml")).unwrap();
    assert!(saved.contains("concurrency = 8"));
}

#[test]
fn env_override_is_shown_but_not_saved() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("custom.toml");
    let file_arg = file.to_string_lossy().into_owned();
    let envs = [("PLUGSCOUT_PLUGINS_PATH", "/from/env")];

    let output = plugscout(
        home.path(),
        &["--config", &file_arg, "config", "plugins.path"],
        &envs,
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("path = /from/env"));

    let output = plugscout(
        home.path(),
        &["--config", &file_arg, "config", "log.level", "debug"],
        &envs,
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let saved = std::fs::read_to_string(&file).unwrap();
    assert!(saved.contains("level = \"debug\""));
    assert!(!saved.contains("/from/env"));
    assert!(!saved.contains("[plugins]"));
}

#[test]
fn config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();

    let output = plugscout(home.path(), &["config", "plugins.pth"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("plugins.pth"));
}

#[test]
fn invalid_config_file_is_reported() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("plugscout.toml"),
        "[library]\nconcurrency = 0\n",
    )
    .unwrap();

    let output = plugscout(home.path(), &["check"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("concurrency"));
}
