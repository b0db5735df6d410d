// SPDX-FileCopyrightText: 2026 Plugscout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugscout - check installed Minecraft server plugins for newer releases.
//!
//! This is the binary entry point.

mod check;
mod config_cmd;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use plugscout_config::{ConfigError, PlugscoutConfig};

/// Plugscout - check installed Minecraft server plugins for newer releases.
#[derive(Parser, Debug)]
#[command(name = "plugscout", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one plugin, or all of them, for updates.
    Check {
        /// Plugin name as written in its plugin.yml, or "all".
        #[arg(default_value = "all")]
        plugin_name: String,
        /// Plugin folder. Defaults to `plugins.path` from the configuration.
        folder: Option<PathBuf>,
        /// Print the plugin records as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Show or change a configuration value.
    Config {
        /// Parameter in `section.name` form, e.g. `plugins.path`.
        name: String,
        /// New value. Omit to show the current one.
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            plugscout_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level);

    match cli.command {
        Commands::Check {
            plugin_name,
            folder,
            json,
            plain,
        } => match check::run_check(&config, &plugin_name, folder, json, plain).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {}", "error".red(), check::describe_error(&e));
                ExitCode::FAILURE
            }
        },
        Commands::Config { name, value } => {
            let target = cli
                .config
                .clone()
                .or_else(plugscout_config::user_config_path);
            match config_cmd::run_config(config, &name, value.as_deref(), target.as_deref()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    plugscout_config::render_errors(std::slice::from_ref(&e));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<PlugscoutConfig, Vec<ConfigError>> {
    match &cli.config {
        Some(path) => plugscout_config::load_and_validate_path(path),
        None => plugscout_config::load_and_validate(),
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides `log.level`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plugscout={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
