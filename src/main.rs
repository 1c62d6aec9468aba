// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Hook | Schemas | Generate | Options | Inis | Version
//! ```

use std::process::ExitCode;

use lakeops::cli::global::GlobalOptions;
use lakeops::cli::{self, Command};
use lakeops::cmd::config::{run_inis_command, run_options_command};
use lakeops::cmd::generate::run_generate_command;
use lakeops::cmd::hook::run_hook_command;
use lakeops::cmd::schemas::run_schemas_command;
use lakeops::config::Config;
use lakeops::config::loader::ConfigLoader;
use lakeops::config::types::GlobalConfig;
use lakeops::logging::init_logging;
use lakeops::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Project configuration picked up from the working directory.
const DEFAULT_CONFIG_FILE: &str = "lakeops.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "LAKEOPS";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, config.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config).await
}

fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let defaults = GlobalConfig::default();
    let settings = config.map_or(&defaults, |config| &config.global);

    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(settings.output_log_level);

    let file_level = global
        .file_log_level
        .or(global.log_level)
        .and_then(LogLevel::from_u8)
        .unwrap_or(settings.file_log_level);

    let log_file = global
        .log_file
        .as_ref()
        .or(settings.log_file.as_ref())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: lakeops::error::Result<Config>) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Options(args)) => {
            config.and_then(|config| run_options_command(args, &config))
        }
        Some(Command::Hook(args)) => match config {
            Ok(config) => run_hook_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Schemas(args)) => match config {
            Ok(config) => run_schemas_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Generate(args)) => {
            config.and_then(|config| run_generate_command(args, &config))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> lakeops::error::Result<Config> {
    build_config_loader(global)
        .apply_overrides(&global.to_config_overrides())
        .and_then(ConfigLoader::build)
        .map_err(|e| e.context("failed to load config"))
}
