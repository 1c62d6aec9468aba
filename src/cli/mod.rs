// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for lakeops using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! lakeops [global options] <command>
//! hook {run|install [--force]}
//! schemas dump [TABLE...]
//! generate
//! options [--json]
//! inis
//! version
//! ```

pub mod generate;
pub mod global;
pub mod hook;
pub mod schemas;


use crate::cli::generate::GenerateArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::hook::HookArgs;
use crate::cli::schemas::SchemasArgs;
use clap::{Args, Parser, Subcommand};

/// Lakehouse ingestion tooling
///
/// Pre-commit formatting hook, Glue schema dump and SQL populator generator.
#[derive(Debug, Parser)]
#[command(
    name = "lakeops",
    author,
    version,
    about = "Lakehouse ingestion tooling",
    long_about = "lakeops Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Pre-commit formatting hook, Glue schema dump and SQL populator\n\
                  generator for the lakehouse ingestion project.\n\n\
                  Run `lakeops hook install` once per clone, `lakeops schemas dump`\n\
                  to refresh the table schemas and `lakeops generate` to write the\n\
                  populators. See `lakeops <command> --help` for more information.",
    after_help = "CONFIGURATION:\n\n\
                  lakeops reads `lakeops.toml` from the current directory if it\n\
                  exists, then every file given with --ini, then LAKEOPS_*\n\
                  environment variables (LAKEOPS_HOOK__BASE_BRANCH=develop), then\n\
                  --set KEY=VALUE options. Later sources override earlier ones."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options(OptionsArgs),

    /// Lists the configuration files used by lakeops.
    Inis,

    /// Runs or installs the git pre-commit hook.
    Hook(HookArgs),

    /// Manages Glue table schemas.
    Schemas(SchemasArgs),

    /// Generates Glue catalog and S3 populator SQL files.
    Generate(GenerateArgs),
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Prints the resolved configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
