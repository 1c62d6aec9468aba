// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hook command arguments.
//!
//! # Subcommands
//!
//! ```text
//! hook run
//!   → rebase/freshness checks, formatters, re-stage (git calls this)
//! hook install [--force]
//!   → write .git/hooks/pre-commit
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `hook` command.
#[derive(Debug, Clone, Args)]
pub struct HookArgs {
    /// Hook subcommand.
    #[command(subcommand)]
    pub subcommand: HookSubcommand,
}

/// Hook subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum HookSubcommand {
    /// Runs the pre-commit checks and formatters on the staged files.
    Run(RunArgs),

    /// Installs the pre-commit hook into the current repository.
    Install(InstallArgs),
}

/// Arguments for the run subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Repository to run in instead of the current directory.
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,
}

/// Arguments for the install subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Replaces an existing pre-commit hook that lakeops did not write.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Repository to install into instead of the current directory.
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,
}
