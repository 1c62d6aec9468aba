// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hook command implementation for lakeops.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::cli::hook::{HookArgs, HookSubcommand};
use crate::config::Config;
use crate::core::exec::SystemRunner;
use crate::error::Result;
use crate::git::discovery::discover;
use crate::hook::install::install_hook;
use crate::hook::run_pre_commit;

/// Main handler for hook command.
///
/// # Errors
///
/// Returns an error if a pre-commit check or formatter fails, or the hook
/// cannot be installed.
pub async fn run_hook_command(args: &HookArgs, config: &Config) -> Result<()> {
    match &args.subcommand {
        HookSubcommand::Run(run) => {
            let start = start_dir(run.repo.as_deref())?;
            let layout = discover(&start)?;
            let report = run_pre_commit(&SystemRunner, &layout.root, &config.hook).await?;
            if !report.runs.is_empty() {
                info!(
                    "Formatted {} file(s) with {}",
                    report.file_count(),
                    report
                        .runs
                        .iter()
                        .map(|run| run.tool.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            Ok(())
        }
        HookSubcommand::Install(install) => {
            let start = start_dir(install.repo.as_deref())?;
            let path = install_hook(&start, install.force)?;
            println!("Installed {}", path.display());
            Ok(())
        }
    }
}

fn start_dir(repo: Option<&Path>) -> Result<PathBuf> {
    match repo {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}
