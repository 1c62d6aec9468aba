// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pre-commit hook.
//!
//! ```text
//! run_pre_commit()
//!   1. merge-base --is-ancestor <remote>/<base> HEAD   (NotRebased)
//!   2. fetch <remote> <base>; rev-parse both sides     (StaleBase)
//!   3. diff --cached --diff-filter=ACMR -z --> classify
//!   4. per formatter: locate (ToolMissing), run once   (ToolFailed)
//!   5. add -- <formatted files>
//! ```
//!
//! The first failing step aborts the hook; git then refuses the commit.

pub mod classify;
pub mod install;


use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::types::HookConfig;
use crate::core::exec::{CommandRunner, Invocation};
use crate::error::{HookError, OpsError, OpsResult};
use crate::git::cmd as git;

use classify::classify;

/// One formatter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    pub tool: String,
    pub files: Vec<PathBuf>,
}

/// Outcome of a successful hook run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookReport {
    /// Formatters that ran, in name order.
    pub runs: Vec<ToolRun>,
    /// Files re-staged after formatting.
    pub restaged: Vec<PathBuf>,
}

impl HookReport {
    /// Number of files handed to a formatter.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.runs.iter().map(|run| run.files.len()).sum()
    }
}

/// Run the pre-commit checks and formatters for the repository at `repo`.
///
/// # Errors
///
/// Returns a `HookError` for a failed check or formatter, or a `GitError`
/// if git itself cannot be run.
pub async fn run_pre_commit(
    runner: &dyn CommandRunner,
    repo: &Path,
    config: &HookConfig,
) -> OpsResult<HookReport> {
    if config.check_rebase {
        check_rebased(runner, repo, config).await?;
    }
    if config.check_base_fresh {
        check_base_fresh(runner, repo, config).await?;
    }

    let staged = git::staged_files(runner, repo).await?;
    if staged.is_empty() {
        info!("No staged files");
        return Ok(HookReport::default());
    }

    let classification = classify(&staged, &config.formatters)?;
    for path in &classification.unmatched {
        debug!(file = %path.display(), "no formatter for staged file");
    }

    let mut report = HookReport::default();
    for (tool, files) in &classification.groups {
        run_formatter(runner, repo, config, tool, files).await?;
        report.runs.push(ToolRun {
            tool: tool.clone(),
            files: files.clone(),
        });
    }

    if config.restage && !classification.is_empty() {
        let files = classification.matched_files();
        git::add(runner, repo, &files).await?;
        debug!(count = files.len(), "re-staged formatted files");
        report.restaged = files;
    }

    Ok(report)
}

async fn check_rebased(
    runner: &dyn CommandRunner,
    repo: &Path,
    config: &HookConfig,
) -> OpsResult<()> {
    let base = config.remote_base();
    if git::is_ancestor(runner, repo, &base, "HEAD").await? {
        debug!(base = %base, "branch is rebased");
        return Ok(());
    }
    let branch = git::current_branch(runner, repo)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| "HEAD".to_string());
    Err(HookError::NotRebased { branch, base }.into())
}

async fn check_base_fresh(
    runner: &dyn CommandRunner,
    repo: &Path,
    config: &HookConfig,
) -> OpsResult<()> {
    let local = config.base_branch.as_str();
    let remote = config.remote_base();

    git::fetch(runner, repo, &config.remote, local).await?;

    let Some(local_id) = git::rev_parse(runner, repo, local).await? else {
        warn!(branch = local, "no local base branch, skipping freshness check");
        return Ok(());
    };
    let Some(remote_id) = git::rev_parse(runner, repo, &remote).await? else {
        warn!(branch = %remote, "remote base branch not found after fetch, skipping freshness check");
        return Ok(());
    };

    if local_id == remote_id {
        debug!(branch = local, id = %local_id, "base branch is up to date");
        Ok(())
    } else {
        Err(HookError::StaleBase {
            local: local.to_string(),
            remote,
        }
        .into())
    }
}

async fn run_formatter(
    runner: &dyn CommandRunner,
    repo: &Path,
    config: &HookConfig,
    tool: &str,
    files: &[PathBuf],
) -> OpsResult<()> {
    let Some(formatter) = config.formatters.get(tool) else {
        return Ok(());
    };
    if runner.locate(&formatter.program).is_none() {
        return Err(HookError::ToolMissing {
            tool: tool.to_string(),
            program: formatter.program.clone(),
        }
        .into());
    }

    info!("Running {tool} on {} file(s)", files.len());
    let invocation = Invocation::new(formatter.program.as_str())
        .args(formatter.args.iter().map(String::as_str))
        .args(files)
        .cwd(repo);
    let output = runner
        .run(&invocation)
        .await
        .map_err(|e| OpsError::Other(format!("{tool}: {e:#}").into_boxed_str()))?;

    if output.success() {
        return Ok(());
    }
    for line in output.stdout().lines().chain(output.stderr().lines()) {
        warn!("{tool}: {line}");
    }
    Err(HookError::ToolFailed {
        tool: tool.to_string(),
        code: output.exit_code(),
    }
    .into())
}
