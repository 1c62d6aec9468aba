// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git CLI operations.
//!
//! ```text
//! cmd.rs --> CommandRunner --> git (merge-base, fetch, rev-parse, diff, add)
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::exec::{CommandRunner, Invocation};
use crate::core::process::builder::ProcessOutput;
use crate::error::{GitError, OpsResult};

/// Build a git invocation with standard environment variables.
/// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
pub(crate) fn git_invocation<I, S>(repo: &Path, args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    Invocation::new("git")
        .args(args)
        .cwd(repo)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
}

async fn run_git(runner: &dyn CommandRunner, invocation: &Invocation) -> OpsResult<ProcessOutput> {
    debug!(command = %invocation.command_line(), "running git");
    let output = runner
        .run(invocation)
        .await
        .map_err(|e| GitError::CommandFailed {
            command: invocation.command_line(),
            message: format!("{e:#}"),
        })?;
    trace!(
        exit_code = output.exit_code(),
        stdout = output.stdout(),
        stderr = output.stderr(),
        "git finished"
    );
    Ok(output)
}

async fn run_git_checked(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
) -> OpsResult<ProcessOutput> {
    let output = run_git(runner, invocation).await?;
    if output.success() {
        Ok(output)
    } else {
        Err(GitError::CommandFailed {
            command: invocation.command_line(),
            message: failure_message(&output),
        }
        .into())
    }
}

fn failure_message(output: &ProcessOutput) -> String {
    let stderr = output.stderr().trim();
    if stderr.is_empty() {
        format!("exit code {}", output.exit_code())
    } else {
        stderr.to_string()
    }
}

/// Check whether `ancestor` is an ancestor of `descendant`.
///
/// Exit code 0 means yes, 1 means no; anything else is an error (unknown
/// revision, not a repository).
///
/// # Errors
///
/// Returns a `GitError` if git cannot be run or cannot resolve a revision.
pub async fn is_ancestor(
    runner: &dyn CommandRunner,
    repo: &Path,
    ancestor: &str,
    descendant: &str,
) -> OpsResult<bool> {
    let invocation = git_invocation(repo, ["merge-base", "--is-ancestor", ancestor, descendant]);
    let output = run_git(runner, &invocation).await?;
    match output.exit_code() {
        0 => Ok(true),
        1 => Ok(false),
        _ => Err(GitError::CommandFailed {
            command: invocation.command_line(),
            message: failure_message(&output),
        }
        .into()),
    }
}

/// Fetch one branch from a remote.
///
/// # Errors
///
/// Returns a `GitError` if the fetch fails.
pub async fn fetch(
    runner: &dyn CommandRunner,
    repo: &Path,
    remote: &str,
    branch: &str,
) -> OpsResult<()> {
    let invocation = git_invocation(repo, ["fetch", "--quiet", remote, branch]);
    run_git_checked(runner, &invocation).await?;
    Ok(())
}

/// Resolve a revision to an object id; `None` when it does not exist.
///
/// # Errors
///
/// Returns a `GitError` only if git cannot be started.
pub async fn rev_parse(
    runner: &dyn CommandRunner,
    repo: &Path,
    revision: &str,
) -> OpsResult<Option<String>> {
    let invocation = git_invocation(repo, ["rev-parse", "--verify", "--quiet", revision]);
    let output = run_git(runner, &invocation).await?;
    let id = output.stdout().trim();
    if output.success() && !id.is_empty() {
        Ok(Some(id.to_string()))
    } else {
        Ok(None)
    }
}

/// Name of the checked-out branch; `None` when `HEAD` is detached.
///
/// # Errors
///
/// Returns a `GitError` if `HEAD` cannot be resolved.
pub async fn current_branch(runner: &dyn CommandRunner, repo: &Path) -> OpsResult<Option<String>> {
    let invocation = git_invocation(repo, ["rev-parse", "--abbrev-ref", "HEAD"]);
    let output = run_git_checked(runner, &invocation).await?;
    let name = output.stdout().trim();
    Ok((name != "HEAD" && !name.is_empty()).then(|| name.to_string()))
}

/// Added, copied, modified and renamed paths in the index, relative to the
/// repository root. Deleted paths are left out.
///
/// # Errors
///
/// Returns a `GitError` if `git diff` fails.
pub async fn staged_files(runner: &dyn CommandRunner, repo: &Path) -> OpsResult<Vec<PathBuf>> {
    let invocation = git_invocation(
        repo,
        ["diff", "--cached", "--name-only", "--diff-filter=ACMR", "-z"],
    );
    let output = run_git_checked(runner, &invocation).await?;
    Ok(parse_nul_separated(output.stdout_bytes()))
}

/// Split `-z` output into paths, keeping names that are not UTF-8.
pub(crate) fn parse_nul_separated(stdout: &[u8]) -> Vec<PathBuf> {
    stdout
        .split(|&byte| byte == 0)
        .filter(|entry| !entry.is_empty())
        .map(path_from_bytes)
        .collect()
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Stage `files` again.
///
/// # Errors
///
/// Returns a `GitError` if `git add` fails.
pub async fn add(runner: &dyn CommandRunner, repo: &Path, files: &[PathBuf]) -> OpsResult<()> {
    if files.is_empty() {
        return Ok(());
    }
    let invocation = git_invocation(repo, ["add", "--"]).args(files);
    run_git_checked(runner, &invocation).await?;
    Ok(())
}
