// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git repository discovery.
//!
//! ```text
//! start dir (any subdirectory of the worktree)
//!     |
//!     v
//! gix::discover --> RepoLayout { root, git_dir }
//!                     root     = worktree top level (cwd for git commands)
//!                     git_dir  = .git/ (hooks/ lives here)
//! ```

use std::path::{Path, PathBuf};

use crate::error::{GitError, GixError, OpsResult};

/// Locations of a non-bare repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Top-level directory of the worktree.
    pub root: PathBuf,
    /// The repository's git directory.
    pub git_dir: PathBuf,
}

impl RepoLayout {
    /// Directory git runs hooks from.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir.join("hooks")
    }
}

/// Find the repository containing `start`.
///
/// # Errors
///
/// Returns a `GitError` if no repository contains `start` or the repository
/// is bare.
pub fn discover(start: &Path) -> OpsResult<RepoLayout> {
    let repo =
        gix::discover(start).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
    let root = repo
        .workdir()
        .ok_or(GitError::Gix(GixError::BareRepository))?
        .to_path_buf();
    Ok(RepoLayout {
        root,
        git_dir: repo.git_dir().to_path_buf(),
    })
}
