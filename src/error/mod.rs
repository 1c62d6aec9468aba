// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              OpsError (~24 bytes)
//!                     |
//!     +------+------+------+------+------+
//!     |      |      |      |      |      |
//!     v      v      v      v      v      v
//!    Git    Cfg   Hook   Proc    Fs    Other
//!    Box    Box   Box    Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed
//!   Config  MissingKey, InvalidValue, InvalidOverride
//!   Hook    NotRebased, StaleBase, ToolMissing, ToolFailed
//!   Process SpawnFailed, ReadFailed
//!   Fs      IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`OpsError`].
pub type OpsResult<T> = std::result::Result<T, OpsError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Pre-commit check failed.
    #[error("pre-commit: {0}")]
    Hook(#[from] Box<HookError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for OpsError {
                fn from(err: $error) -> Self {
                    OpsError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    HookError => Hook,
    ProcessError => Process,
    FsError => Fs,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override that is not of the form `key=value`.
    #[error("invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),
}

// --- Hook Errors ---

/// Pre-commit hook failures. Each one aborts the commit.
#[derive(Debug, Error)]
pub enum HookError {
    /// `<remote>/<base>` is not an ancestor of `HEAD`.
    #[error("branch '{branch}' is not rebased on '{base}'; run `git rebase {base}` first")]
    NotRebased { branch: String, base: String },

    /// Local base branch differs from its remote counterpart after fetching.
    #[error("local '{local}' is out of date with '{remote}'; pull it before committing")]
    StaleBase { local: String, remote: String },

    /// Formatter or linter executable is not installed.
    #[error("'{tool}' needs '{program}', which is not in PATH")]
    ToolMissing { tool: String, program: String },

    /// Formatter or linter exited with a failure status.
    #[error("'{tool}' failed with exit code {code}")]
    ToolFailed { tool: String, code: i32 },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading a captured stream failed before the process finished.
    #[error("failed to read {stream} of '{process}': {source}")]
    ReadFailed {
        process: String,
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
