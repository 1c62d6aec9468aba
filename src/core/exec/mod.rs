// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External command execution behind a trait.
//!
//! Every step that shells out (git, formatters, the AWS CLI) describes the
//! call as an [`Invocation`] and hands it to a [`CommandRunner`]. The runner
//! reports the exit code instead of failing on it, so callers decide what a
//! non-zero status means.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;

use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::Result;

#[cfg(test)]
pub(crate) mod scripted;
#[cfg(test)]
mod tests;

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    env: BTreeMap<String, String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    #[must_use]
    pub const fn environment(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Program and arguments joined by spaces, for logs and messages.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs external commands.
pub trait CommandRunner: Send + Sync {
    /// Resolves `program` on `PATH`; `None` when it is not installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Runs the invocation to completion and returns its captured output.
    ///
    /// A non-zero exit status is not an error here. Errors mean the
    /// process could not be started or waited on.
    fn run<'a>(&'a self, invocation: &'a Invocation) -> BoxFuture<'a, Result<ProcessOutput>>;
}

/// Runner that spawns real processes through [`ProcessBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        ProcessBuilder::find(program)
    }

    fn run<'a>(&'a self, invocation: &'a Invocation) -> BoxFuture<'a, Result<ProcessOutput>> {
        Box::pin(async move {
            let mut builder = ProcessBuilder::new(invocation.program())
                .args(invocation.arguments())
                .flags(ProcessFlags::ALLOW_FAILURE)
                .capture_output();
            if let Some(cwd) = invocation.working_dir() {
                builder = builder.cwd(cwd);
            }
            for (key, value) in invocation.environment() {
                builder = builder.env(key, value);
            }
            builder.run().await
        })
    }
}
