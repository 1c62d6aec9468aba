// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test runner that records invocations and replays canned outputs.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

use futures_util::future::BoxFuture;

use super::{CommandRunner, Invocation};
use crate::core::process::builder::ProcessOutput;
use crate::error::Result;

/// Replies to invocations whose command line starts with a given prefix.
///
/// Rules are checked in insertion order; unmatched invocations succeed with
/// empty output.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(String, ProcessOutput)>,
    missing: BTreeSet<String>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replies with `stdout` and exit code 0.
    pub(crate) fn stdout(self, prefix: &str, stdout: &str) -> Self {
        self.respond(prefix, ProcessOutput::new(0, stdout.to_string(), String::new()))
    }

    /// Replies with an empty stdout and the given exit code.
    pub(crate) fn exit(self, prefix: &str, code: i32, stderr: &str) -> Self {
        self.respond(prefix, ProcessOutput::new(code, String::new(), stderr.to_string()))
    }

    pub(crate) fn respond(mut self, prefix: &str, output: ProcessOutput) -> Self {
        self.rules.push((prefix.to_string(), output));
        self
    }

    /// Makes `locate(program)` report the program as not installed.
    pub(crate) fn missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(Invocation::command_line).collect()
    }

    /// Number of recorded invocations whose command line starts with `prefix`.
    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.command_lines()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        if self.missing.contains(program) {
            None
        } else {
            Some(PathBuf::from("/usr/bin").join(program))
        }
    }

    fn run<'a>(&'a self, invocation: &'a Invocation) -> BoxFuture<'a, Result<ProcessOutput>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(invocation.clone());

            let line = invocation.command_line();
            let output = self
                .rules
                .iter()
                .find(|(prefix, _)| line.starts_with(prefix.as_str()))
                .map(|(_, output)| output.clone())
                .unwrap_or_default();
            Ok(output)
        })
    }
}
