// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staged file classification.
//!
//! ```text
//! staged paths --> first enabled formatter (name order) whose glob matches
//!   app.py        --> black
//!   web/index.ts  --> prettier
//!   sql/load.sql  --> sqlfluff
//!   Makefile      --> (unmatched)
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use wax::{Glob, Program as _};

use crate::config::types::FormatterConfig;
use crate::error::{ConfigError, OpsResult};

/// Staged files grouped by the formatter that handles them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Formatter name → files, in staging order.
    pub groups: BTreeMap<String, Vec<PathBuf>>,
    /// Files no formatter claims.
    pub unmatched: Vec<PathBuf>,
}

impl Classification {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every file handed to a formatter.
    #[must_use]
    pub fn matched_files(&self) -> Vec<PathBuf> {
        self.groups.values().flatten().cloned().collect()
    }
}

/// Assign each path to the first enabled formatter whose patterns match it.
///
/// # Errors
///
/// Returns a `ConfigError::InvalidValue` if a pattern is not a valid glob.
pub fn classify(
    paths: &[PathBuf],
    formatters: &BTreeMap<String, FormatterConfig>,
) -> OpsResult<Classification> {
    let mut matchers = Vec::new();
    for (name, formatter) in formatters.iter().filter(|(_, f)| f.enabled) {
        let globs = formatter
            .patterns
            .iter()
            .map(|pattern| {
                Glob::new(pattern).map_err(|e| ConfigError::InvalidValue {
                    section: format!("hook.formatters.{name}"),
                    key: "patterns".to_string(),
                    message: format!("'{pattern}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        matchers.push((name, globs));
    }

    let mut classification = Classification::default();
    for path in paths {
        let owner = matchers
            .iter()
            .find(|(_, globs)| globs.iter().any(|glob| glob.is_match(path.as_path())))
            .map(|(name, _)| *name);
        match owner {
            Some(name) => classification
                .groups
                .entry(name.clone())
                .or_default()
                .push(path.clone()),
            None => classification.unmatched.push(path.clone()),
        }
    }
    Ok(classification)
}
