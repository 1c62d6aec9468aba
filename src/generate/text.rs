// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field name normalization and alias alignment.

use std::collections::HashSet;

use anyhow::Context;
use regex::Regex;

use crate::error::Result;

/// Turns source column names into lakehouse-style identifiers.
#[derive(Debug, Clone)]
pub struct Normalizer {
    punctuation: Regex,
    whitespace: Regex,
}

impl Normalizer {
    /// # Errors
    ///
    /// Returns an error if the patterns fail to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            punctuation: Regex::new(r"[^\w\s]")
                .with_context(|| "failed to compile punctuation regex")?,
            whitespace: Regex::new(r"\s+").with_context(|| "failed to compile whitespace regex")?,
        })
    }

    /// Lowercase, drop punctuation and join words with `_`.
    ///
    /// `"Fecha (Inicio)"` becomes `"fecha_inicio"`.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.punctuation.replace_all(&lowered, "");
        self.whitespace
            .replace_all(stripped.trim(), "_")
            .into_owned()
    }
}

/// Pick a lakehouse alias for every source field.
///
/// For each position: the normalized name itself if it is an alias not yet
/// taken, otherwise the first alias not yet taken that starts with the
/// normalized name, otherwise the normalized name. Only exact matches take
/// an alias.
#[must_use]
pub fn align_aliases<S: AsRef<str>>(normalized: &[S], aliases: &[String]) -> Vec<String> {
    let mut taken: HashSet<&str> = HashSet::new();
    normalized
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if !taken.contains(name) && aliases.iter().any(|alias| alias == name) {
                taken.insert(name);
                return name.to_string();
            }
            aliases
                .iter()
                .find(|alias| alias.starts_with(name) && !taken.contains(alias.as_str()))
                .cloned()
                .unwrap_or_else(|| name.to_string())
        })
        .collect()
}
