// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for lakeops.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (Config::default())
//! 2. lakeops.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. LAKEOPS_* env vars
//! 5. --set KEY=VALUE
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! LAKEOPS_HOOK__BASE_BRANCH=develop → hook.base_branch = "develop"
//! LAKEOPS_GLUE__DATABASE=raw_zone   → glue.database = "raw_zone"
//! ```
//!
//! # Formatters
//!
//! ```toml
//! [hook.formatters.black]
//! enabled = false
//!
//! [hook.formatters.ruff]
//! program = "ruff"
//! args = ["format"]
//! patterns = ["**/*.py"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GenerateConfig, GlobalConfig, GlueConfig, HookConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Pre-commit hook.
    pub hook: HookConfig,
    /// Glue schema dump.
    pub glue: GlueConfig,
    /// SQL populator generation.
    pub generate: GenerateConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lakeops::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("lakeops.toml")
    ///     .with_env_prefix("LAKEOPS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an enabled formatter with an
    /// empty program or pattern list, or a pattern that is not a valid glob.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (name, formatter) in &self.hook.formatters {
            if !formatter.enabled {
                continue;
            }
            let invalid = |key: &str, message: String| ConfigError::InvalidValue {
                section: format!("hook.formatters.{name}"),
                key: key.to_string(),
                message,
            };
            if formatter.program.trim().is_empty() {
                return Err(invalid("program", "must not be empty".to_string()));
            }
            if formatter.patterns.is_empty() {
                return Err(invalid("patterns", "at least one pattern is required".to_string()));
            }
            for pattern in &formatter.patterns {
                wax::Glob::new(pattern)
                    .map_err(|e| invalid("patterns", format!("'{pattern}': {e}")))?;
            }
        }
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_hook_options(&mut options);
        self.format_glue_options(&mut options);
        self.format_generate_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_hook_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("hook.remote".into(), self.hook.remote.clone());
        options.insert("hook.base_branch".into(), self.hook.base_branch.clone());
        options.insert("hook.check_rebase".into(), self.hook.check_rebase.to_string());
        options.insert(
            "hook.check_base_fresh".into(),
            self.hook.check_base_fresh.to_string(),
        );
        options.insert("hook.restage".into(), self.hook.restage.to_string());
        for (name, formatter) in &self.hook.formatters {
            let prefix = format!("hook.formatters.{name}");
            options.insert(format!("{prefix}.enabled"), formatter.enabled.to_string());
            options.insert(
                format!("{prefix}.command"),
                std::iter::once(formatter.program.as_str())
                    .chain(formatter.args.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            options.insert(format!("{prefix}.patterns"), formatter.patterns.join(", "));
        }
    }

    fn format_glue_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("glue.database".into(), self.glue.database.clone());
        options.insert(
            "glue.output_dir".into(),
            self.glue.output_dir.display().to_string(),
        );
        options.insert("glue.tables".into(), self.glue.tables.join(", "));
        if let Some(profile) = &self.glue.profile {
            options.insert("glue.profile".into(), profile.clone());
        }
        if let Some(region) = &self.glue.region {
            options.insert("glue.region".into(), region.clone());
        }
    }

    fn format_generate_options(&self, options: &mut BTreeMap<String, String>) {
        let generate = &self.generate;
        options.insert(
            "generate.schemas_path".into(),
            generate.schemas_path.display().to_string(),
        );
        options.insert(
            "generate.catalog_output".into(),
            generate.catalog_output.display().to_string(),
        );
        options.insert(
            "generate.s3_output".into(),
            generate.s3_output.display().to_string(),
        );
        options.insert(
            "generate.lakehouse_database".into(),
            generate.lakehouse_database.clone(),
        );
        options.insert(
            "generate.location_prefix".into(),
            generate.location_prefix.clone(),
        );
        options.insert(
            "generate.source_database".into(),
            generate.source_database.clone(),
        );
        options.insert("generate.table_suffix".into(), generate.table_suffix.clone());
        options.insert(
            "generate.populator_suffix".into(),
            generate.populator_suffix.clone(),
        );
        options.insert("generate.process_name".into(), generate.process_name.clone());
        for (schema, interface) in &generate.replacements {
            options.insert(format!("generate.replacements.{schema}"), interface.clone());
        }
        for (name, interface) in &generate.interfaces {
            options.insert(
                format!("generate.interfaces.{name}.lakehouse_name"),
                interface.lakehouse_name.clone(),
            );
            options.insert(
                format!("generate.interfaces.{name}.aliases"),
                interface.aliases.len().to_string(),
            );
        }
    }
}
