// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::types::FormatterConfig;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.hook.remote_base(), "origin/main");
    assert!(config.hook.check_rebase);
    assert!(config.hook.restage);
    assert_eq!(
        config.hook.formatters.keys().collect::<Vec<_>>(),
        ["black", "prettier", "sqlfluff"]
    );
    assert_eq!(config.glue.output_dir, PathBuf::from("outputs/table-schemas"));
    assert_eq!(config.generate.table_suffix, "_th");
}

#[test]
fn test_empty_string_yields_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.hook.base_branch, "main");
    assert_eq!(config.hook.formatters.len(), 3);
    assert_eq!(
        config.hook.formatters["prettier"],
        Config::default().hook.formatters["prettier"]
    );
}

#[test]
fn test_partial_formatter_table_merges_with_defaults() {
    let config = Config::parse(
        r#"
[hook.formatters.black]
args = ["--quiet"]

[hook.formatters.ruff]
program = "ruff"
args = ["check", "--fix"]
patterns = ["**/*.py"]
"#,
    )
    .unwrap();

    let black = &config.hook.formatters["black"];
    assert_eq!(black.program, "black");
    assert_eq!(black.args, ["--quiet"]);
    assert_eq!(black.patterns, ["**/*.py", "**/*.pyi"]);

    assert_eq!(
        config.hook.formatters["ruff"],
        FormatterConfig::new("ruff", &["check", "--fix"], &["**/*.py"])
    );
    assert_eq!(config.hook.formatters.len(), 4);
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "logs/lakeops.log"

[hook]
remote = "upstream"
base_branch = "develop"
check_base_fresh = false

[glue]
database = "raw_zone"
tables = ["eventos", "pozos"]
profile = "data"
region = "us-east-1"

[generate]
table_suffix = "_tb"

[generate.replacements]
eventos = "EVENTOS_POZO"

[generate.interfaces.EVENTOS_POZO]
lakehouse_name = "eventos_pozo"
aliases = ["id_evento", "fecha"]
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/lakeops.log")));
    assert_eq!(config.hook.remote_base(), "upstream/develop");
    assert!(!config.hook.check_base_fresh);
    assert!(config.hook.check_rebase);
    assert_eq!(config.glue.database, "raw_zone");
    assert_eq!(config.glue.tables, ["eventos", "pozos"]);
    assert_eq!(config.glue.profile.as_deref(), Some("data"));
    assert_eq!(config.generate.table_suffix, "_tb");
    assert_eq!(config.generate.populator_suffix, "_lh_sec");
    assert_eq!(config.generate.replacements.len(), 1);
    assert_eq!(config.generate.interfaces.len(), 1);
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = Config::parse("[hook]\nbase = \"main\"\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_glob_is_rejected() {
    let err = Config::parse(
        r#"
[hook.formatters.broken]
program = "x"
patterns = ["**/*.{sql"]
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("hook.formatters.broken"), "{err}");
}

#[test]
fn test_disabled_formatter_skips_validation() {
    let config = Config::parse(
        r#"
[hook.formatters.black]
enabled = false
program = ""
"#,
    )
    .unwrap();
    assert!(!config.hook.formatters["black"].enabled);
}

#[test]
fn test_empty_program_is_rejected() {
    let result = Config::parse("[hook.formatters.black]\nprogram = \" \"\n");
    assert!(result.is_err());
}

#[test]
fn test_overrides_win_over_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[hook]\nbase_branch = \"develop\"\n")
        .apply_overrides(&["hook.base_branch=release", "hook.restage = false"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.hook.base_branch, "release");
    assert!(!config.hook.restage);
}

#[test]
fn test_override_without_equals_is_rejected() {
    let result = ConfigLoader::new().apply_overrides(&["hook.base_branch"]);
    let err = result.err().expect("override should be rejected");
    assert_eq!(
        err.to_string(),
        "invalid override 'hook.base_branch', expected KEY=VALUE"
    );
}

#[test]
fn test_missing_required_file_is_error() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/lakeops.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_optional_file_is_not_listed_when_absent() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/lakeops.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file("/etc/lakeops.toml");
    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
        "2. [file] /etc/lakeops.toml",
    ]
    "#);
}

#[test]
fn test_format_options_aligned_and_sorted() {
    let options = Config::default().format_options();
    let keys: Vec<_> = options
        .iter()
        .map(|line| line.split(" = ").next().unwrap_or_default().trim_end())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);

    let eq_column = options[0].find(" = ").unwrap();
    assert!(options.iter().all(|line| line.find(" = ") == Some(eq_column)));
    assert!(options.contains(&format!(
        "{:<eq_column$} = npx prettier --write",
        "hook.formatters.prettier.command"
    )));
}
