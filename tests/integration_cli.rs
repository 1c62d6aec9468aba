// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use lakeops::cli::generate::GenerateArgs;
use lakeops::cli::hook::HookSubcommand;
use lakeops::cli::schemas::SchemasSubcommand;
use lakeops::cli::{Cli, Command};

// =============================================================================
// Hook Command
// =============================================================================

#[test]
fn cli_hook_run_as_git_calls_it() {
    let cli = Cli::try_parse_from(["lakeops", "hook", "run"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Command::Hook(ref args)) if matches!(args.subcommand, HookSubcommand::Run(_))
    ));
}

#[test]
fn cli_hook_install_defaults() {
    let cli = Cli::try_parse_from(["lakeops", "hook", "install"]).unwrap();
    let Some(Command::Hook(args)) = cli.command else {
        panic!("expected hook command");
    };
    let HookSubcommand::Install(install) = args.subcommand else {
        panic!("expected install subcommand");
    };
    assert!(!install.force);
    assert!(install.repo.is_none());
}

#[test]
fn cli_hook_requires_subcommand() {
    assert!(Cli::try_parse_from(["lakeops", "hook"]).is_err());
}

// =============================================================================
// Schemas Command
// =============================================================================

#[test]
fn cli_schemas_dump_uses_config_tables_when_none_given() {
    let cli = Cli::try_parse_from(["lakeops", "schemas", "dump"]).unwrap();
    let Some(Command::Schemas(args)) = cli.command else {
        panic!("expected schemas command");
    };
    let SchemasSubcommand::Dump(dump) = args.subcommand;
    assert!(dump.tables.is_empty());
    assert!(dump.database.is_none());
    assert!(dump.output_dir.is_none());
}

// =============================================================================
// Generate Command
// =============================================================================

#[test]
fn cli_generate_no_args() {
    let cli = Cli::try_parse_from(["lakeops", "generate"]).unwrap();
    let Some(Command::Generate(args)) = cli.command else {
        panic!("expected generate command");
    };
    assert!(args.schemas_path.is_none());
    assert!(args.catalog_output.is_none());
    assert!(args.s3_output.is_none());
    let _: GenerateArgs = args;
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "lakeops",
        "--log-level",
        "0",
        "--file-log-level",
        "5",
        "--log-file",
        "logs/run.log",
        "--set",
        "hook.restage=false",
        "--set",
        "hook.remote=upstream",
        "inis",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(0));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "hook.restage=false",
            "hook.remote=upstream",
            "global.output_log_level=0",
            "global.file_log_level=5",
            "global.log_file=logs/run.log",
        ]
    );
    assert!(matches!(cli.command, Some(Command::Inis)));
}

#[test]
fn cli_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["lakeops", "build"]).is_err());
}
