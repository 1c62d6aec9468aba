// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command implementation for lakeops.

use crate::cli::generate::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generate::run_generate;

/// Main handler for generate command.
///
/// # Errors
///
/// Returns an error if generation aborts.
pub fn run_generate_command(args: &GenerateArgs, config: &Config) -> Result<()> {
    let mut generate = config.generate.clone();
    if let Some(path) = &args.schemas_path {
        generate.schemas_path.clone_from(path);
    }
    if let Some(path) = &args.catalog_output {
        generate.catalog_output.clone_from(path);
    }
    if let Some(path) = &args.s3_output {
        generate.s3_output.clone_from(path);
    }

    let report = run_generate(&generate)?;
    println!(
        "Generated {} table(s) into {} and {}",
        report.generated.len(),
        generate.catalog_output.display(),
        generate.s3_output.display()
    );
    Ok(())
}
