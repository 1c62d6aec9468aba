// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `pre-commit` shim installation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FsError, OpsError, OpsResult};
use crate::git::discovery::discover;

/// Marker line identifying a shim written by this tool.
const SHIM_MARKER: &str = "# installed by lakeops";

/// Script git runs before every commit.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\n# installed by lakeops\nexec lakeops hook run\n";

/// Write the `pre-commit` shim into the hooks directory of the repository
/// containing `start`. Returns the path of the written hook.
///
/// An existing shim is rewritten; any other hook is kept unless `force`.
///
/// # Errors
///
/// Returns an error if no repository is found, a foreign hook exists and
/// `force` is false, or the file cannot be written.
pub fn install_hook(start: &Path, force: bool) -> OpsResult<PathBuf> {
    let layout = discover(start)?;
    let hooks_dir = layout.hooks_dir();
    let hook_path = hooks_dir.join("pre-commit");

    if hook_path.exists() && !force {
        let existing =
            std::fs::read_to_string(&hook_path).map_err(|e| FsError::io(&hook_path, e))?;
        if !existing.contains(SHIM_MARKER) {
            return Err(OpsError::Other(
                format!(
                    "{} already exists; re-run with --force to replace it",
                    hook_path.display()
                )
                .into_boxed_str(),
            ));
        }
        debug!(path = %hook_path.display(), "replacing existing shim");
    }

    std::fs::create_dir_all(&hooks_dir).map_err(|e| FsError::io(&hooks_dir, e))?;
    std::fs::write(&hook_path, HOOK_SCRIPT).map_err(|e| FsError::io(&hook_path, e))?;
    make_executable(&hook_path)?;

    info!("Installed pre-commit hook at {}", hook_path.display());
    Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> OpsResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| FsError::io(path, e))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> OpsResult<()> {
    Ok(())
}
