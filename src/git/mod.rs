// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        hook / cmd
//!        |        |
//!        v        v
//!   discovery    cmd.rs
//!   (gix, read)  (git CLI through CommandRunner)
//!   .discover    .is_ancestor  .fetch
//!   .hooks_dir   .rev_parse    .staged_files
//!                .current_branch  .add
//! ```
//!
//! **discovery**: pure Rust, no subprocess, read-only.
//! **cmd**: git CLI for everything that touches refs, the remote or the index.

pub mod cmd;
pub mod discovery;
