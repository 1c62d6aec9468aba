// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core infrastructure.
//!
//! ```text
//! hook / glue / generate
//!        |
//!        v
//!   exec (Invocation, CommandRunner)     progress (indicatif bars)
//!        |
//!        v
//!   process (ProcessBuilder, tokio::process)
//! ```

pub mod exec;
pub mod process;
pub mod progress;
