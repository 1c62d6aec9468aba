// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         hook / schemas / generate
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               hook        glue    generate
//!            pre-commit   aws glue   SQL from
//!            formatters   get-table  schema files
//!                 |           |
//!                 v           |
//!                git          |
//!            gix / CLI        |
//!                 |           |
//!   +-------------+-----------+---------------+
//!   |  core   exec (CommandRunner), process   |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod generate;
pub mod git;
pub mod glue;
pub mod hook;
pub mod logging;
