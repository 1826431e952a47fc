//! Podlint core library.
//!
//! Runs CocoaPods' `pod lib lint` over every plugin podspec in a monorepo,
//! in both framework and static-library mode, and reports the plugins that
//! fail.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discover`: Candidate file discovery under the packages directory.
//! - `filter`: Podspec selection, exclusion and ordering.
//! - `gate`: Platform and CI shard preconditions.
//! - `lint`: Orchestration of the per-podspec lint and the whole run.
//! - `models`: Data models shared across the run.
//! - `output`: Output sink and summary printing.
//! - `process`: External process invocation.
//! - `error`: Fatal error conditions and their exit codes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod filter;
pub mod gate;
pub mod lint;
pub mod models;
pub mod output;
pub mod process;
pub mod utils;
