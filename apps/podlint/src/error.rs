//! Fatal error conditions for a podlint run.
//!
//! Expected lint failures are never errors; they end up in the run report.
//! Everything here aborts the run and maps to a process exit code in `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when any podspec fails linting.
pub const EXIT_LINT_FAILED: i32 = 1;
/// Exit code used for configuration mistakes.
pub const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Error)]
pub enum PodlintError {
    /// The startup probe could not find or run the lint executable.
    #[error("unable to run '{command}' (exit code {code})")]
    CommandUnavailable { command: String, code: i32 },

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid shard settings: index {index} with count {count}")]
    InvalidShard { index: usize, count: usize },

    #[error("packages directory not found: {}", .0.display())]
    PackagesDirMissing(PathBuf),

    #[error("failed to start lint workers: {0}")]
    Workers(#[from] rayon::ThreadPoolBuildError),
}

impl PodlintError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PodlintError::CommandUnavailable { code, .. } if *code > 0 => *code,
            PodlintError::CommandUnavailable { .. }
            | PodlintError::Spawn { .. }
            | PodlintError::Workers(_) => 1,
            PodlintError::Config { .. }
            | PodlintError::InvalidShard { .. }
            | PodlintError::PackagesDirMissing(_) => EXIT_CONFIG,
        }
    }
}
