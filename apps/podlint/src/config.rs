//! Configuration discovery and effective settings resolution.
//!
//! Podlint reads `podlint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `packages_dir`: `packages`
//! - `pod`: `pod`
//! - `skip`, `no_analyze`: empty
//! - `shard_index` / `shard_count`: 0 / 1
//!
//! Overrides precedence: CLI > config file > defaults. A non-empty CLI list
//! replaces the corresponding config list.

use crate::error::PodlintError;
use crate::gate::ShardConfig;
use crate::models::ExclusionSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["podlint.toml", "podlint.yaml", "podlint.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `podlint.toml|yaml`.
pub struct PodlintConfig {
    pub packages_dir: Option<String>,
    pub pod: Option<String>,
    #[serde(default)]
    pub skip: Vec<String>,
    #[serde(default, alias = "no-analyze")]
    pub no_analyze: Vec<String>,
    pub shard_index: Option<usize>,
    pub shard_count: Option<usize>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub packages_dir: PathBuf,
    pub pod: String,
    pub exclusions: ExclusionSet,
    pub shard: ShardConfig,
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `podlint.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Absolute form of `path` against the current directory.
fn absolute(path: &Path) -> Result<PathBuf, PodlintError> {
    std::path::absolute(path).map_err(|e| PodlintError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// A relative path with a directory part; bare names are left to PATH lookup.
fn is_relative_path(cmd: &str) -> bool {
    let p = Path::new(cmd);
    p.is_relative() && p.components().count() > 1
}

/// Locate the config file in `root`, preferring TOML over YAML.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load `PodlintConfig` from `path`, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<PodlintConfig, PodlintError> {
    let config_err = |message: String| PodlintError::Config {
        path: path.to_path_buf(),
        message,
    };
    let s = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    if is_toml {
        toml::from_str(&s).map_err(|e| config_err(e.to_string()))
    } else {
        serde_yaml::from_str(&s).map_err(|e| config_err(e.to_string()))
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_packages_dir: Option<&str>,
    cli_pod: Option<&str>,
    cli_skip: &[String],
    cli_no_analyze: &[String],
    cli_shard_index: Option<usize>,
    cli_shard_count: Option<usize>,
) -> Result<Effective, PodlintError> {
    let start = absolute(Path::new(cli_repo_root.unwrap_or(".")))?;
    let repo_root = detect_repo_root(&start);
    let config_path = find_config(&repo_root);
    let cfg = match config_path.as_deref() {
        Some(p) => load_config(p)?,
        None => PodlintConfig::default(),
    };

    let packages_dir = cli_packages_dir
        .map(|s| s.to_string())
        .or(cfg.packages_dir)
        .unwrap_or_else(|| "packages".to_string());
    // `pod` runs inside the packages dir, so a relative path must be pinned
    // now: CLI paths against the current dir, config paths against the root
    let pod = match (cli_pod, cfg.pod) {
        (Some(p), _) if is_relative_path(p) => absolute(Path::new(p))?
            .to_string_lossy()
            .into_owned(),
        (Some(p), _) => p.to_string(),
        (None, Some(p)) if is_relative_path(&p) => repo_root.join(p).to_string_lossy().into_owned(),
        (None, Some(p)) => p,
        (None, None) => "pod".to_string(),
    };

    let skip = if cli_skip.is_empty() {
        cfg.skip
    } else {
        cli_skip.to_vec()
    };
    let no_analyze = if cli_no_analyze.is_empty() {
        cfg.no_analyze
    } else {
        cli_no_analyze.to_vec()
    };

    let shard = ShardConfig::new(
        cli_shard_index.or(cfg.shard_index).unwrap_or(0),
        cli_shard_count.or(cfg.shard_count).unwrap_or(1),
    )?;

    Ok(Effective {
        packages_dir: repo_root.join(packages_dir),
        repo_root,
        pod,
        exclusions: ExclusionSet::new(skip, no_analyze),
        shard,
        config_path,
    })
}
