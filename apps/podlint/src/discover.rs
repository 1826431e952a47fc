//! Candidate discovery: every regular file under the packages directory.

use crate::error::PodlintError;
use crate::models::SpecFile;
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of candidate files for a run.
pub trait FileDiscovery {
    fn candidates(&self) -> Result<Vec<SpecFile>, PodlintError>;
}

#[derive(Debug, Clone)]
/// Every regular file under a packages directory.
pub struct PackagesTree {
    pub dir: PathBuf,
}

impl FileDiscovery for PackagesTree {
    fn candidates(&self) -> Result<Vec<SpecFile>, PodlintError> {
        candidate_files(&self.dir)
    }
}

/// List all files below `packages_dir`, in glob enumeration order.
pub fn candidate_files(packages_dir: &Path) -> Result<Vec<SpecFile>, PodlintError> {
    if !packages_dir.is_dir() {
        return Err(PodlintError::PackagesDirMissing(packages_dir.to_path_buf()));
    }
    // Candidates are handed to `pod`, which runs in another directory
    let abs_dir = std::path::absolute(packages_dir)
        .map_err(|_| PodlintError::PackagesDirMissing(packages_dir.to_path_buf()))?;
    let packages_dir = abs_dir.as_path();
    let base = glob::Pattern::escape(&packages_dir.to_string_lossy());
    let pattern = format!("{}/**/*", base.trim_end_matches('/'));
    let entries = glob(&pattern).map_err(|e| PodlintError::Config {
        path: packages_dir.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(p) if p.is_file() => files.push(SpecFile::new(p)),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "skipping unreadable path"),
        }
    }
    debug!(count = files.len(), dir = %packages_dir.display(), "discovered files");
    Ok(files)
}
