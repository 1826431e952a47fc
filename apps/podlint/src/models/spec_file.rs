//! A podspec discovered in the packages tree.

use std::path::{Path, PathBuf};

/// File extension identifying a podspec, without the leading dot.
pub const PODSPEC_EXTENSION: &str = "podspec";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One specification file, keyed by its basename without extension.
pub struct SpecFile {
    pub path: PathBuf,
    pub basename: String,
    pub stem: String,
}

impl SpecFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let basename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        SpecFile {
            path,
            basename,
            stem,
        }
    }

    /// True when the file extension is exactly `podspec`.
    pub fn is_podspec(&self) -> bool {
        has_podspec_extension(&self.path)
    }
}

fn has_podspec_extension(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == PODSPEC_EXTENSION)
}
