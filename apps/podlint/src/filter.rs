//! Selection of the podspecs a run should lint.

use crate::models::{ExclusionSet, SpecFile};

/// Keep podspecs not listed in `skip`, sorted by basename.
///
/// Sorting makes run output stable across CI runs regardless of the order
/// the filesystem enumerated the candidates in.
pub fn podspecs_to_lint(candidates: &[SpecFile], exclusions: &ExclusionSet) -> Vec<SpecFile> {
    let mut podspecs: Vec<SpecFile> = candidates
        .iter()
        .filter(|f| f.is_podspec() && !exclusions.is_skipped(&f.stem))
        .cloned()
        .collect();
    podspecs.sort_by(|a, b| a.basename.cmp(&b.basename));
    podspecs
}
