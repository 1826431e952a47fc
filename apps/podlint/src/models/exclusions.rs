//! Exclusion lists keyed by podspec basename without extension.

use std::collections::BTreeSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// `skip` removes a podspec from the run; `no_analyze` only drops `--analyze`.
///
/// Entries that match no discovered podspec are ignored.
pub struct ExclusionSet {
    pub skip: BTreeSet<String>,
    pub no_analyze: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<S, N>(skip: S, no_analyze: N) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        ExclusionSet {
            skip: skip.into_iter().map(Into::into).collect(),
            no_analyze: no_analyze.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_skipped(&self, stem: &str) -> bool {
        self.skip.contains(stem)
    }

    pub fn runs_analyzer(&self, stem: &str) -> bool {
        !self.no_analyze.contains(stem)
    }
}
