//! Shared data models for a lint run.

pub mod exclusions;
pub mod spec_file;

pub use exclusions::ExclusionSet;
pub use spec_file::SpecFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a consuming app would link the plugin; each mode is linted separately.
pub enum LintMode {
    Framework,
    Library,
}

impl LintMode {
    /// Both modes in the order their output is printed.
    pub const ALL: [LintMode; 2] = [LintMode::Framework, LintMode::Library];

    pub fn label(self) -> &'static str {
        match self {
            LintMode::Framework => "framework",
            LintMode::Library => "library",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verdict for one podspec.
pub struct LintOutcome {
    pub stem: String,
    pub passed: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Failing podspec stems in the order they were linted.
pub struct RunReport {
    pub failures: Vec<String>,
    pub linted: usize,
}

impl RunReport {
    pub fn record(&mut self, outcome: LintOutcome) {
        self.linted += 1;
        if !outcome.passed {
            self.failures.push(outcome.stem);
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Final state of a run.
pub enum RunStatus {
    /// A gate declined the run; nothing was linted.
    Skipped,
    Passed(RunReport),
    Failed(RunReport),
}
