//! Podspec lint orchestration.
//!
//! Each eligible podspec is linted twice, once per `LintMode`, with both
//! `pod lib lint` invocations running concurrently. Podspecs themselves are
//! processed one at a time so their output never interleaves.

use crate::discover::FileDiscovery;
use crate::error::PodlintError;
use crate::filter::podspecs_to_lint;
use crate::gate::{Platform, ShardGate};
use crate::models::{ExclusionSet, LintMode, LintOutcome, RunReport, RunStatus, SpecFile};
use crate::output::{print_summary, OutputSink};
use crate::process::{ProcessOutput, ProcessRunner};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// External collaborators a run depends on.
pub struct Collaborators<'a> {
    pub runner: &'a dyn ProcessRunner,
    pub platform: &'a dyn Platform,
    pub shard: &'a dyn ShardGate,
    pub sink: &'a dyn OutputSink,
}

/// Settings for one lint run.
pub struct LintSettings {
    /// Working directory for every `pod` invocation.
    pub packages_dir: PathBuf,
    /// Base for paths shown in progress lines.
    pub display_root: PathBuf,
    pub pod: String,
    pub exclusions: ExclusionSet,
    pub color: bool,
}

pub struct PodspecLinter<'a> {
    settings: LintSettings,
    deps: Collaborators<'a>,
    /// One thread per lint mode; `pod` invocations block, so they must not
    /// share a worker.
    pool: rayon::ThreadPool,
}

impl<'a> PodspecLinter<'a> {
    pub fn new(settings: LintSettings, deps: Collaborators<'a>) -> Result<Self, PodlintError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(LintMode::ALL.len())
            .thread_name(|i| format!("podlint-mode-{i}"))
            .build()?;
        Ok(PodspecLinter {
            settings,
            deps,
            pool,
        })
    }

    /// Discover podspecs and lint every eligible one.
    ///
    /// Returns `Skipped` without touching the sink when the platform or the
    /// shard gate declines. Fails fast if the packages directory is missing
    /// or `pod` is not on the PATH.
    pub fn run(&self, discovery: &dyn FileDiscovery) -> Result<RunStatus, PodlintError> {
        if !self.deps.platform.is_macos() {
            info!("detected platform is not macOS, skipping podspec lint");
            return Ok(RunStatus::Skipped);
        }
        if !self.deps.shard.should_run() {
            info!("podspec lint runs on the first shard only, skipping");
            return Ok(RunStatus::Skipped);
        }
        if !self.settings.packages_dir.is_dir() {
            return Err(PodlintError::PackagesDirMissing(
                self.settings.packages_dir.clone(),
            ));
        }
        self.deps.runner.run_or_fail(
            "which",
            &[self.settings.pod.clone()],
            &self.settings.packages_dir,
        )?;

        let candidates = discovery.candidates()?;
        let report = self.lint_all(&candidates);
        if report.has_failures() {
            Ok(RunStatus::Failed(report))
        } else {
            Ok(RunStatus::Passed(report))
        }
    }

    /// Lint eligible podspecs among `candidates` one after another, then
    /// print the summary.
    pub fn lint_all(&self, candidates: &[SpecFile]) -> RunReport {
        let sink = self.deps.sink;
        sink.line("Starting podspec lint test");
        let mut report = RunReport::default();
        for podspec in podspecs_to_lint(candidates, &self.settings.exclusions) {
            report.record(self.lint_one(&podspec));
        }
        print_summary(sink, &report, self.settings.color);
        report
    }

    /// Lint one podspec in both modes and print everything they produced.
    pub fn lint_one(&self, podspec: &SpecFile) -> LintOutcome {
        let run_analyzer = self.settings.exclusions.runs_analyzer(&podspec.stem);
        let shown = self.display_path(&podspec.path);
        let sink = self.deps.sink;
        if run_analyzer {
            sink.line(&format!("Linting and analyzing {}", shown));
        } else {
            sink.line(&format!("Linting {}", shown));
        }

        let runner = self.deps.runner;
        let pod = self.settings.pod.as_str();
        let dir = self.settings.packages_dir.as_path();
        let framework_args = lint_args(&podspec.path, run_analyzer, LintMode::Framework);
        let library_args = lint_args(&podspec.path, run_analyzer, LintMode::Library);
        let (framework, library) = self.pool.install(|| {
            rayon::join(
                || runner.run(pod, &framework_args, dir),
                || runner.run(pod, &library_args, dir),
            )
        });

        let mut passed = true;
        for (mode, result) in LintMode::ALL.into_iter().zip([framework, library]) {
            let out = match result {
                Ok(out) => out,
                Err(e) => {
                    warn!(podspec = %podspec.stem, mode = mode.label(), error = %e, "lint invocation failed to start");
                    spawn_failure(&e)
                }
            };
            sink.line(&out.stdout);
            sink.line(&out.stderr);
            passed &= out.success();
        }
        LintOutcome {
            stem: podspec.stem.clone(),
            passed,
        }
    }

    fn display_path(&self, path: &Path) -> String {
        pathdiff::diff_paths(path, &self.settings.display_root)
            .filter(|p| !p.starts_with(".."))
            .unwrap_or_else(|| path.to_path_buf())
            .to_string_lossy()
            .into_owned()
    }
}

/// Arguments for `pod` linting `podspec` in `mode`.
pub fn lint_args(podspec: &Path, run_analyzer: bool, mode: LintMode) -> Vec<String> {
    let mut args = vec![
        "lib".to_string(),
        "lint".to_string(),
        podspec.to_string_lossy().into_owned(),
        "--allow-warnings".to_string(),
    ];
    if run_analyzer {
        args.push("--analyze".to_string());
    }
    if mode == LintMode::Library {
        args.push("--use-libraries".to_string());
    }
    args
}

fn spawn_failure(err: &PodlintError) -> ProcessOutput {
    ProcessOutput {
        exit_code: -1,
        stdout: String::new(),
        stderr: err.to_string(),
    }
}
