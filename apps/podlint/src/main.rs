//! Podlint CLI binary entry point.
//! Resolves configuration, wires the default collaborators and maps the run
//! status to a process exit code.

use clap::Parser;
use podlint::cli::Cli;
use podlint::config;
use podlint::discover::PackagesTree;
use podlint::error::{PodlintError, EXIT_LINT_FAILED};
use podlint::gate::HostPlatform;
use podlint::lint::{Collaborators, LintSettings, PodspecLinter};
use podlint::models::RunStatus;
use podlint::output::StdoutSink;
use podlint::process::SystemProcessRunner;
use podlint::utils;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("PODLINT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<RunStatus, PodlintError> {
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.packages_dir.as_deref(),
        cli.pod.as_deref(),
        &cli.skip,
        &cli.no_analyze,
        cli.shard_index,
        cli.shard_count,
    )?;
    match eff.config_path.as_ref() {
        Some(p) => debug!(config = %p.display(), "loaded config"),
        None => debug!("no podlint config found; using defaults"),
    }

    let runner = SystemProcessRunner;
    let platform = HostPlatform;
    let sink = StdoutSink;
    let linter = PodspecLinter::new(
        LintSettings {
            packages_dir: eff.packages_dir.clone(),
            display_root: eff.repo_root.clone(),
            pod: eff.pod,
            exclusions: eff.exclusions,
            color: utils::use_colors(),
        },
        Collaborators {
            runner: &runner,
            platform: &platform,
            shard: &eff.shard,
            sink: &sink,
        },
    )?;
    linter.run(&PackagesTree {
        dir: eff.packages_dir,
    })
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(RunStatus::Skipped) | Ok(RunStatus::Passed(_)) => {}
        Ok(RunStatus::Failed(_)) => std::process::exit(EXIT_LINT_FAILED),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(e.exit_code());
        }
    }
}
