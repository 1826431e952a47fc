//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "podlint",
    version,
    about = "Run `pod lib lint` over every plugin podspec",
    long_about = "Lint each podspec under the packages directory with `pod lib lint`, once as a framework and once with --use-libraries, and report the plugins that fail.\n\nOnly runs on macOS; elsewhere it exits successfully without doing anything.\n\nConfiguration precedence: CLI > podlint.toml > defaults.",
    after_help = "Examples:\n  podlint\n  podlint --skip camera --skip webview_flutter\n  podlint --no-analyze in_app_purchase --packages-dir plugins\n  podlint --shard-index 0 --shard-count 4"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Repository root (default: detected from current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Packages directory relative to the repo root (default: packages)")]
    pub packages_dir: Option<String>,
    #[arg(long, help = "Lint executable (default: pod)")]
    pub pod: Option<String>,
    #[arg(
        long,
        value_name = "PLUGIN",
        help = "Podspec name (without extension) to skip entirely; repeatable"
    )]
    pub skip: Vec<String>,
    #[arg(
        long = "no-analyze",
        value_name = "PLUGIN",
        help = "Podspec name (without extension) to lint without --analyze; repeatable"
    )]
    pub no_analyze: Vec<String>,
    #[arg(long, help = "Index of this CI shard (default: 0)")]
    pub shard_index: Option<usize>,
    #[arg(long, help = "Total number of CI shards (default: 1)")]
    pub shard_count: Option<usize>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Log each process invocation to stderr")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeatable_lists() {
        let cli = Cli::parse_from([
            "podlint",
            "--skip",
            "a",
            "--skip",
            "b",
            "--no-analyze",
            "c",
        ]);
        assert_eq!(cli.skip, vec!["a", "b"]);
        assert_eq!(cli.no_analyze, vec!["c"]);
        assert!(cli.shard_index.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_shard_flags() {
        let cli = Cli::parse_from(["podlint", "--shard-index", "1", "--shard-count", "3"]);
        assert_eq!(cli.shard_index, Some(1));
        assert_eq!(cli.shard_count, Some(3));
    }
}
