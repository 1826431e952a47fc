//! Small presentation helpers shared by `main` and the output sink.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Colors are used on a terminal unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Paint `text` red and bold when `color` is set.
pub fn failure(text: &str, color: bool) -> String {
    if color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}
