//! Human-readable run output.
//!
//! All report text flows through an `OutputSink` so tests can capture it.
//! Diagnostics go through `tracing` instead and never reach the sink.

use crate::models::RunReport;
use crate::utils;
use std::cell::RefCell;

/// Header printed above the list of failing podspecs.
pub const FAILURE_HEADER: &str = "The following plugins have podspec errors (see above):";

/// Line-oriented destination for report text.
pub trait OutputSink {
    fn line(&self, text: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

#[derive(Debug, Default)]
/// Collects lines in memory.
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl OutputSink for MemorySink {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Compose the closing summary lines (pure) for a finished run.
///
/// Always starts with a blank separator; the failure roster follows only
/// when something failed.
pub fn compose_summary(report: &RunReport, color: bool) -> Vec<String> {
    let mut out = vec![String::new()];
    if report.has_failures() {
        out.push(utils::failure(FAILURE_HEADER, color));
        for stem in &report.failures {
            out.push(format!(" * {}", stem));
        }
    }
    out
}

/// Print the closing summary to `sink`.
pub fn print_summary(sink: &dyn OutputSink, report: &RunReport, color: bool) {
    for line in compose_summary(report, color) {
        sink.line(&line);
    }
}
