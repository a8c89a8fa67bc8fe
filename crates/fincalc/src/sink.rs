//! Terminal rendering for calculation reports

use colored::Colorize;
use fincalc_core::{Report, ResultSink};

/// Prints reports to stdout as aligned label/value rows.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the styled output lines for a report.
    ///
    /// Labels are padded to a shared width before styling; ANSI escapes
    /// would otherwise count toward the pad width and break the columns.
    fn render(report: &Report) -> Vec<String> {
        let width = report.label_width();
        let mut lines = Vec::with_capacity(report.rows.len() + 1);
        lines.push(format!("{}", report.title.bold().cyan()));
        for row in &report.rows {
            let label = format!("{:<width$}", row.label);
            lines.push(format!("  {}  {}", label.bright_black(), row.value.bold()));
        }
        lines
    }
}

impl ResultSink for TerminalSink {
    fn present(&mut self, report: &Report) {
        println!();
        for line in Self::render(report) {
            println!("{line}");
        }
    }
}
