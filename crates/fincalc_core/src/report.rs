//! Labeled report rows and the rendering contract
//!
//! Every calculator result can describe itself as an ordered list of
//! `(label, formatted value)` rows. How a report is shown is entirely the
//! sink's concern; the library never writes to a terminal itself.

/// One labeled, formatted output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

/// An ordered set of rows under a calculator title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: &'static str,
    pub rows: Vec<ResultRow>,
}

impl Report {
    #[must_use]
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    /// Append a row. Rows render in insertion order.
    pub fn push(&mut self, label: &'static str, value: String) {
        self.rows.push(ResultRow { label, value });
    }

    /// Width of the longest label, for column alignment.
    #[must_use]
    pub fn label_width(&self) -> usize {
        self.rows.iter().map(|row| row.label.len()).max().unwrap_or(0)
    }
}

/// Rendering target for finished reports.
pub trait ResultSink {
    fn present(&mut self, report: &Report);
}
