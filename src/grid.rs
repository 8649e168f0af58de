//! In-memory tabular grid consumed by the exporters.
//!
//! Deliberately small: typed cell values, columns carrying their header
//! label paths, and rows kept rectangular on insertion. Everything the
//! exporters need, nothing the excluded data layer owns.

use serde::Serialize;

use crate::header::{HeaderSpans, SpanOptions};

/// A typed cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value. Serializes as JSON `null`.
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Display string for text-oriented outputs (HTML, CSV).
    ///
    /// Numbers print in shortest form (`42`, not `42.0`); booleans as
    /// `TRUE`/`FALSE` the way spreadsheets render them.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One grid column: its header label path, top to bottom.
///
/// A `None` entry means "no label at this depth" and folds into the
/// label above when spans are computed; a short path stretches its last
/// label to the full header depth.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Column {
    pub header: Vec<Option<String>>,
}

impl Column {
    /// Column with the given label path, all labels present.
    pub fn labeled<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: labels.into_iter().map(|s| Some(s.into())).collect(),
        }
    }

    /// Column with no label at any depth (renders as one blank cell).
    pub fn blank() -> Self {
        Self { header: Vec::new() }
    }
}

/// A rectangular grid of typed values with spanned column headers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Grid {
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Append a data row, padding with empty cells or truncating so the
    /// grid stays rectangular.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// The value at `(row, col)`, or `None` out of range.
    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Compute the spanned header grid for this grid's columns.
    pub fn header_spans(&self, options: SpanOptions) -> HeaderSpans {
        self.header_spans_for(0..self.columns.len(), options)
    }

    /// Spanned headers for a contiguous column range (used when
    /// exporting a rectangular area rather than the whole grid).
    pub fn header_spans_for(
        &self,
        cols: std::ops::Range<usize>,
        options: SpanOptions,
    ) -> HeaderSpans {
        let columns: Vec<Vec<Option<String>>> = self
            .columns
            .get(cols)
            .unwrap_or_default()
            .iter()
            .map(|c| c.header.clone())
            .collect();
        HeaderSpans::new(&columns, options)
    }
}
