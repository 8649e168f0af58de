//! Grid export pipeline.
//!
//! Every writer takes the grid plus an optional rectangular area; `None`
//! exports the whole grid. Header rendering follows the span contract:
//! one output cell per span origin, covered cells skipped.

pub mod csv;
pub mod html;
pub mod json;
pub(crate) mod package;
pub(crate) mod sheet_writer;

pub use csv::{write_csv, CsvOptions, Delimiter};
pub use html::{write_html, HtmlOptions};
pub use json::write_json;

use crate::error::Result;
use crate::grid::Grid;
use crate::header::SpanOptions;
use crate::rect::RectArea;

/// Options for XLSX output.
#[derive(Debug, Clone)]
pub struct XlsxOptions {
    pub sheet_name: String,
    /// Emit the header block above the data, with span origins turned
    /// into merged cell ranges. On by default.
    pub include_headers: bool,
    /// Header span construction settings.
    pub span: SpanOptions,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            include_headers: true,
            span: SpanOptions::default(),
        }
    }
}

/// Write `grid` (or a rectangular `area` of it) as a single-sheet XLSX
/// file, returned as bytes.
pub fn write_xlsx(grid: &Grid, area: Option<&RectArea>, options: &XlsxOptions) -> Result<Vec<u8>> {
    let sheet_xml = sheet_writer::write_sheet_xml(grid, area, options)?;
    package::build_package(&sheet_xml, &options.sheet_name)
}
