//! gridhead - spanned table headers and grid export
//!
//! Builds multi-row, multi-column table headers from per-column label
//! paths and exports tabular data with them:
//! - Vertical spanning (short label paths stretch, absent depths fold upward)
//! - Horizontal merging of equal adjacent headers, with staircase suppression
//! - HTML, CSV/TSV, XLSX (merged cells), and JSON writers
//! - Rectangular sub-area export
//!
//! # Usage
//!
//! ```rust
//! use gridhead::{Column, Grid, HtmlOptions, SpanOptions};
//!
//! let mut grid = Grid::new(vec![
//!     Column::labeled(["Name"]),
//!     Column::labeled(["2026", "Q1"]),
//!     Column::labeled(["2026", "Q2"]),
//! ]);
//! grid.push_row(vec!["Widgets".into(), 120.into(), 95.into()]);
//!
//! let spans = grid.header_spans(SpanOptions::default());
//! assert_eq!(spans.col_span(0, 1), 2); // "2026" covers both quarters
//!
//! let html = gridhead::write_html(&grid, None, &HtmlOptions::default()).unwrap();
//! assert!(html.contains("colspan=\"2\""));
//! ```

pub mod error;
pub mod export;
pub mod grid;
pub mod header;
pub mod rect;

pub use error::{GridheadError, Result};
pub use export::{
    write_csv, write_html, write_json, write_xlsx, CsvOptions, Delimiter, HtmlOptions, XlsxOptions,
};
pub use grid::{CellValue, Column, Grid};
pub use header::{HeaderCell, HeaderSpans, SpanOptions};
pub use rect::RectArea;
