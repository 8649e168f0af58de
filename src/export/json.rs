//! JSON export surface.
//!
//! Serializes a grid (or a rectangular area of it) together with its
//! computed header spans, for consumers that render tables themselves.

use serde::Serialize;

use crate::error::Result;
use crate::grid::{CellValue, Grid};
use crate::header::{HeaderSpans, SpanOptions};
use crate::rect::RectArea;

#[derive(Serialize)]
struct GridDocument<'a> {
    row_count: usize,
    col_count: usize,
    headers: HeaderSpans,
    rows: Vec<Vec<&'a CellValue>>,
}

/// Serialize `grid` (or an `area` of it) to a JSON string.
pub fn write_json(grid: &Grid, area: Option<&RectArea>, span: SpanOptions) -> Result<String> {
    let row_range = area.map_or(0..grid.row_count(), |a| a.rows());
    let col_range = area.map_or(0..grid.col_count(), |a| a.cols());

    const EMPTY: &CellValue = &CellValue::Empty;
    let rows: Vec<Vec<&CellValue>> = row_range
        .clone()
        .map(|row| {
            col_range
                .clone()
                .map(|col| grid.value(row, col).unwrap_or(EMPTY))
                .collect()
        })
        .collect();

    let document = GridDocument {
        row_count: row_range.len(),
        col_count: col_range.len(),
        headers: grid.header_spans_for(col_range, span),
        rows,
    };
    Ok(serde_json::to_string(&document)?)
}
