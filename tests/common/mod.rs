//! Shared helpers for gridhead integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridhead::{CellValue, Column, Grid, HeaderSpans};

/// Builder for test grids.
#[derive(Default)]
pub struct GridBuilder {
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column with the given header label path.
    pub fn column(mut self, labels: &[&str]) -> Self {
        self.columns.push(Column::labeled(labels.iter().copied()));
        self
    }

    /// Add a column with no header label at any depth.
    pub fn blank_column(mut self) -> Self {
        self.columns.push(Column::blank());
        self
    }

    /// Add a column with an explicit label path, `None` entries included.
    pub fn column_opt(mut self, labels: &[Option<&str>]) -> Self {
        self.columns.push(Column {
            header: labels.iter().map(|l| l.map(str::to_string)).collect(),
        });
        self
    }

    /// Add a data row.
    pub fn row(mut self, values: Vec<CellValue>) -> Self {
        self.rows.push(values);
        self
    }

    pub fn build(self) -> Grid {
        let mut grid = Grid::new(self.columns);
        for row in self.rows {
            grid.push_row(row);
        }
        grid
    }
}

/// A small sales report with a two-level header:
///
/// ```text
/// +---------+-----------+-----------+
/// | Product |   2025    |   2026    |
/// |         +-----+-----+-----+-----+
/// |         | Q3  | Q4  | Q1  | Q2  |
/// +---------+-----+-----+-----+-----+
/// ```
pub fn quarterly_report() -> Grid {
    GridBuilder::new()
        .column(&["Product"])
        .column(&["2025", "Q3"])
        .column(&["2025", "Q4"])
        .column(&["2026", "Q1"])
        .column(&["2026", "Q2"])
        .row(vec!["Widgets".into(), 120.into(), 135.into(), 110.into(), 95.into()])
        .row(vec!["Gadgets".into(), 80.into(), 88.into(), 97.into(), 102.into()])
        .build()
}

/// Assert that `(row, col)` is a span origin with the given label and spans.
pub fn assert_origin(
    spans: &HeaderSpans,
    row: usize,
    col: usize,
    text: Option<&str>,
    row_span: usize,
    col_span: usize,
) {
    let cell = spans
        .cell(row, col)
        .unwrap_or_else(|| panic!("({row},{col}) out of range"));
    assert!(cell.is_origin(), "({row},{col}) is covered, expected origin");
    assert_eq!(cell.text.as_deref(), text, "text at ({row},{col})");
    assert_eq!(cell.row_span, row_span, "row_span at ({row},{col})");
    assert_eq!(cell.col_span, col_span, "col_span at ({row},{col})");
}

/// Assert that `(row, col)` is covered by another cell's span.
pub fn assert_covered(spans: &HeaderSpans, row: usize, col: usize) {
    let cell = spans
        .cell(row, col)
        .unwrap_or_else(|| panic!("({row},{col}) out of range"));
    assert!(cell.is_covered(), "({row},{col}) is an origin, expected covered");
    assert_eq!(cell.text, None, "covered cell at ({row},{col}) carries text");
    assert_eq!(cell.col_span, 0, "covered cell at ({row},{col}) has col_span");
}

/// Check the tiling invariant: origin rectangles cover the grid exactly
/// once, with no gaps and no overlaps.
pub fn assert_tiles(spans: &HeaderSpans) {
    let mut covered = vec![false; spans.row_count() * spans.col_count()];
    for (row, col, cell) in spans.origins() {
        for r in row..row + cell.row_span {
            for c in col..col + cell.col_span {
                assert!(r < spans.row_count() && c < spans.col_count(), "span out of range");
                let idx = r * spans.col_count() + c;
                assert!(!covered[idx], "overlapping spans at ({r},{c})");
                covered[idx] = true;
            }
        }
    }
    assert!(covered.iter().all(|&x| x), "gap in header tiling");
}
