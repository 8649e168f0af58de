//! Rectangular sub-areas of a grid.
//!
//! Exporters take an optional [`RectArea`] to restrict output to a
//! selection; corners may arrive in either order and are normalized.

use serde::Serialize;

use crate::error::{GridheadError, Result};
use crate::grid::Grid;

/// A normalized, inclusive rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RectArea {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
}

impl RectArea {
    /// Area between two corners of `grid`, in either order.
    ///
    /// The anchor must lie inside the grid; the far corner is clamped to
    /// the grid bounds.
    pub fn new(grid: &Grid, anchor: (usize, usize), corner: (usize, usize)) -> Result<Self> {
        let (anchor_row, anchor_col) = anchor;
        if anchor_row >= grid.row_count() || anchor_col >= grid.col_count() {
            return Err(GridheadError::Range(format!(
                "anchor ({anchor_row},{anchor_col}) outside {}x{} grid",
                grid.row_count(),
                grid.col_count()
            )));
        }
        let corner_row = corner.0.min(grid.row_count().saturating_sub(1));
        let corner_col = corner.1.min(grid.col_count().saturating_sub(1));
        Ok(Self {
            start_row: anchor_row.min(corner_row),
            start_col: anchor_col.min(corner_col),
            end_row: anchor_row.max(corner_row),
            end_col: anchor_col.max(corner_col),
        })
    }

    /// Area covering every cell of `grid`. Errors on a grid with no
    /// rows or no columns.
    pub fn full(grid: &Grid) -> Result<Self> {
        if grid.row_count() == 0 || grid.col_count() == 0 {
            return Err(GridheadError::Range("grid has no cells".to_string()));
        }
        Ok(Self {
            start_row: 0,
            start_col: 0,
            end_row: grid.row_count() - 1,
            end_col: grid.col_count() - 1,
        })
    }

    /// Half-open row range covered by this area.
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.start_row..self.end_row + 1
    }

    /// Half-open column range covered by this area.
    pub fn cols(&self) -> std::ops::Range<usize> {
        self.start_col..self.end_col + 1
    }

    pub fn row_count(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn col_count(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }

    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }
}
