//! Multi-row header spanning.
//!
//! Turns per-column label sequences into a rectangular grid of header
//! cells with row/column spans, suitable for rendering as a multi-row
//! table header (HTML `thead`, XLSX merged cells).
//!
//! Each column contributes its labels top to bottom. Columns shorter
//! than the deepest one stretch their last label downward; an explicit
//! `None` entry means "no label at this depth" and folds upward into
//! the nearest label above it. An optional horizontal pass merges
//! adjacent cells with identical text and identical vertical extent.

use serde::Serialize;

/// Options controlling header span construction.
#[derive(Debug, Clone, Copy)]
pub struct SpanOptions {
    /// Run the horizontal merge pass (adjacent equal-text cells become
    /// one wider cell). Disable to keep every column's header separate.
    pub merge_headers: bool,
    /// Allow a horizontal merge even when the cell directly above the
    /// absorbed cell is itself a span origin. Off by default: such
    /// merges produce "staircase" headers that render ambiguously.
    pub mixed_span_allowed: bool,
}

impl Default for SpanOptions {
    fn default() -> Self {
        Self {
            merge_headers: true,
            mixed_span_allowed: false,
        }
    }
}

/// One cell of the computed header grid.
///
/// Exactly one of two states holds after construction:
/// - span origin: `row_span > 0` and `col_span > 0`, owns a label;
/// - covered: both spans are 0, the cell lies inside another origin's
///   rectangle and must not be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Label text. `None` on covered cells, and on span origins whose
    /// input entry was absent (distinct from an empty-string label).
    pub text: Option<String>,
    /// Rows this cell's label covers, including its own. 0 = covered.
    pub row_span: usize,
    /// Columns this cell's label covers, including its own. 0 = covered.
    pub col_span: usize,
}

impl HeaderCell {
    /// True if this cell owns a label and should be rendered.
    pub fn is_origin(&self) -> bool {
        self.row_span > 0
    }

    /// True if this cell lies inside another cell's span.
    pub fn is_covered(&self) -> bool {
        self.row_span == 0
    }
}

/// Immutable grid of spanned header cells.
///
/// Computed once from the input columns and read-only afterward. The
/// spans of all origin cells tile the `row_count x col_count` rectangle
/// with no gaps and no overlaps.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderSpans {
    row_count: usize,
    col_count: usize,
    /// Row-major, `row_count * col_count` cells.
    cells: Vec<HeaderCell>,
}

impl HeaderSpans {
    /// Build the span grid from per-column label sequences.
    ///
    /// The grid is `max(sequence lengths, 1)` rows deep and one column
    /// wide per input column. An empty sequence renders as a single
    /// blank (empty-string) cell spanning the full depth.
    pub fn new(columns: &[Vec<Option<String>>], options: SpanOptions) -> Self {
        let col_count = columns.len();
        let row_count = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut grid = Self {
            row_count,
            col_count,
            cells: vec![HeaderCell::default(); row_count * col_count],
        };

        for (col, labels) in columns.iter().enumerate() {
            grid.fill_column(col, labels);
        }

        if options.merge_headers {
            grid.merge_horizontal(options.mixed_span_allowed);
        }

        grid
    }

    /// Convenience constructor for the common all-labels-present case.
    pub fn from_labels(columns: &[&[&str]], options: SpanOptions) -> Self {
        let owned: Vec<Vec<Option<String>>> = columns
            .iter()
            .map(|labels| labels.iter().map(|s| Some((*s).to_string())).collect())
            .collect();
        Self::new(&owned, options)
    }

    /// Number of header rows (the deepest label sequence, minimum 1).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of header columns (one per input column).
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// The cell at `(row, col)`, or `None` out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&HeaderCell> {
        self.cells.get(self.index(row, col)?)
    }

    /// Label text at `(row, col)`. `None` for covered cells, absent
    /// labels, and out-of-range positions.
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).and_then(|c| c.text.as_deref())
    }

    /// Row span at `(row, col)`. 0 for covered cells and out of range.
    pub fn row_span(&self, row: usize, col: usize) -> usize {
        self.cell(row, col).map_or(0, |c| c.row_span)
    }

    /// Column span at `(row, col)`. 0 for covered cells and out of range.
    pub fn col_span(&self, row: usize, col: usize) -> usize {
        self.cell(row, col).map_or(0, |c| c.col_span)
    }

    /// All span origins in row-major order as `(row, col, cell)`.
    ///
    /// Renderers emit exactly one header cell per origin, applying
    /// rowspan/colspan attributes where the stored span exceeds 1, and
    /// skip everything else.
    pub fn origins(&self) -> impl Iterator<Item = (usize, usize, &HeaderCell)> {
        let stride = self.col_count.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_origin())
            .map(move |(i, cell)| (i / stride, i % stride, cell))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.row_count && col < self.col_count).then_some(row * self.col_count + col)
    }

    /// Place one column's labels and resolve its vertical spans.
    fn fill_column(&mut self, col: usize, labels: &[Option<String>]) {
        let stride = self.col_count;
        let depth = self.row_count;

        if labels.is_empty() {
            // No label at any level: one blank cell covering the full depth.
            if let Some(cell) = self.cells.get_mut(col) {
                cell.text = Some(String::new());
                cell.row_span = depth;
                cell.col_span = 1;
            }
            return;
        }

        for (row, label) in labels.iter().enumerate() {
            if let Some(cell) = self.cells.get_mut(row * stride + col) {
                cell.text = label.clone();
                cell.row_span = 1;
                cell.col_span = 1;
            }
        }

        // A short sequence stretches its last entry down to the full depth.
        let last = labels.len().saturating_sub(1);
        if let Some(cell) = self.cells.get_mut(last * stride + col) {
            cell.row_span = depth - last;
        }

        // Absent entries fold upward. Scanning bottom to top (row 0 is
        // never a source), each no-label cell adds its extent to the
        // nearest labeled cell above it, so a run of absent depths
        // becomes one span rooted at the last actual label.
        for row in (1..labels.len()).rev() {
            let here = row * stride + col;
            let span = match self.cells.get(here) {
                Some(cell) if cell.is_origin() && cell.text.is_none() => cell.row_span,
                _ => continue,
            };
            let target = (0..row)
                .rev()
                .find(|&r| {
                    self.cells
                        .get(r * stride + col)
                        .is_some_and(|c| c.text.is_some())
                })
                .unwrap_or(0);
            if let Some(cell) = self.cells.get_mut(target * stride + col) {
                cell.row_span += span;
            }
            if let Some(cell) = self.cells.get_mut(here) {
                *cell = HeaderCell::default();
            }
        }
    }

    /// Merge adjacent same-text, same-row-span origins, right to left so
    /// multi-column runs accumulate into the leftmost cell.
    fn merge_horizontal(&mut self, mixed_span_allowed: bool) {
        let stride = self.col_count;
        for row in 0..self.row_count {
            for col in (1..self.col_count).rev() {
                let src = match self.cells.get(row * stride + col) {
                    Some(cell) if cell.is_origin() => cell.clone(),
                    _ => continue,
                };
                let dst_matches = self
                    .cells
                    .get(row * stride + col - 1)
                    .is_some_and(|dst| dst.row_span == src.row_span && texts_equal(dst, &src));
                if !dst_matches {
                    continue;
                }
                // Merging under a cell that is itself a span origin
                // staggers the header layout. Allowed only when opted
                // in, on the top row, or when the cell above is covered.
                if !(mixed_span_allowed || row == 0 || self.col_span(row - 1, col) == 0) {
                    continue;
                }
                if let Some(dst) = self.cells.get_mut(row * stride + col - 1) {
                    dst.col_span += src.col_span;
                }
                for r in row..row + src.row_span {
                    if let Some(cell) = self.cells.get_mut(r * stride + col) {
                        *cell = HeaderCell::default();
                    }
                }
            }
        }
    }
}

/// Merge-candidate text equality: both labels must be present and equal
/// byte for byte. Two absent labels are not equal to each other, and an
/// absent label never equals an empty string.
fn texts_equal(a: &HeaderCell, b: &HeaderCell) -> bool {
    matches!((&a.text, &b.text), (Some(x), Some(y)) if x == y)
}
