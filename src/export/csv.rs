//! CSV/TSV writer.
//!
//! Quoting is the mirror of RFC-style parsing: a field is quoted only
//! when it contains the delimiter, a quote, or a line break; embedded
//! quotes double. Header rows (one per header depth) are optional and
//! carry origin text at origin positions, blanks at covered positions.

use crate::error::Result;
use crate::grid::{CellValue, Grid};
use crate::header::SpanOptions;
use crate::rect::RectArea;

/// Output delimiter.
#[derive(Debug, Clone, Copy, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// Options for CSV output.
#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    pub delimiter: Delimiter,
    /// Emit one row per header depth before the data. Off by default;
    /// CSV has no cell spanning, so deep headers flatten poorly.
    pub include_headers: bool,
    /// Header span construction settings (used only with headers on).
    pub span: SpanOptions,
}

/// Write `grid` (or a rectangular `area` of it) as delimited text.
pub fn write_csv(grid: &Grid, area: Option<&RectArea>, options: &CsvOptions) -> Result<String> {
    let rows = area.map_or(0..grid.row_count(), |a| a.rows());
    let cols = area.map_or(0..grid.col_count(), |a| a.cols());
    let sep = options.delimiter.as_char();

    let mut out = String::with_capacity(1024);

    if options.include_headers {
        let spans = grid.header_spans_for(cols.clone(), options.span);
        for row in 0..spans.row_count() {
            let fields: Vec<String> = (0..spans.col_count())
                .map(|col| quote_field(spans.text(row, col).unwrap_or(""), sep))
                .collect();
            out.push_str(&fields.join(&sep.to_string()));
            out.push('\n');
        }
    }

    for row in rows {
        let fields: Vec<String> = cols
            .clone()
            .map(|col| {
                let value = grid.value(row, col).unwrap_or(&CellValue::Empty);
                quote_field(&value.display(), sep)
            })
            .collect();
        out.push_str(&fields.join(&sep.to_string()));
        out.push('\n');
    }

    Ok(out)
}

/// Quote a field when its content requires it.
fn quote_field(field: &str, sep: char) -> String {
    let needs_quotes = field.contains(sep) || field.contains('"') || field.contains(['\n', '\r']);
    if !needs_quotes {
        return field.to_string();
    }
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}
