//! HTML table writer.
//!
//! Emits a `<table>` with a spanned `<thead>`: one `<th>` per header
//! span origin, carrying `rowspan`/`colspan` attributes when the stored
//! span exceeds 1. Covered cells are skipped entirely.

use crate::error::Result;
use crate::grid::{CellValue, Grid};
use crate::header::SpanOptions;
use crate::rect::RectArea;

/// Options for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Emit the `<thead>` block. On by default.
    pub include_headers: bool,
    /// `class` attribute for the `<table>` element.
    pub table_class: Option<String>,
    /// Header span construction settings.
    pub span: SpanOptions,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            table_class: None,
            span: SpanOptions::default(),
        }
    }
}

/// Write `grid` (or a rectangular `area` of it) as an HTML table.
pub fn write_html(grid: &Grid, area: Option<&RectArea>, options: &HtmlOptions) -> Result<String> {
    let rows = area.map_or(0..grid.row_count(), |a| a.rows());
    let cols = area.map_or(0..grid.col_count(), |a| a.cols());

    let mut out = String::with_capacity(1024);
    match &options.table_class {
        Some(class) => {
            out.push_str(&format!("<table class=\"{}\">\n", html_escape(class)));
        }
        None => out.push_str("<table>\n"),
    }

    if options.include_headers {
        let spans = grid.header_spans_for(cols.clone(), options.span);
        out.push_str("<thead>\n");
        for row in 0..spans.row_count() {
            out.push_str("<tr>");
            for col in 0..spans.col_count() {
                let Some(cell) = spans.cell(row, col) else {
                    continue;
                };
                if cell.is_covered() {
                    continue;
                }
                out.push_str("<th");
                if cell.row_span > 1 {
                    out.push_str(&format!(" rowspan=\"{}\"", cell.row_span));
                }
                if cell.col_span > 1 {
                    out.push_str(&format!(" colspan=\"{}\"", cell.col_span));
                }
                out.push('>');
                match cell.text.as_deref() {
                    Some(text) if !text.is_empty() => out.push_str(&html_escape(text)),
                    // Blank and absent labels still need content so the
                    // cell border renders.
                    _ => out.push_str("&nbsp;"),
                }
                out.push_str("</th>");
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</thead>\n");
    }

    out.push_str("<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for col in cols.clone() {
            let value = grid.value(row, col).unwrap_or(&CellValue::Empty);
            let align = matches!(value, CellValue::Number(_) | CellValue::Bool(_));
            if align {
                out.push_str("<td align=\"right\">");
            } else {
                out.push_str("<td>");
            }
            let display = value.display();
            if display.is_empty() {
                out.push_str("&nbsp;");
            } else {
                out.push_str(&html_escape(&display));
            }
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");

    Ok(out)
}

/// Minimal escaping for HTML text and attribute content.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::grid::Column;

    #[test]
    fn test_escape() {
        assert_eq!(html_escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_headerless_table() {
        let mut grid = Grid::new(vec![Column::labeled(["A"])]);
        grid.push_row(vec!["x".into()]);
        let options = HtmlOptions {
            include_headers: false,
            ..HtmlOptions::default()
        };
        let html = write_html(&grid, None, &options).unwrap();
        assert!(!html.contains("<thead>"));
        assert!(html.contains("<td>x</td>"));
    }
}
