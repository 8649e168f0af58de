//! Generates worksheet XML for the XLSX exporter.
//!
//! Header span origins become `<mergeCell>` ranges; string content uses
//! inline strings (`t="inlineStr"`) so no shared string table is needed.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{GridheadError, Result};
use crate::export::XlsxOptions;
use crate::grid::{CellValue, Grid};
use crate::rect::RectArea;

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// Write a complete worksheet XML document for `grid` (or an `area`).
pub(crate) fn write_sheet_xml(
    grid: &Grid,
    area: Option<&RectArea>,
    options: &XlsxOptions,
) -> Result<String> {
    let rows = area.map_or(0..grid.row_count(), |a| a.rows());
    let cols = area.map_or(0..grid.col_count(), |a| a.cols());

    let spans = options
        .include_headers
        .then(|| grid.header_spans_for(cols.clone(), options.span));
    let header_depth = spans.as_ref().map_or(0, |s| s.row_count());

    let total_rows = header_depth + rows.len();
    let total_cols = cols.len();

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut worksheet = BytesStart::new("worksheet");
    worksheet.push_attribute(("xmlns", SPREADSHEET_NS));
    writer.write_event(Event::Start(worksheet))?;

    if total_rows > 0 && total_cols > 0 {
        let dimension = format!(
            "A1:{}{}",
            col_to_letter(total_cols.saturating_sub(1)),
            total_rows
        );
        writer
            .create_element("dimension")
            .with_attribute(("ref", dimension.as_str()))
            .write_empty()?;
    }

    writer.write_event(Event::Start(BytesStart::new("sheetData")))?;

    let mut merges: Vec<String> = Vec::new();
    if let Some(spans) = &spans {
        for row in 0..spans.row_count() {
            let mut row_start = BytesStart::new("row");
            row_start.push_attribute(("r", (row + 1).to_string().as_str()));
            writer.write_event(Event::Start(row_start))?;
            for col in 0..spans.col_count() {
                let Some(cell) = spans.cell(row, col) else {
                    continue;
                };
                if cell.is_covered() {
                    continue;
                }
                write_inline_string(&mut writer, row, col, cell.text.as_deref().unwrap_or(""))?;
                if cell.row_span > 1 || cell.col_span > 1 {
                    merges.push(format!(
                        "{}{}:{}{}",
                        col_to_letter(col),
                        row + 1,
                        col_to_letter(col + cell.col_span - 1),
                        row + cell.row_span
                    ));
                }
            }
            writer.write_event(Event::End(BytesEnd::new("row")))?;
        }
    }

    for (offset, row) in rows.enumerate() {
        let out_row = header_depth + offset;
        let mut row_start = BytesStart::new("row");
        row_start.push_attribute(("r", (out_row + 1).to_string().as_str()));
        writer.write_event(Event::Start(row_start))?;
        for (out_col, col) in cols.clone().enumerate() {
            match grid.value(row, col) {
                None | Some(CellValue::Empty) => {}
                Some(CellValue::Text(s)) => {
                    write_inline_string(&mut writer, out_row, out_col, s)?;
                }
                Some(CellValue::Number(n)) => {
                    write_value_cell(&mut writer, out_row, out_col, None, &n.to_string())?;
                }
                Some(CellValue::Bool(b)) => {
                    let v = if *b { "1" } else { "0" };
                    write_value_cell(&mut writer, out_row, out_col, Some("b"), v)?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new("row")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sheetData")))?;

    if !merges.is_empty() {
        let mut merge_cells = BytesStart::new("mergeCells");
        merge_cells.push_attribute(("count", merges.len().to_string().as_str()));
        writer.write_event(Event::Start(merge_cells))?;
        for merge in &merges {
            writer
                .create_element("mergeCell")
                .with_attribute(("ref", merge.as_str()))
                .write_empty()?;
        }
        writer.write_event(Event::End(BytesEnd::new("mergeCells")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("worksheet")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| GridheadError::Export(e.to_string()))
}

/// Write one `<c t="inlineStr">` cell.
fn write_inline_string(writer: &mut Writer<Vec<u8>>, row: usize, col: usize, text: &str) -> Result<()> {
    let mut c = BytesStart::new("c");
    c.push_attribute(("r", cell_ref(row, col).as_str()));
    c.push_attribute(("t", "inlineStr"));
    writer.write_event(Event::Start(c))?;
    writer.write_event(Event::Start(BytesStart::new("is")))?;
    writer
        .create_element("t")
        .write_text_content(BytesText::new(text))?;
    writer.write_event(Event::End(BytesEnd::new("is")))?;
    writer.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

/// Write one `<c>` cell with a raw `<v>` value and optional type.
fn write_value_cell(
    writer: &mut Writer<Vec<u8>>,
    row: usize,
    col: usize,
    cell_type: Option<&str>,
    value: &str,
) -> Result<()> {
    let mut c = BytesStart::new("c");
    c.push_attribute(("r", cell_ref(row, col).as_str()));
    if let Some(t) = cell_type {
        c.push_attribute(("t", t));
    }
    writer.write_event(Event::Start(c))?;
    writer
        .create_element("v")
        .write_text_content(BytesText::new(value))?;
    writer.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

/// A1-style reference for a 0-indexed (row, col).
fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", col_to_letter(col), row + 1)
}

/// Convert a 0-indexed column to its letter form (0 -> A, 26 -> AA).
fn col_to_letter(mut col: usize) -> String {
    let mut letters = String::new();
    loop {
        let rem = u8::try_from(col % 26).unwrap_or(0);
        letters.insert(0, char::from(b'A' + rem));
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_col_to_letter() {
        assert_eq!(col_to_letter(0), "A");
        assert_eq!(col_to_letter(25), "Z");
        assert_eq!(col_to_letter(26), "AA");
        assert_eq!(col_to_letter(27), "AB");
        assert_eq!(col_to_letter(701), "ZZ");
        assert_eq!(col_to_letter(702), "AAA");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(0, 0), "A1");
        assert_eq!(cell_ref(9, 2), "C10");
    }
}
