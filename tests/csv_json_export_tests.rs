//! Tests for the CSV/TSV and JSON writers.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)]

mod common;

use common::{quarterly_report, GridBuilder};
use gridhead::{CsvOptions, Delimiter, RectArea, SpanOptions};

// ============================================================================
// CSV
// ============================================================================

/// Default output: data only, comma-separated, one line per row.
#[test]
fn test_csv_data_only() {
    let csv = gridhead::write_csv(&quarterly_report(), None, &CsvOptions::default()).unwrap();
    assert_eq!(
        csv,
        "Widgets,120,135,110,95\nGadgets,80,88,97,102\n"
    );
}

/// With headers on, one row per header depth precedes the data; origin
/// text appears once, covered positions stay blank.
#[test]
fn test_csv_header_rows() {
    let options = CsvOptions {
        include_headers: true,
        ..CsvOptions::default()
    };
    let csv = gridhead::write_csv(&quarterly_report(), None, &options).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Product,2025,,2026,"));
    assert_eq!(lines.next(), Some(",Q3,Q4,Q1,Q2"));
    assert_eq!(lines.next(), Some("Widgets,120,135,110,95"));
}

/// Fields containing the delimiter, quotes, or newlines are quoted with
/// doubled inner quotes.
#[test]
fn test_csv_quoting() {
    let grid = GridBuilder::new()
        .column(&["A"])
        .column(&["B"])
        .row(vec!["a,b".into(), "say \"hi\"\nok".into()])
        .build();
    let csv = gridhead::write_csv(&grid, None, &CsvOptions::default()).unwrap();
    assert_eq!(csv, "\"a,b\",\"say \"\"hi\"\"\nok\"\n");
}

/// TSV uses tabs and leaves commas unquoted.
#[test]
fn test_tsv_delimiter() {
    let grid = GridBuilder::new()
        .column(&["A"])
        .column(&["B"])
        .row(vec!["a,b".into(), 2.into()])
        .build();
    let options = CsvOptions {
        delimiter: Delimiter::Tab,
        ..CsvOptions::default()
    };
    let csv = gridhead::write_csv(&grid, None, &options).unwrap();
    assert_eq!(csv, "a,b\t2\n");
}

/// Area export writes only the selected rectangle.
#[test]
fn test_csv_area() {
    let grid = quarterly_report();
    let area = RectArea::new(&grid, (1, 0), (1, 1)).unwrap();
    let csv = gridhead::write_csv(&grid, Some(&area), &CsvOptions::default()).unwrap();
    assert_eq!(csv, "Gadgets,80\n");
}

// ============================================================================
// JSON
// ============================================================================

/// The document carries counts, the header span grid, and plain rows.
#[test]
fn test_json_document_shape() {
    let json =
        gridhead::write_json(&quarterly_report(), None, SpanOptions::default()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(doc["row_count"], 2);
    assert_eq!(doc["col_count"], 5);
    assert_eq!(doc["rows"][0][0], "Widgets");
    assert_eq!(doc["rows"][1][4], 102.0);

    let headers = &doc["headers"];
    assert_eq!(headers["row_count"], 2);
    assert_eq!(headers["col_count"], 5);
    // Cells are row-major; cell 1 is the merged "2025" origin.
    assert_eq!(headers["cells"][1]["text"], "2025");
    assert_eq!(headers["cells"][1]["col_span"], 2);
    // Cell 2 is covered by it.
    assert_eq!(headers["cells"][2]["row_span"], 0);
    assert!(headers["cells"][2]["text"].is_null());
}

/// Area export restricts both rows and header columns.
#[test]
fn test_json_area() {
    let grid = quarterly_report();
    let area = RectArea::new(&grid, (0, 3), (0, 4)).unwrap();
    let json = gridhead::write_json(&grid, Some(&area), SpanOptions::default()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(doc["row_count"], 1);
    assert_eq!(doc["col_count"], 2);
    assert_eq!(doc["rows"][0][0], 110.0);
    assert_eq!(doc["headers"]["cells"][0]["text"], "2026");
    assert_eq!(doc["headers"]["cells"][0]["col_span"], 2);
}

/// Empty values serialize as null.
#[test]
fn test_json_empty_is_null() {
    let grid = GridBuilder::new()
        .column(&["A"])
        .row(vec![gridhead::CellValue::Empty])
        .build();
    let json = gridhead::write_json(&grid, None, SpanOptions::default()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(doc["rows"][0][0].is_null());
}
