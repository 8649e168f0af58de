//! Build a small grid with a two-level header and print it as HTML.
//!
//! Run with: cargo run --example export_html

use gridhead::{Column, Grid, HtmlOptions};

fn main() -> gridhead::Result<()> {
    let mut grid = Grid::new(vec![
        Column::labeled(["Product"]),
        Column::labeled(["2025", "Q3"]),
        Column::labeled(["2025", "Q4"]),
        Column::labeled(["2026", "Q1"]),
        Column::labeled(["2026", "Q2"]),
    ]);
    grid.push_row(vec!["Widgets".into(), 120.into(), 135.into(), 110.into(), 95.into()]);
    grid.push_row(vec!["Gadgets".into(), 80.into(), 88.into(), 97.into(), 102.into()]);

    let options = HtmlOptions {
        table_class: Some("report".to_string()),
        ..HtmlOptions::default()
    };
    let html = gridhead::write_html(&grid, None, &options)?;
    println!("{html}");
    Ok(())
}
