use std::fmt::Write;

use crate::models::CanonicalRecord;
use crate::query::QueryView;
use crate::utils::sanitize_cell;

const HEADERS: [&str; 4] = ["Code", "Name", "Start", "Finish"];
const COLUMN_GAP: &str = "  ";

/// Render records as an aligned Code/Name/Start/Finish table
///
/// An empty record list renders as the header followed by a "No data" line.
pub fn render_table(records: &[CanonicalRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                sanitize_cell(&r.code),
                sanitize_cell(&r.name),
                sanitize_cell(&r.start),
                sanitize_cell(&r.finish),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_row(&mut out, &rule, &widths);

    if rows.is_empty() {
        out.push_str("No data\n");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let _ = write!(line, "{:<width$}", cell.as_ref(), width = *width);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Summary line printed under the table
pub fn render_summary(view: &QueryView) -> String {
    format!("Showing {} of {} entries", view.shown, view.total)
}
