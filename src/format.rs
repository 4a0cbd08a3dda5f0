//! Display formatting for section grids.
//!
//! Turns a grid into rows of human-readable cells, one row per day with
//! exactly `periods_per_day` cells. Free cells render as [`FREE_CELL`];
//! occupied cells as `"<room>: <subject> (<instructor>, <T|P>)"`.

use crate::models::{Day, Placement, SectionGrid, Slot, Timetable};

/// Marker for a slot without a placement.
pub const FREE_CELL: &str = "FREE";

/// One day of a formatted grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    /// Day of the row.
    pub day: Day,
    /// One rendered cell per period.
    pub cells: Vec<String>,
}

/// Renders one placement as a cell string.
pub fn format_cell(placement: &Placement) -> String {
    format!(
        "{}: {} ({}, {})",
        placement.room, placement.subject, placement.instructor, placement.kind
    )
}

/// Formats a section grid as one row per day.
///
/// Periods the grid does not cover render as free.
pub fn format_grid(grid: &SectionGrid, periods_per_day: usize) -> Vec<DayRow> {
    Day::ALL
        .into_iter()
        .map(|day| DayRow {
            day,
            cells: (0..periods_per_day)
                .map(|p| {
                    grid.get(Slot::new(day, p))
                        .map_or_else(|| FREE_CELL.to_string(), format_cell)
                })
                .collect(),
        })
        .collect()
}

/// Formats every section of a timetable, in section order.
pub fn format_timetable(timetable: &Timetable) -> Vec<(String, Vec<DayRow>)> {
    let periods = timetable.week().periods_per_day();
    timetable
        .sections()
        .iter()
        .map(|g| (g.section.clone(), format_grid(g, periods)))
        .collect()
}

/// Renders formatted rows as a plain-text table with a period header.
pub fn render_text(rows: &[DayRow]) -> String {
    let periods = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    let headers: Vec<String> = (1..=periods).map(|p| format!("P{p}")).collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = format!("{:<4}", "Day");
    for (h, &w) in headers.iter().zip(&widths) {
        out.push_str(&format!(" | {h:<w$}"));
    }
    out.push('\n');

    for row in rows {
        out.push_str(&format!("{:<4}", row.day.name()));
        for (cell, &w) in row.cells.iter().zip(&widths) {
            out.push_str(&format!(" | {cell:<w$}"));
        }
        out.push('\n');
    }
    out
}
