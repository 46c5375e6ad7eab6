//! CSV export of recorded entries.
//!
//! One row per stored entry: habit order first, then each habit's entry
//! insertion order. Habits without entries produce no rows.

use std::io::{self, Write};

use crate::habit::Habit;

/// Header row.
pub const CSV_HEADER: &str = "Habit Name,Date,Status";

/// Write the export table to `out`.
pub fn write_csv<W: Write>(habits: &[Habit], mut out: W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for habit in habits {
        let name = escape_field(habit.name());
        for (date, state) in habit.entries().iter() {
            writeln!(out, "{name},{date},{}", state.status_label())?;
        }
    }
    out.flush()
}

/// Render the export table as a string.
pub fn export_csv(habits: &[Habit]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(habits, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Quote a field if it contains a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
