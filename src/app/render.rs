//! Rendering of the task listing.

use std::io::{self, Write};

use crate::core::TaskList;

/// Glyph shown next to a completed task.
pub const DONE_GLYPH: &str = "✅";

/// Glyph shown next to a task that is still open.
pub const OPEN_GLYPH: &str = "❌";

/// Writes the task listing to `out`, one task per line in insertion order.
///
/// An empty collection renders a single "No tasks added." line instead.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_tasks<W: Write>(out: &mut W, tasks: &TaskList) -> io::Result<()> {
    if tasks.is_empty() {
        writeln!(out, "No tasks added.")?;
        return Ok(());
    }

    for (name, done) in tasks {
        let glyph = if *done { DONE_GLYPH } else { OPEN_GLYPH };
        writeln!(out, "- {name} {glyph}")?;
    }

    Ok(())
}
