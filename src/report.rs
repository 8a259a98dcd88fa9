use std::io::{self, Write};
use std::time::Duration;

use crate::topk::FrequencyEntry;

/// Lists longer than this are shortened by [`Layout::Elided`].
pub const ELIDE_THRESHOLD: usize = 10;
const ELIDE_EDGE: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One line per entry.
    #[default]
    Full,
    /// First and last five entries around a `...` line once the list
    /// outgrows [`ELIDE_THRESHOLD`].
    Elided,
}

fn write_entry<W: Write>(out: &mut W, entry: &FrequencyEntry) -> io::Result<()> {
    writeln!(out, "{} :  {}", entry.word, entry.count)
}

pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[FrequencyEntry],
    layout: Layout,
) -> io::Result<()> {
    if layout == Layout::Elided && entries.len() > ELIDE_THRESHOLD {
        for entry in &entries[..ELIDE_EDGE] {
            write_entry(out, entry)?;
        }
        writeln!(out, "...")?;
        for entry in &entries[entries.len() - ELIDE_EDGE..] {
            write_entry(out, entry)?;
        }
        return Ok(());
    }

    for entry in entries {
        write_entry(out, entry)?;
    }
    Ok(())
}

pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration, k: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Used {}s to find the top {} most common words",
        elapsed.as_secs_f64(),
        k
    )
}
