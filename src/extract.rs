//! Text extraction from a resolved selection range.

use crate::selection::Range;

/// Assemble the text a range spans from the lines covering it.
///
/// `lines` must cover `[range.start.line, range.stop.line]` in order, as
/// returned by a 0-indexed fetch starting at `range.start.line - 1`. The
/// stop column is included in the output. Columns count characters, and
/// slicing clamps to the line instead of panicking.
pub fn selection_text(lines: &[String], range: &Range) -> String {
    let start_col = range.start.column;
    let stop_col = range.stop.column;
    match lines {
        [] => String::new(),
        [line] => slice_chars(line, start_col - 1, Some(stop_col)),
        [head, middle @ .., tail] => {
            let mut parts = Vec::with_capacity(lines.len());
            parts.push(slice_chars(head, start_col - 1, None));
            parts.extend(middle.iter().cloned());
            parts.push(slice_chars(tail, 0, Some(stop_col)));
            parts.join("\n")
        }
    }
}

/// Character-based `[start, end)` slice, clamped to the line. `None` runs to
/// the end of the line.
fn slice_chars(line: &str, start: usize, end: Option<usize>) -> String {
    match end {
        Some(end) => line
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect(),
        None => line.chars().skip(start).collect(),
    }
}
