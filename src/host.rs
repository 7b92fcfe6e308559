//! Editor capabilities consumed by the plugin.
//!
//! The host editor owns the buffer, the selection, and the screen; the
//! plugin reaches all of them through [`EditorHost`], so tests substitute an
//! in-memory implementation ([`fake::FakeEditor`]).

pub mod fake;

use crate::error::CalcResult;
use crate::selection::Position;

/// Which reported position to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMarker {
    /// Where the visual selection began.
    SelectionAnchor,
    /// The active cursor position.
    Cursor,
}

/// Where an echoed diagnostic lands in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoChannel {
    Message,
    Error,
}

/// Blocking, synchronous editor capabilities.
///
/// Reported positions are 1-indexed `(line, column)`; the line and mutation
/// calls are 0-indexed with exclusive end bounds, matching the usual host
/// buffer API split. Columns count characters.
pub trait EditorHost {
    /// Read a reported position.
    fn position(&mut self, marker: PositionMarker) -> CalcResult<Position>;

    /// Fetch lines `[start, end)` of a buffer, 0-indexed. Bounds are
    /// clamped, so the result may be shorter than requested.
    fn lines(&mut self, buffer: i64, start: usize, end: usize) -> CalcResult<Vec<String>>;

    /// Delete the text between two 0-indexed positions. The end column is
    /// exclusive.
    fn clear_range(
        &mut self,
        buffer: i64,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> CalcResult<()>;

    /// Insert text, possibly spanning lines, at a 0-indexed position.
    fn insert_text(&mut self, buffer: i64, line: usize, col: usize, text: &str) -> CalcResult<()>;

    /// Return the editor to normal editing, as if the user pressed escape.
    fn leave_selection_mode(&mut self) -> CalcResult<()>;

    /// Print a message in the host UI. Fire-and-forget.
    fn echo(&mut self, channel: EchoChannel, message: &str);
}
