//! Selection positions and range normalization.

/// A buffer position as reported by the host: 1-indexed line and column,
/// plus the buffer id and screen offset, which this plugin carries through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub buffer: i64,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(buffer: i64, line: usize, column: usize, offset: usize) -> Self {
        Self {
            buffer,
            line,
            column,
            offset,
        }
    }

    /// Ordering key: line first, then column. Buffer and offset never
    /// participate in ordering.
    fn key(self) -> (usize, usize) {
        (self.line, self.column)
    }
}

/// A document-ordered selection span.
///
/// Invariant: `start <= stop` under the `(line, column)` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub stop: Position,
}

impl Range {
    /// Normalize two distinct reported positions into document order,
    /// whichever of them was the anchor.
    ///
    /// Returns `None` when the positions are equal — the host reports a
    /// visual-line selection that way, and resolving it needs the line
    /// length (see [`Range::whole_line`]).
    pub fn from_positions(anchor: Position, cursor: Position) -> Option<Range> {
        if anchor == cursor {
            return None;
        }
        if anchor.key() >= cursor.key() {
            Some(Range {
                start: cursor,
                stop: anchor,
            })
        } else {
            Some(Range {
                start: anchor,
                stop: cursor,
            })
        }
    }

    /// Whole-line range for a visual-line selection, spanning columns
    /// `1..=line_len`.
    ///
    /// Returns `None` for an empty line: there is nothing a range could
    /// span.
    pub fn whole_line(pos: Position, line_len: usize) -> Option<Range> {
        if line_len == 0 {
            return None;
        }
        Some(Range {
            start: Position { column: 1, ..pos },
            stop: Position {
                column: line_len,
                ..pos
            },
        })
    }
}
