//! In-memory editor host for tests.

use crate::error::{CalcError, CalcResult};
use crate::host::{EchoChannel, EditorHost, PositionMarker};
use crate::selection::Position;

/// An in-memory host: a line buffer, a scripted selection, and captured
/// echo output. Mutation follows the same coordinate conventions as
/// [`EditorHost`].
#[derive(Debug, Default)]
pub struct FakeEditor {
    lines: Vec<String>,
    anchor: Option<Position>,
    cursor: Option<Position>,
    in_selection: bool,
    echoes: Vec<(EchoChannel, String)>,
}

impl FakeEditor {
    /// Build a host over the given buffer contents.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Script a selection: anchor and cursor as 1-indexed `(line, column)`.
    pub fn select(&mut self, anchor: (usize, usize), cursor: (usize, usize)) {
        self.anchor = Some(Position::new(0, anchor.0, anchor.1, 0));
        self.cursor = Some(Position::new(0, cursor.0, cursor.1, 0));
        self.in_selection = true;
    }

    /// Script a visual-line selection on one line (reported as
    /// anchor == cursor).
    pub fn select_line(&mut self, line: usize) {
        self.select((line, 1), (line, 1));
    }

    /// The current buffer contents.
    pub fn buffer(&self) -> &[String] {
        &self.lines
    }

    /// Whether the scripted selection is still active.
    pub fn in_selection(&self) -> bool {
        self.in_selection
    }

    /// Echoed messages in emission order.
    pub fn echoes(&self) -> &[(EchoChannel, String)] {
        &self.echoes
    }
}

impl EditorHost for FakeEditor {
    fn position(&mut self, marker: PositionMarker) -> CalcResult<Position> {
        let pos = match marker {
            PositionMarker::SelectionAnchor => self.anchor,
            PositionMarker::Cursor => self.cursor,
        };
        pos.ok_or_else(|| CalcError::host("no selection scripted"))
    }

    fn lines(&mut self, _buffer: i64, start: usize, end: usize) -> CalcResult<Vec<String>> {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        Ok(self.lines[start..end].to_vec())
    }

    fn clear_range(
        &mut self,
        _buffer: i64,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> CalcResult<()> {
        if start_line > end_line || end_line >= self.lines.len() {
            return Err(CalcError::host(format!(
                "clear_range out of bounds: lines {start_line}..={end_line}"
            )));
        }
        let head: String = self.lines[start_line].chars().take(start_col).collect();
        let tail: String = self.lines[end_line].chars().skip(end_col).collect();
        self.lines.splice(start_line..=end_line, [head + &tail]);
        Ok(())
    }

    fn insert_text(&mut self, _buffer: i64, line: usize, col: usize, text: &str) -> CalcResult<()> {
        let Some(target) = self.lines.get(line) else {
            return Err(CalcError::host(format!("insert_text out of bounds: line {line}")));
        };
        let prefix: String = target.chars().take(col).collect();
        let suffix: String = target.chars().skip(col).collect();
        let mut parts: Vec<String> = text.split('\n').map(str::to_string).collect();
        if let Some(first) = parts.first_mut() {
            *first = format!("{prefix}{first}");
        }
        if let Some(last) = parts.last_mut() {
            *last = format!("{last}{suffix}");
        }
        self.lines.splice(line..=line, parts);
        Ok(())
    }

    fn leave_selection_mode(&mut self) -> CalcResult<()> {
        self.in_selection = false;
        Ok(())
    }

    fn echo(&mut self, channel: EchoChannel, message: &str) {
        self.echoes.push((channel, message.to_string()));
    }
}
