//! The command surface and the per-invocation pipeline.

use crate::config::{Settings, SettingsUpdate};
use crate::error::{CalcError, CalcResult};
use crate::eval::{self, EvalOutcome};
use crate::extract;
use crate::format::FloatFormat;
use crate::host::{EditorHost, PositionMarker};
use crate::logger::{self, LogLevel};
use crate::selection::Range;

/// The selection calculator, bound to one host.
///
/// Every command is a single synchronous pass through the host; nothing but
/// `settings` survives between calls.
pub struct CalcPlugin<H: EditorHost> {
    host: H,
    settings: Settings,
}

impl<H: EditorHost> CalcPlugin<H> {
    /// Bind to a host with default settings.
    pub fn new(host: H) -> Self {
        Self::with_settings(host, Settings::default())
    }

    /// Bind to a host with explicit settings.
    pub fn with_settings(host: H, settings: Settings) -> Self {
        Self { host, settings }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The bound host. Tests inspect buffer state through this.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the bound host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Apply a configuration update.
    ///
    /// Invalid fields are logged at ERROR and keep their prior value; valid
    /// fields apply either way.
    pub fn setup(&mut self, update: &SettingsUpdate) {
        for err in self.settings.apply(update) {
            self.log(LogLevel::Error, &format!("{err}; keeping previous value"));
        }
        let float_format = self.settings.float_format;
        let log_level = self.settings.log_level;
        self.log(LogLevel::Debug, &format!("Using float_format: {float_format}"));
        self.log(LogLevel::Debug, &format!("Using log_level: {log_level}"));
    }

    /// Update only the float format. An invalid spec is logged at ERROR and
    /// leaves the configured format untouched.
    pub fn set_format(&mut self, spec: &str) {
        match spec.parse::<FloatFormat>() {
            Ok(format) => {
                self.settings.float_format = format;
                self.log(LogLevel::Debug, &format!("Using float_format: {format}"));
            }
            Err(err) => {
                self.log(LogLevel::Error, &format!("{err}; keeping previous value"));
            }
        }
    }

    /// Evaluate the current selection and replace it with the formatted
    /// result.
    ///
    /// Aborts without touching the buffer when no usable range or text
    /// exists; a failed evaluation leaves the buffer as it is and only
    /// exits selection mode.
    pub fn calculate(&mut self) {
        if let Err(err) = self.run_calculate() {
            self.abort(err);
        }
    }

    /// Re-format the already-numeric selection without evaluating it.
    ///
    /// `spec` overrides the configured format for this call only. A
    /// selection that does not parse as a number aborts without mutation.
    pub fn format_number(&mut self, spec: Option<&str>) {
        if let Err(err) = self.run_format_number(spec) {
            self.abort(err);
        }
    }

    fn run_calculate(&mut self) -> CalcResult<()> {
        let range = self.selected_range()?;
        let text = self.selected_text(&range)?;
        match eval::evaluate(&text, self.settings.comma_separators) {
            EvalOutcome::Numeric(value) => {
                let output = self.settings.float_format.render(value);
                self.log(LogLevel::Debug, &format!("Result: {output}"));
                self.replace_range(&range, &output)
            }
            EvalOutcome::Unchanged(original) => {
                let expr = eval::preprocess(&original, self.settings.comma_separators);
                if original == expr {
                    self.log(
                        LogLevel::Debug,
                        "Evaluation returned the input; buffer untouched",
                    );
                } else {
                    self.log(
                        LogLevel::Debug,
                        "Evaluation failed; original text already in place",
                    );
                }
                self.host.leave_selection_mode()
            }
        }
    }

    fn run_format_number(&mut self, spec: Option<&str>) -> CalcResult<()> {
        let format = match spec {
            Some(spec) => spec.parse::<FloatFormat>()?,
            None => self.settings.float_format,
        };
        let range = self.selected_range()?;
        let text = self.selected_text(&range)?;
        let number = eval::preprocess(&text, self.settings.comma_separators);
        match number.parse::<f64>() {
            Ok(value) => self.replace_range(&range, &format.render(value)),
            Err(_) => {
                self.log(
                    LogLevel::Debug,
                    &format!("Not a number: {number:?}; buffer untouched"),
                );
                self.host.leave_selection_mode()
            }
        }
    }

    /// Resolve the current selection into a document-ordered range.
    fn selected_range(&mut self) -> CalcResult<Range> {
        let anchor = self.host.position(PositionMarker::SelectionAnchor)?;
        let cursor = self.host.position(PositionMarker::Cursor)?;
        self.log(
            LogLevel::Debug,
            &format!("anchor = {anchor:?}; cursor = {cursor:?}"),
        );
        if let Some(range) = Range::from_positions(anchor, cursor) {
            return Ok(range);
        }
        // Equal positions signal a visual-line selection; span the whole line.
        let lines = self.host.lines(anchor.buffer, anchor.line - 1, anchor.line)?;
        let line_len = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        Range::whole_line(anchor, line_len).ok_or(CalcError::RangeResolution { line: anchor.line })
    }

    /// Fetch and slice the text the range spans.
    fn selected_text(&mut self, range: &Range) -> CalcResult<String> {
        let lines = self
            .host
            .lines(range.start.buffer, range.start.line - 1, range.stop.line)?;
        let text = extract::selection_text(&lines, range);
        self.log(LogLevel::Debug, &format!("Selected text: {text:?}"));
        if text.is_empty() {
            return Err(CalcError::EmptySelection);
        }
        Ok(text)
    }

    /// Clear the original range, insert at its start, and leave selection
    /// mode.
    ///
    /// The clear is bounded by the original stop position and the insert
    /// happens at the original start position, regardless of how long the
    /// replacement is.
    fn replace_range(&mut self, range: &Range, replacement: &str) -> CalcResult<()> {
        let Range { start, stop } = *range;
        self.host.clear_range(
            start.buffer,
            start.line - 1,
            start.column - 1,
            stop.line - 1,
            stop.column,
        )?;
        self.host
            .insert_text(start.buffer, start.line - 1, start.column - 1, replacement)?;
        self.host.leave_selection_mode()
    }

    fn abort(&mut self, err: CalcError) {
        let level = match &err {
            CalcError::RangeResolution { .. } => LogLevel::Fatal,
            CalcError::EmptySelection => LogLevel::Info,
            _ => LogLevel::Error,
        };
        self.log(level, &format!("{err}; nothing replaced"));
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        logger::emit(
            &mut self.host,
            self.settings.log_level,
            self.settings.log_file.as_deref(),
            level,
            message,
        );
    }
}
