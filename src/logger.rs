//! Diagnostic levels and the log sink shared by every command.
//!
//! Diagnostics always reach the `log` facade; above the configured
//! threshold they are also echoed through the host, and when a log file is
//! configured they are appended there. File and echo writes are
//! fire-and-forget and never affect control flow.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::CalcError;
use crate::host::{EchoChannel, EditorHost};

/// Name used in log lines and as the `log` facade target.
pub const PLUGIN_NAME: &str = "bufcalc";

/// Severity levels, ordered. Level checks are plain ordinal comparisons on
/// the derived ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// The closed set of levels, in ascending severity.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Upper-case level name as it appears in log lines.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// The closest `log` facade level. The facade has no FATAL, so it maps
    /// to `Error`.
    fn facade_level(self) -> log::Level {
        match self {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error | LogLevel::Fatal => log::Level::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = CalcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CalcError::invalid_log_level(name))
    }
}

/// Emit one diagnostic.
pub fn emit<H: EditorHost>(
    host: &mut H,
    threshold: LogLevel,
    log_file: Option<&Path>,
    level: LogLevel,
    message: &str,
) {
    log::log!(target: PLUGIN_NAME, level.facade_level(), "{message}");
    if let Some(path) = log_file {
        let line = format_line(level, message);
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{line}"));
    }
    if level >= threshold {
        let channel = if level >= LogLevel::Warn {
            EchoChannel::Error
        } else {
            EchoChannel::Message
        };
        host.echo(channel, &format_line(level, message));
    }
}

/// One diagnostic line, without a trailing newline.
fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("[{level}] [{PLUGIN_NAME}] [{timestamp}]: {message}")
}
