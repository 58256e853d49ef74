//! Append-only outcome log.

use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Timestamp layout of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the outcome log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub message: String,
}

/// Renders as `[YYYY-MM-DD HH:MM:SS] LEVEL: message`.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Line-oriented, append-only log of per-customer outcomes.
///
/// Every entry is written and flushed immediately, and mirrored to the
/// `log` facade so it also shows up in diagnostic output.
pub struct OutcomeLog<W = File> {
    sink: W,
    clock: fn() -> NaiveDateTime,
}

impl OutcomeLog<File> {
    /// Open `path` for appending, creating it if missing. Existing content
    /// is never truncated.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> OutcomeLog<W> {
    /// Log into an arbitrary writer, stamped with local time.
    pub fn from_writer(sink: W) -> Self {
        Self {
            sink,
            clock: local_now,
        }
    }

    /// Replace the clock used to stamp entries.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Append one entry and flush it.
    pub fn append(&mut self, level: LogLevel, message: impl Into<String>) -> io::Result<LogEntry> {
        let entry = LogEntry {
            timestamp: (self.clock)(),
            level,
            message: message.into(),
        };
        match level {
            LogLevel::Error => log::error!("{}", entry.message),
            LogLevel::Info | LogLevel::Success => log::info!("{}", entry.message),
        }
        writeln!(self.sink, "{entry}")?;
        self.sink.flush()?;
        Ok(entry)
    }

    pub fn info(&mut self, message: impl Into<String>) -> io::Result<LogEntry> {
        self.append(LogLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> io::Result<LogEntry> {
        self.append(LogLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> io::Result<LogEntry> {
        self.append(LogLevel::Error, message)
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
