//! Structured JSON logging to stdout/stderr.
//!
//! Each call writes exactly one JSON line. `debug`, `info` and `warn` go to
//! stdout, `error` goes to stderr. The line is rendered in full first and then
//! handed to a [`LineSink`] in one write, so concurrent callers never
//! interleave partial records.

#[cfg(unix)]
use std::fs::File;
use std::io::{self, Stderr, Stdout, Write};
#[cfg(unix)]
use std::os::fd::{AsFd, BorrowedFd};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::core::record::{Level, Stream, Value, render};
use crate::error::Result;

/// Destination that accepts whole lines.
pub trait LineSink {
    /// Write `line` (including its trailing newline) as one unit and flush.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

impl LineSink for Stdout {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut out = self.lock();
        out.flush()?;
        write_stdio(&mut out, line)
    }
}

impl LineSink for Stderr {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut err = self.lock();
        err.flush()?;
        write_stdio(&mut err, line)
    }
}

/// Write a line to a locked process stream.
///
/// std reports writes to a closed stdio descriptor (EBADF) as success, so the
/// line goes through a duplicate of the descriptor instead, where every error
/// is returned as is.
#[cfg(unix)]
fn write_stdio<L: Write + AsFd>(lock: &mut L, line: &[u8]) -> io::Result<()> {
    write_to_fd(lock.as_fd(), line)
}

#[cfg(not(unix))]
fn write_stdio<L: Write>(lock: &mut L, line: &[u8]) -> io::Result<()> {
    lock.write_all(line)?;
    lock.flush()
}

#[cfg(unix)]
fn write_to_fd(fd: BorrowedFd<'_>, line: &[u8]) -> io::Result<()> {
    let mut file = File::from(fd.try_clone_to_owned()?);
    file.write_all(line)
}

impl<W: Write> LineSink for Mutex<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)?;
        writer.flush()
    }
}

impl<S: LineSink + ?Sized> LineSink for &S {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S: LineSink + ?Sized> LineSink for Arc<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Logger writing records to a stdout-like and a stderr-like sink.
#[derive(Debug, Clone)]
pub struct Logger<O = Stdout, E = Stderr> {
    stdout: O,
    stderr: E,
}

impl Logger {
    /// Logger over the process streams.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O: LineSink, E: LineSink> Logger<O, E> {
    pub fn new(stdout: O, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    /// Emit one record at `level`. The timestamp is taken now.
    ///
    /// Fails with [`crate::Error::Io`] if the destination cannot be written.
    pub fn log(&self, level: Level, msg: &str, fields: &[(&str, Value)]) -> Result<()> {
        let mut line = render(level, msg, Utc::now(), fields);
        line.push('\n');
        match level.stream() {
            Stream::Stdout => self.stdout.write_line(line.as_bytes())?,
            Stream::Stderr => self.stderr.write_line(line.as_bytes())?,
        }
        Ok(())
    }

    pub fn debug(&self, msg: &str, fields: &[(&str, Value)]) -> Result<()> {
        self.log(Level::Debug, msg, fields)
    }

    pub fn info(&self, msg: &str, fields: &[(&str, Value)]) -> Result<()> {
        self.log(Level::Info, msg, fields)
    }

    pub fn warn(&self, msg: &str, fields: &[(&str, Value)]) -> Result<()> {
        self.log(Level::Warn, msg, fields)
    }

    /// Same as the others, but to the stderr sink.
    pub fn error(&self, msg: &str, fields: &[(&str, Value)]) -> Result<()> {
        self.log(Level::Error, msg, fields)
    }
}

/// Log a debug-level record to stdout.
pub fn debug(msg: &str, fields: &[(&str, Value)]) -> Result<()> {
    Logger::stdio().debug(msg, fields)
}

/// Log an info-level record to stdout.
pub fn info(msg: &str, fields: &[(&str, Value)]) -> Result<()> {
    Logger::stdio().info(msg, fields)
}

/// Log a warn-level record to stdout.
pub fn warn(msg: &str, fields: &[(&str, Value)]) -> Result<()> {
    Logger::stdio().warn(msg, fields)
}

/// Log an error-level record to stderr.
pub fn error(msg: &str, fields: &[(&str, Value)]) -> Result<()> {
    Logger::stdio().error(msg, fields)
}
