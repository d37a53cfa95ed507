use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use super::LineSink;
use crate::error::SinkError;
use crate::line_mode::LineMode;

/// Streaming sink that writes each line into an [`io::Write`] target.
///
/// The writer sits behind a mutex so concurrent callers never interleave the
/// bytes of two lines. Lines from different threads may still arrive in any
/// order. Every append is followed by a flush, keeping console output
/// visible even when the host process aborts shortly afterwards.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::{ConsoleSink, LineSink};
///
/// let sink = ConsoleSink::new(Vec::new());
/// sink.append("first")?;
/// sink.append("second")?;
///
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
/// # Ok::<(), logging_sink::SinkError>(())
/// ```
///
/// Write lines without a terminator:
///
/// ```
/// use logging_sink::{ConsoleSink, LineMode, LineSink};
///
/// let sink = ConsoleSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.append("ready")?;
///
/// assert_eq!(sink.into_inner(), b"ready".to_vec());
/// # Ok::<(), logging_sink::SinkError>(())
/// ```
pub struct ConsoleSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl ConsoleSink<io::Stderr> {
    /// Creates a sink over the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> ConsoleSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Runs `f` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl<W> Default for ConsoleSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for ConsoleSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}

impl<W> LineSink for ConsoleSink<W>
where
    W: Write + Send,
{
    fn append(&self, line: &str) -> Result<(), SinkError> {
        let mut writer = self.lock();
        writer.write_all(line.as_bytes())?;
        if self.line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
