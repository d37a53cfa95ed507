use std::fmt;

use super::LineSink;
use crate::error::{CrashReportError, SinkError};

/// The crash-report SDK's custom log hook.
///
/// Crash reporters attach recent log lines to the next crash report they
/// upload. Implementations wrap whatever the SDK exposes; the trait only
/// needs the single "append this line" capability.
pub trait CrashReporter: Send + Sync {
    /// Appends `line` to the log that accompanies the next crash report.
    fn append_log(&self, line: &str) -> Result<(), CrashReportError>;
}

impl<F> CrashReporter for F
where
    F: Fn(&str) -> Result<(), CrashReportError> + Send + Sync,
{
    fn append_log(&self, line: &str) -> Result<(), CrashReportError> {
        self(line)
    }
}

/// Adapts a [`CrashReporter`] to the [`LineSink`] interface.
///
/// Reporter failures are converted into [`SinkError::Unavailable`].
///
/// # Examples
///
/// ```
/// use logging_sink::{CrashReportError, CrashReportSink, LineSink};
///
/// let sink = CrashReportSink::new(|_line: &str| -> Result<(), CrashReportError> {
///     Err(CrashReportError::NotRunning)
/// });
/// assert!(sink.append("dropped").is_err());
/// ```
pub struct CrashReportSink<R> {
    reporter: R,
}

impl<R> CrashReportSink<R> {
    /// Wraps `reporter`.
    #[must_use]
    pub const fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Borrows the wrapped reporter.
    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consumes the sink and returns the wrapped reporter.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reporter
    }
}

impl<R> fmt::Debug for CrashReportSink<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrashReportSink").finish_non_exhaustive()
    }
}

impl<R> LineSink for CrashReportSink<R>
where
    R: CrashReporter,
{
    fn append(&self, line: &str) -> Result<(), SinkError> {
        self.reporter.append_log(line).map_err(SinkError::from)
    }
}
