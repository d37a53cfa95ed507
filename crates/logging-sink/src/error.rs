//! crates/logging-sink/src/error.rs
//! Error types reported by sink backends.

use std::io;
use thiserror::Error;

/// Failure reported by a [`LineSink`](crate::LineSink) backend.
///
/// The emission path discards these values; they exist so sinks can be tested
/// and composed outside the facade.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
    /// The backend is not reachable (for example a crash reporter that has not
    /// finished initialising).
    #[error("log backend unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the line (for example an embedded NUL byte that the
    /// platform log cannot carry).
    #[error("log line rejected: {0}")]
    Rejected(&'static str),
}

/// Failure reported by a [`CrashReporter`](crate::CrashReporter).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CrashReportError {
    /// The reporter SDK has not been started or was shut down.
    #[error("crash reporter is not running")]
    NotRunning,
    /// The reporter SDK returned an error of its own.
    #[error("crash reporter failed: {0}")]
    Backend(String),
}

impl From<CrashReportError> for SinkError {
    fn from(error: CrashReportError) -> Self {
        Self::Unavailable(error.to_string())
    }
}
