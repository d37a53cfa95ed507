//! crates/logging-sink/src/sink/mod.rs
//! The line sink capability and its backends.

use std::sync::Arc;

use crate::error::SinkError;

mod console;
mod crash_report;
mod memory;
#[cfg(feature = "tracing")]
mod tracing_sink;

pub use console::ConsoleSink;
pub use crash_report::{CrashReportSink, CrashReporter};
pub use memory::MemorySink;
#[cfg(feature = "tracing")]
pub use tracing_sink::{TRACING_TARGET, TracingSink};

/// Destination for fully rendered log lines.
///
/// Implementors receive one line per call, without a trailing newline. The
/// method takes `&self` so that one sink can serve every thread in the
/// process; implementors synchronise internally.
pub trait LineSink: Send + Sync {
    /// Appends a single line to the backend.
    fn append(&self, line: &str) -> Result<(), SinkError>;
}

impl<S> LineSink for Arc<S>
where
    S: LineSink + ?Sized,
{
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}

impl<S> LineSink for Box<S>
where
    S: LineSink + ?Sized,
{
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}

impl<S> LineSink for &S
where
    S: LineSink + ?Sized,
{
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}

/// Sink that accepts every line and keeps none of them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl LineSink for NullSink {
    fn append(&self, _line: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
