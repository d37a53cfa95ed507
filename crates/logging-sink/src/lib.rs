#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the single capability every datelog backend
//! implements, [`LineSink::append`], together with the backends shipped in the
//! workspace. The decision engine in the `logging` crate renders a complete
//! line before handing it to a sink, so sinks never see categories, dates or
//! call-site metadata.
//!
//! # Design
//!
//! - [`ConsoleSink`] streams lines into any [`std::io::Write`] implementor,
//!   standard error by default, honouring a [`LineMode`].
//! - [`CrashReportSink`] adapts an opaque [`CrashReporter`] (the crash-report
//!   SDK's "append log line" hook) to the sink interface.
//! - [`MemorySink`] keeps lines in order for inspection and draining.
//! - [`NullSink`] accepts and discards everything. It fills the crash-report
//!   slot until an embedding application wires a real reporter.
//! - `syslog::SyslogSink` (unix) writes to the platform log.
//! - `TracingSink` (feature `tracing`) forwards lines as `tracing` events.
//!
//! # Invariants
//!
//! - Sinks are `Send + Sync`; `append` takes `&self` so a single sink can be
//!   shared across threads behind an `Arc`.
//! - A sink reports failures through [`SinkError`] but never panics. Callers in
//!   the emission path swallow the error.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{ConsoleSink, LineMode, LineSink};
//!
//! let sink = ConsoleSink::with_line_mode(Vec::new(), LineMode::WithNewline);
//! sink.append("DLOG [main.rs:3] main - ready").unwrap();
//! sink.append("DLOG [main.rs:4] main - done").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 2);
//! ```

mod error;
mod line_mode;
mod sink;

#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;

pub use error::{CrashReportError, SinkError};
pub use line_mode::LineMode;
pub use sink::{
    ConsoleSink, CrashReportSink, CrashReporter, LineSink, MemorySink, NullSink,
};

#[cfg(feature = "tracing")]
pub use sink::{TRACING_TARGET, TracingSink};
