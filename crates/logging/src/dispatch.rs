//! crates/logging/src/dispatch.rs
//! Routes formatted lines to the console or the crash-report sink.

use std::fmt;
use std::sync::Arc;

use logging_sink::{ConsoleSink, LineSink, NullSink};

use super::config::LoggerConfig;

/// Which sink a line is sent to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SinkRoute {
    /// The console (or platform log) sink.
    Console,
    /// The crash-report sink.
    CrashReport,
}

/// Holds the two sink slots and picks one per line.
///
/// The console slot defaults to standard error; the crash-report slot defaults
/// to a [`NullSink`] until a reporter is wired in. The slot is chosen on every
/// call from [`LoggerConfig::use_crash_report_sink`], so flipping the flag
/// reroutes the next line. Exactly one sink receives each line.
///
/// ```
/// use std::sync::Arc;
/// use logging::{LoggerConfig, SinkDispatcher};
/// use logging_sink::MemorySink;
///
/// let console = Arc::new(MemorySink::new());
/// let crash = Arc::new(MemorySink::new());
/// let dispatcher = SinkDispatcher::new()
///     .with_console(console.clone())
///     .with_crash_report(crash.clone());
///
/// let config = LoggerConfig::default();
/// config.set_use_crash_report_sink(false);
/// dispatcher.emit("to console", &config);
/// config.set_use_crash_report_sink(true);
/// dispatcher.emit("to crash report", &config);
///
/// assert_eq!(console.lines(), vec!["to console"]);
/// assert_eq!(crash.lines(), vec!["to crash report"]);
/// ```
#[derive(Clone)]
pub struct SinkDispatcher {
    console: Arc<dyn LineSink>,
    crash_report: Arc<dyn LineSink>,
}

impl SinkDispatcher {
    /// Console on standard error, crash reports discarded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            console: Arc::new(ConsoleSink::stderr()),
            crash_report: Arc::new(NullSink),
        }
    }

    /// Replaces the console sink.
    pub fn with_console(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.console = sink;
        self
    }

    /// Replaces the crash-report sink.
    pub fn with_crash_report(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.crash_report = sink;
        self
    }

    /// The sink the next line would go to.
    pub fn route(&self, config: &LoggerConfig) -> SinkRoute {
        if config.use_crash_report_sink() {
            SinkRoute::CrashReport
        } else {
            SinkRoute::Console
        }
    }

    /// Sends `line` to the selected sink.
    ///
    /// Sink failures are dropped here; nothing is retried and nothing is
    /// logged about the failure.
    pub fn emit(&self, line: &str, config: &LoggerConfig) {
        let sink = match self.route(config) {
            SinkRoute::Console => &self.console,
            SinkRoute::CrashReport => &self.crash_report,
        };
        let _ = sink.append(line);
    }
}

impl Default for SinkDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SinkDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkDispatcher").finish_non_exhaustive()
    }
}
