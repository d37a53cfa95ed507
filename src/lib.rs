#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `datelog` is a tagged, date-gated debug logger. Each logging call names a
//! category (which picks a glyph and color) and the date the call site was
//! written. Calls dated on or before a configurable threshold are dropped;
//! newer ones are formatted as
//! `PREFIX GLYPH [file:line] function - message` and sent to either the console
//! or a crash-report service.
//!
//! This crate re-exports the decision engine from [`logging`] and the sink
//! backends from [`logging_sink`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use datelog::sink::MemorySink;
//! use datelog::{Logger, LoggerConfig, SinkDispatcher, dlog_important};
//!
//! let config = Arc::new(LoggerConfig::default());
//! config.set_use_crash_report_sink(false);
//!
//! let console = Arc::new(MemorySink::new());
//! let logger = Logger::with_dispatcher(config, SinkDispatcher::new().with_console(console.clone()));
//!
//! dlog_important!(logger, "2016-Jul-28", "retrying in {}s", 5);
//! assert!(console.lines()[0].starts_with("DLOG 🟠 ["));
//! ```
//!
//! # Features
//!
//! - `crash-report`: route lines to the crash-report sink by default.
//! - `tracing`: the `DatelogLayer` tracing bridge and the `TracingSink` backend.
//! - `serde`: serialization for [`Category`] and [`LoggerSettings`].

pub use logging::*;

/// Sink capability and backends.
pub mod sink {
    pub use logging_sink::*;
}
