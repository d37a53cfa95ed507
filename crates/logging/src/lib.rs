#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the decision engine of datelog: a debug-logging facility in
//! which every call carries the date its call site was written. Calls dated on
//! or before a configurable threshold are dropped, so old, already-reviewed
//! instrumentation goes quiet without being deleted, while new instrumentation
//! stays visible.
//!
//! # Design
//!
//! A logging call flows through four stages:
//!
//! 1. [`Category`] fixes the glyph and color of the line (the category
//!    registry).
//! 2. [`evaluate`] / [`should_emit`] apply the master switch, the presence
//!    checks and the date gate.
//! 3. [`format_line`] renders `PREFIX GLYPH [file:line] function - message`,
//!    or the ANSI colored variant.
//! 4. [`SinkDispatcher`] hands the line to either the console sink or the
//!    crash-report sink.
//!
//! [`Logger`] composes the stages behind one entry point per category, and the
//! [`dlog!`] family of macros captures the call site automatically. All
//! settings live in a shared [`LoggerConfig`] that can change at any time; each
//! call reads the live values.
//!
//! # Invariants
//!
//! - A record without a message or without a date is never emitted.
//! - Dated [`Category::Critical`] records skip the threshold comparison.
//! - Malformed dates suppress non-critical records.
//! - No error from the emission path reaches the caller.
//! - The verbose entry points ([`vlog!`], [`Logger::vlog`], ...) never emit;
//!   see [`VERBOSE_LOGGING_IMPLEMENTED`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{dlog, dlog_critical, Logger, LoggerConfig, SinkDispatcher};
//! use logging_sink::MemorySink;
//!
//! let config = Arc::new(LoggerConfig::default());
//! config.set_use_crash_report_sink(false);
//! config.apply_setting("suppress_before=2016-Jan-01").unwrap();
//!
//! let console = Arc::new(MemorySink::new());
//! let logger = Logger::with_dispatcher(
//!     Arc::clone(&config),
//!     SinkDispatcher::new().with_console(console.clone()),
//! );
//!
//! dlog!(logger, "2016-Jul-28", "cache holds {} entries", 42);
//! dlog!(logger, "2015-Mar-02", "reviewed long ago");
//! dlog_critical!(logger, "2015-Mar-02", "always shown");
//!
//! let lines = console.lines();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].contains("⚫"));
//! assert!(lines[1].contains("🔴"));
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the sink capability and its backends.

mod category;
mod config;
mod date;
mod dispatch;
mod facade;
mod format;
mod macros;
mod record;
mod suppression;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use category::{Category, DisplayTag, ParseCategoryError};
pub use config::{
    ConfigError, DEFAULT_SOURCE_PREFIX, DEFAULT_SUPPRESS_BEFORE_DATE,
    DEFAULT_USE_CRASH_REPORT_SINK, LoggerConfig, LoggerSettings,
};
pub use date::{CreationDate, DateParseError};
pub use dispatch::{SinkDispatcher, SinkRoute};
pub use facade::{Logger, VERBOSE_LOGGING_IMPLEMENTED};
pub use format::{file_name, format_line};
pub use record::{CallSite, LogRecord};
pub use suppression::{Decision, evaluate, should_emit};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{BRIDGE_TARGET, DatelogLayer, init_tracing, init_tracing_with_filter};

pub use logging_sink;

#[doc(hidden)]
pub use record::enclosing_function_name as __enclosing_function_name;
