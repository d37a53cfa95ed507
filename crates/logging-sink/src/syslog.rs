//! crates/logging-sink/src/syslog.rs
//!
//! Platform log backend.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate. Each appended line becomes one syslog(3) entry
//! under the configured facility and ident tag.

use std::ffi::CString;
use std::fmt;
use std::sync::OnceLock;

use crate::error::SinkError;
use crate::sink::LineSink;

/// Syslog facility codes matching the POSIX syslog(3) constants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// User-level messages (LOG_USER). Applications log here unless told otherwise.
    #[default]
    User = libc::LOG_USER,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Parses a facility name, case-insensitively.
    ///
    /// Returns `None` for unrecognised names.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("user"), Some(SyslogFacility::User));
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("kern"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the lowercase facility name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default ident attached to every syslog entry.
pub const DEFAULT_SYSLOG_TAG: &str = "datelog";

/// Syslog priority levels matching POSIX syslog(3) severity constants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    #[default]
    Debug = libc::LOG_DEBUG,
}

/// Facility, ident and priority used by a [`SyslogSink`].
///
/// ```
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility, SyslogPriority};
///
/// let config = SyslogConfig::new(SyslogFacility::Local5, "my-app");
/// assert_eq!(config.facility(), SyslogFacility::Local5);
/// assert_eq!(config.tag(), "my-app");
/// assert_eq!(config.priority(), SyslogPriority::Debug);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
    priority: SyslogPriority,
}

impl SyslogConfig {
    /// Creates a configuration that logs at [`SyslogPriority::Debug`].
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
            priority: SyslogPriority::default(),
        }
    }

    /// Overrides the priority attached to each line.
    pub fn with_priority(mut self, priority: SyslogPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the configured facility.
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured ident tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the priority attached to each line.
    pub const fn priority(&self) -> SyslogPriority {
        self.priority
    }

    /// Opens the syslog connection and returns a sink bound to it.
    ///
    /// The connection stays open until the sink is dropped. Only one sink
    /// should be open per process; syslog keeps a single global connection.
    pub fn open(&self) -> SyslogSink {
        // syslog(3) keeps the ident pointer, so it must live for the process.
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            CString::new(self.tag.as_str()).unwrap_or_else(|_| c"datelog".to_owned())
        });

        // SAFETY: the ident pointer is valid for the process lifetime because
        // it is stored in a static `OnceLock<CString>`.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
        }

        SyslogSink {
            priority: self.priority,
        }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_TAG)
    }
}

/// Sink writing each line to syslog(3).
///
/// Created by [`SyslogConfig::open`]. Dropping the sink calls `closelog(3)`.
///
/// ```no_run
/// use logging_sink::LineSink;
/// use logging_sink::syslog::SyslogConfig;
///
/// let sink = SyslogConfig::default().open();
/// sink.append("DLOG [main.rs:9] main - started").ok();
/// ```
#[derive(Debug)]
pub struct SyslogSink {
    priority: SyslogPriority,
}

impl SyslogSink {
    /// Returns the priority attached to each line.
    pub const fn priority(&self) -> SyslogPriority {
        self.priority
    }
}

impl LineSink for SyslogSink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        let c_line =
            CString::new(line).map_err(|_| SinkError::Rejected("line contains a NUL byte"))?;

        // `%s` keeps `%` sequences in the line from being read as directives.
        // SAFETY: openlog ran in `SyslogConfig::open`; both pointers are valid
        // NUL-terminated strings for the duration of the call.
        unsafe {
            libc::syslog(
                self.priority as libc::c_int,
                c"%s".as_ptr(),
                c_line.as_ptr(),
            );
        }
        Ok(())
    }
}

impl Drop for SyslogSink {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond a prior openlog, which
        // the sink's construction guarantees.
        unsafe {
            libc::closelog();
        }
    }
}
