//! crates/logging/src/config.rs
//! Live logger configuration shared between the embedding application and
//! every logging call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use super::date::{CreationDate, DateParseError};

/// Threshold used until the application sets its own. Far enough in the past
/// that nearly every dated call site is emitted.
pub const DEFAULT_SUPPRESS_BEFORE_DATE: &str = "2000-Jan-01";

/// Prefix placed at the start of every plain line so logs are easy to grep.
pub const DEFAULT_SOURCE_PREFIX: &str = "DLOG";

/// Whether lines go to the crash-report sink when no one says otherwise.
pub const DEFAULT_USE_CRASH_REPORT_SINK: bool = cfg!(feature = "crash-report");

/// Process-lifetime logger configuration.
///
/// Every field can be changed through `&self` at any time, from any thread.
/// Logging calls read the live values on each call, so a change applies to
/// the next call. Flags are atomics and text fields sit behind `RwLock`s, so a
/// reader never observes a torn value. No ordering is promised between a
/// setter on one thread and a log call on another.
///
/// Share one instance through an `Arc`:
///
/// ```
/// use std::sync::Arc;
/// use logging::LoggerConfig;
///
/// let config = Arc::new(LoggerConfig::default());
/// config.set_suppress_before_date("2016-Jan-01");
/// assert!(config.enabled());
/// assert_eq!(config.suppress_before_date(), "2016-Jan-01");
/// ```
#[derive(Debug)]
pub struct LoggerConfig {
    enabled: AtomicBool,
    suppress_before_date: RwLock<String>,
    use_color_output: AtomicBool,
    use_crash_report_sink: AtomicBool,
    source_prefix: RwLock<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::from_settings(LoggerSettings::default())
    }
}

impl LoggerConfig {
    /// Builds a configuration holding the given values.
    #[must_use]
    pub fn from_settings(settings: LoggerSettings) -> Self {
        Self {
            enabled: AtomicBool::new(settings.enabled),
            suppress_before_date: RwLock::new(settings.suppress_before_date),
            use_color_output: AtomicBool::new(settings.use_color_output),
            use_crash_report_sink: AtomicBool::new(settings.use_crash_report_sink),
            source_prefix: RwLock::new(settings.source_prefix),
        }
    }

    /// Copies the current values into an owned [`LoggerSettings`].
    #[must_use]
    pub fn settings(&self) -> LoggerSettings {
        LoggerSettings {
            enabled: self.enabled(),
            suppress_before_date: self.suppress_before_date(),
            use_color_output: self.use_color_output(),
            use_crash_report_sink: self.use_crash_report_sink(),
            source_prefix: self.source_prefix(),
        }
    }

    /// Replaces every value with those in `settings`.
    ///
    /// Fields are stored one at a time; a concurrent log call may observe a
    /// mix of old and new fields, but never a torn field.
    pub fn apply(&self, settings: LoggerSettings) {
        self.set_enabled(settings.enabled);
        self.set_suppress_before_date(settings.suppress_before_date);
        self.set_use_color_output(settings.use_color_output);
        self.set_use_crash_report_sink(settings.use_crash_report_sink);
        self.set_source_prefix(settings.source_prefix);
    }

    /// Master switch; when false nothing is emitted, not even critical lines.
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Sets the master switch.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Raw threshold text. Records dated on or before it are suppressed.
    pub fn suppress_before_date(&self) -> String {
        self.suppress_before_date
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs `f` on the threshold text without cloning it.
    pub fn with_suppress_before_date<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self
            .suppress_before_date
            .read()
            .unwrap_or_else(PoisonError::into_inner))
    }

    /// Stores new threshold text as given.
    ///
    /// The text is not validated; a malformed threshold suppresses every
    /// record that is not forced. Use [`set_suppress_before`](Self::set_suppress_before)
    /// or [`apply_setting`](Self::apply_setting) to validate first.
    pub fn set_suppress_before_date(&self, date: impl Into<String>) {
        *self
            .suppress_before_date
            .write()
            .unwrap_or_else(PoisonError::into_inner) = date.into();
    }

    /// Stores a validated threshold.
    pub fn set_suppress_before(&self, date: CreationDate) {
        self.set_suppress_before_date(date.to_string());
    }

    /// Whether lines are wrapped in ANSI color sequences instead of carrying
    /// a glyph.
    pub fn use_color_output(&self) -> bool {
        self.use_color_output.load(Ordering::Acquire)
    }

    /// Switches color output on or off.
    pub fn set_use_color_output(&self, enabled: bool) {
        self.use_color_output.store(enabled, Ordering::Release);
    }

    /// Whether lines go to the crash-report sink rather than the console.
    pub fn use_crash_report_sink(&self) -> bool {
        self.use_crash_report_sink.load(Ordering::Acquire)
    }

    /// Selects the crash-report sink (`true`) or the console sink (`false`).
    pub fn set_use_crash_report_sink(&self, enabled: bool) {
        self.use_crash_report_sink.store(enabled, Ordering::Release);
    }

    /// Text placed at the start of each line; empty means no prefix.
    pub fn source_prefix(&self) -> String {
        self.source_prefix
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs `f` on the prefix without cloning it.
    pub fn with_source_prefix<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self
            .source_prefix
            .read()
            .unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the prefix.
    pub fn set_source_prefix(&self, prefix: impl Into<String>) {
        *self
            .source_prefix
            .write()
            .unwrap_or_else(PoisonError::into_inner) = prefix.into();
    }

    /// Applies a single `key=value` token, e.g. `"enabled=false"` or
    /// `"suppress_before=2016-Jan-01"`.
    ///
    /// Recognised keys: `enabled`, `suppress_before`, `color`,
    /// `crash_report`, `prefix`. Booleans accept `true/false`, `1/0`,
    /// `yes/no` and `on/off`. Threshold values must parse as dates. Nothing is
    /// changed when the token is rejected.
    pub fn apply_setting(&self, token: &str) -> Result<(), ConfigError> {
        let (key, value) = parse_setting_token(token)?;

        match key {
            "enabled" => self.set_enabled(parse_bool(key, value)?),
            "suppress_before" => {
                let date = CreationDate::parse(value).map_err(ConfigError::InvalidDate)?;
                self.set_suppress_before(date);
            }
            "color" => self.set_use_color_output(parse_bool(key, value)?),
            "crash_report" => self.set_use_crash_report_sink(parse_bool(key, value)?),
            "prefix" => self.set_source_prefix(value),
            _ => return Err(ConfigError::UnknownKey(key.to_owned())),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "datelog::config", key, value, "applied logger setting");

        Ok(())
    }

    /// Applies tokens in order, stopping at the first rejected one.
    pub fn apply_settings<'a, I>(&self, tokens: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .try_for_each(|token| self.apply_setting(token))
    }
}

/// Owned snapshot of every [`LoggerConfig`] value.
///
/// Useful for building a configuration from a file or for inspecting the
/// live one. With the `serde` feature, missing fields fall back to their
/// defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerSettings {
    /// Master switch.
    pub enabled: bool,
    /// Threshold text in `yyyy-MMM-dd` form.
    pub suppress_before_date: String,
    /// Wrap lines in ANSI colors instead of prefixing a glyph.
    pub use_color_output: bool,
    /// Route lines to the crash-report sink instead of the console.
    pub use_crash_report_sink: bool,
    /// Text placed at the start of each line.
    pub source_prefix: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            suppress_before_date: DEFAULT_SUPPRESS_BEFORE_DATE.to_owned(),
            use_color_output: false,
            use_crash_report_sink: DEFAULT_USE_CRASH_REPORT_SINK,
            source_prefix: DEFAULT_SOURCE_PREFIX.to_owned(),
        }
    }
}

/// Error returned when a configuration token is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token was empty or whitespace.
    #[error("empty logger setting")]
    Empty,
    /// The token had no `=` separator.
    #[error("logger setting {0:?} is not of the form key=value")]
    MissingValue(String),
    /// The key names no setting.
    #[error("unknown logger setting: {0}")]
    UnknownKey(String),
    /// A boolean setting received something other than a boolean.
    #[error("invalid boolean {value:?} for logger setting {key}")]
    InvalidBool {
        /// Setting name.
        key: String,
        /// Rejected value.
        value: String,
    },
    /// The threshold value is not a `yyyy-MMM-dd` date.
    #[error(transparent)]
    InvalidDate(DateParseError),
}

/// Splits `"key=value"` into trimmed parts.
fn parse_setting_token(token: &str) -> Result<(&str, &str), ConfigError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ConfigError::Empty);
    }

    match token.split_once('=') {
        Some((key, value)) => Ok((key.trim(), value.trim())),
        None => Err(ConfigError::MissingValue(token.to_owned())),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
