//! crates/logging/src/facade.rs
//! Per-category entry points tying the policy, formatter and dispatcher
//! together.

use std::sync::Arc;

use super::category::Category;
use super::config::LoggerConfig;
use super::dispatch::SinkDispatcher;
use super::format::format_line;
use super::record::{CallSite, LogRecord};
use super::suppression::should_emit;

/// Whether the verbose entry points produce output.
///
/// The verbose family ([`Logger::verbose`], [`Logger::vlog`] and friends, and
/// the `vlog*!` macros) is a placeholder. Every call is a no-op until a
/// verbose mode is defined.
pub const VERBOSE_LOGGING_IMPLEMENTED: bool = false;

/// Front door of the logging facility.
///
/// A `Logger` shares its [`LoggerConfig`] through an [`Arc`], so settings
/// changed through [`Logger::config`] (or any other handle) affect the next
/// call. Entry points never return errors and never panic on sink failures.
///
/// ```
/// use std::sync::Arc;
/// use logging::{CallSite, Logger, LoggerConfig, SinkDispatcher};
/// use logging_sink::MemorySink;
///
/// let config = Arc::new(LoggerConfig::default());
/// config.set_use_crash_report_sink(false);
/// config.set_suppress_before_date("2016-Jan-01");
///
/// let console = Arc::new(MemorySink::new());
/// let logger = Logger::with_dispatcher(
///     config,
///     SinkDispatcher::new().with_console(console.clone()),
/// );
///
/// let site = CallSite::new("/a/b/Widget.ext", "refresh", 42);
/// logger.log(Some("data 42"), Some("2016-Jul-28"), site);
/// logger.log(Some("stale"), Some("2015-Jul-28"), site);
///
/// assert_eq!(console.lines(), vec!["DLOG ⚫ [Widget.ext:42] refresh - data 42"]);
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    config: Arc<LoggerConfig>,
    dispatcher: SinkDispatcher,
}

impl Logger {
    /// Creates a logger with the default sinks.
    #[must_use]
    pub fn new(config: Arc<LoggerConfig>) -> Self {
        Self::with_dispatcher(config, SinkDispatcher::new())
    }

    /// Creates a logger with explicit sinks.
    #[must_use]
    pub const fn with_dispatcher(config: Arc<LoggerConfig>, dispatcher: SinkDispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// The shared configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<LoggerConfig> {
        &self.config
    }

    /// The sinks lines are routed to.
    #[must_use]
    pub const fn dispatcher(&self) -> &SinkDispatcher {
        &self.dispatcher
    }

    /// Evaluates one call and, when it passes the date gate, formats and
    /// routes the line.
    pub fn emit(
        &self,
        category: Category,
        message: Option<&str>,
        date: Option<&str>,
        call_site: CallSite,
    ) {
        let record = LogRecord::new(category, message, date, call_site);
        if !should_emit(&record, &self.config) {
            return;
        }
        let line = format_line(&record, category.tag(), &self.config);
        self.dispatcher.emit(&line, &self.config);
    }

    /// Logs in the default category.
    pub fn log(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::Default, message, date, call_site);
    }

    /// Logs a critical record. Dated critical records skip the threshold.
    pub fn critical(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::Critical, message, date, call_site);
    }

    /// Logs an important record.
    pub fn important(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::Important, message, date, call_site);
    }

    /// Logs a highlighted record.
    pub fn highlighted(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::Highlighted, message, date, call_site);
    }

    /// Logs a reviewed record.
    pub fn reviewed(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::Reviewed, message, date, call_site);
    }

    /// Logs a valuable record.
    pub fn valuable(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::Valuable, message, date, call_site);
    }

    /// Logs a record still awaiting review.
    pub fn to_be_reviewed(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::ToBeReviewed, message, date, call_site);
    }

    /// Logs a low-importance record.
    pub fn not_important(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.emit(Category::NotImportant, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::emit`]. Does nothing.
    #[allow(clippy::unused_self)]
    pub fn verbose(
        &self,
        category: Category,
        message: Option<&str>,
        date: Option<&str>,
        call_site: CallSite,
    ) {
        let _ = (category, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::log`]. Does nothing.
    pub fn vlog(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.verbose(Category::Default, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::critical`]. Does nothing.
    pub fn vlog_critical(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.verbose(Category::Critical, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::important`]. Does nothing.
    pub fn vlog_important(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.verbose(Category::Important, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::highlighted`]. Does nothing.
    pub fn vlog_highlighted(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.verbose(Category::Highlighted, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::reviewed`]. Does nothing.
    pub fn vlog_reviewed(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.verbose(Category::Reviewed, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::valuable`]. Does nothing.
    pub fn vlog_valuable(&self, message: Option<&str>, date: Option<&str>, call_site: CallSite) {
        self.verbose(Category::Valuable, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::to_be_reviewed`]. Does nothing.
    pub fn vlog_to_be_reviewed(
        &self,
        message: Option<&str>,
        date: Option<&str>,
        call_site: CallSite,
    ) {
        self.verbose(Category::ToBeReviewed, message, date, call_site);
    }

    /// Verbose counterpart of [`Logger::not_important`]. Does nothing.
    pub fn vlog_not_important(
        &self,
        message: Option<&str>,
        date: Option<&str>,
        call_site: CallSite,
    ) {
        self.verbose(Category::NotImportant, message, date, call_site);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Arc::new(LoggerConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::MemorySink;

    const SITE: CallSite = CallSite::new("/a/b/Widget.ext", "refresh", 42);

    fn logger() -> (Logger, Arc<MemorySink>, Arc<MemorySink>) {
        let config = Arc::new(LoggerConfig::default());
        config.set_use_crash_report_sink(false);
        config.set_suppress_before_date("2016-Jan-01");
        let console = Arc::new(MemorySink::new());
        let crash = Arc::new(MemorySink::new());
        let dispatcher = SinkDispatcher::new()
            .with_console(console.clone())
            .with_crash_report(crash.clone());
        (Logger::with_dispatcher(config, dispatcher), console, crash)
    }

    #[test]
    fn default_entry_point_emits_formatted_line() {
        let (logger, console, _) = logger();
        logger.log(Some("data 42"), Some("2016-Jul-28"), SITE);
        assert_eq!(
            console.lines(),
            vec!["DLOG ⚫ [Widget.ext:42] refresh - data 42"]
        );
    }

    #[test]
    fn each_entry_point_uses_its_category_glyph() {
        let (logger, console, _) = logger();
        let calls: [(fn(&Logger, Option<&str>, Option<&str>, CallSite), Category); 8] = [
            (Logger::log, Category::Default),
            (Logger::critical, Category::Critical),
            (Logger::important, Category::Important),
            (Logger::highlighted, Category::Highlighted),
            (Logger::reviewed, Category::Reviewed),
            (Logger::valuable, Category::Valuable),
            (Logger::to_be_reviewed, Category::ToBeReviewed),
            (Logger::not_important, Category::NotImportant),
        ];

        for (call, category) in calls {
            call(&logger, Some("m"), Some("2016-Jul-28"), SITE);
            let lines = console.drain();
            assert_eq!(lines.len(), 1, "{category:?}");
            assert!(lines[0].contains(category.tag().glyph), "{category:?}");
        }
    }

    #[test]
    fn old_records_are_dropped_but_critical_passes() {
        let (logger, console, _) = logger();
        logger.important(Some("old"), Some("2015-Dec-31"), SITE);
        assert!(console.is_empty());

        logger.critical(Some("boom"), Some("2015-Dec-31"), SITE);
        assert_eq!(console.lines(), vec!["DLOG 🔴 [Widget.ext:42] refresh - boom"]);
    }

    #[test]
    fn crash_report_flag_reroutes_output() {
        let (logger, console, crash) = logger();
        logger.config().set_use_crash_report_sink(true);
        logger.log(Some("x"), Some("2016-Jul-28"), SITE);
        assert!(console.is_empty());
        assert_eq!(crash.len(), 1);
    }

    #[test]
    fn config_changes_take_effect_on_next_call() {
        let (logger, console, _) = logger();
        logger.config().set_enabled(false);
        logger.log(Some("x"), Some("2016-Jul-28"), SITE);
        assert!(console.is_empty());

        logger.config().set_enabled(true);
        logger.log(Some("x"), Some("2016-Jul-28"), SITE);
        assert_eq!(console.len(), 1);
    }

    #[test]
    fn verbose_family_never_emits() {
        let (logger, console, crash) = logger();
        for category in Category::ALL {
            logger.verbose(category, Some("m"), Some("2020-Jan-01"), SITE);
        }
        logger.vlog(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_critical(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_important(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_highlighted(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_reviewed(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_valuable(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_to_be_reviewed(Some("m"), Some("2020-Jan-01"), SITE);
        logger.vlog_not_important(Some("m"), Some("2020-Jan-01"), SITE);

        assert!(!VERBOSE_LOGGING_IMPLEMENTED);
        assert!(console.is_empty());
        assert!(crash.is_empty());
    }
}
