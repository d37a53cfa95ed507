//! crates/logging/src/macros.rs
//! Call-site capturing macros over [`Logger`](crate::Logger).
//!
//! Every `dlog*!` macro takes the logger, the date the call was written and a
//! format string with arguments:
//!
//! ```
//! use std::sync::Arc;
//! use logging::{dlog, dlog_critical, Logger, LoggerConfig, SinkDispatcher};
//! use logging_sink::MemorySink;
//!
//! let config = Arc::new(LoggerConfig::default());
//! config.set_use_crash_report_sink(false);
//! let console = Arc::new(MemorySink::new());
//! let logger = Logger::with_dispatcher(config, SinkDispatcher::new().with_console(console.clone()));
//!
//! let answer = 42;
//! dlog!(logger, "2016-Jul-28", "data {answer}");
//! dlog_critical!(logger, "1999-Jan-01", "still shown");
//!
//! let lines = console.lines();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].ends_with("- data 42"));
//! ```
//!
//! The message is formatted only when logging is enabled.

/// Captures the current file, line and enclosing function as a
/// [`CallSite`](crate::CallSite).
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __site() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(
            ::core::file!(),
            $crate::__enclosing_function_name(__type_name_of(__site)),
            ::core::line!(),
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dlog {
    ($logger:expr, $category:expr, $date:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        if logger.config().enabled() {
            let message = ::std::format!($($arg)+);
            logger.emit(
                $category,
                ::core::option::Option::Some(message.as_str()),
                ::core::option::Option::Some($date),
                $crate::call_site!(),
            );
        }
    }};
}

/// Logs in the default category.
#[macro_export]
macro_rules! dlog {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::Default, $date, $($arg)+)
    };
}

/// Logs a critical record.
#[macro_export]
macro_rules! dlog_critical {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::Critical, $date, $($arg)+)
    };
}

/// Logs an important record.
#[macro_export]
macro_rules! dlog_important {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::Important, $date, $($arg)+)
    };
}

/// Logs a highlighted record.
#[macro_export]
macro_rules! dlog_highlighted {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::Highlighted, $date, $($arg)+)
    };
}

/// Logs a reviewed record.
#[macro_export]
macro_rules! dlog_reviewed {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::Reviewed, $date, $($arg)+)
    };
}

/// Logs a valuable record.
#[macro_export]
macro_rules! dlog_valuable {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::Valuable, $date, $($arg)+)
    };
}

/// Logs a record still awaiting review.
#[macro_export]
macro_rules! dlog_to_be_reviewed {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::ToBeReviewed, $date, $($arg)+)
    };
}

/// Logs a low-importance record.
#[macro_export]
macro_rules! dlog_not_important {
    ($logger:expr, $date:expr, $($arg:tt)+) => {
        $crate::__dlog!($logger, $crate::Category::NotImportant, $date, $($arg)+)
    };
}

// Arguments are type-checked but never formatted.
#[doc(hidden)]
#[macro_export]
macro_rules! __vlog {
    ($logger:expr, $date:expr, $($arg:tt)+) => {{
        let _: &$crate::Logger = &$logger;
        if false {
            let _: &str = $date;
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

/// Verbose counterpart of [`dlog!`]. Expands to nothing observable.
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_critical!`]. Expands to nothing observable.
#[macro_export]
macro_rules! vlog_critical {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_important!`]. Expands to nothing observable.
#[macro_export]
macro_rules! vlog_important {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_highlighted!`]. Expands to nothing observable.
#[macro_export]
macro_rules! vlog_highlighted {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_reviewed!`]. Expands to nothing observable.
#[macro_export]
macro_rules! vlog_reviewed {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_valuable!`]. Expands to nothing observable.
#[macro_export]
macro_rules! vlog_valuable {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_to_be_reviewed!`]. Expands to nothing
/// observable.
#[macro_export]
macro_rules! vlog_to_be_reviewed {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}

/// Verbose counterpart of [`dlog_not_important!`]. Expands to nothing
/// observable.
#[macro_export]
macro_rules! vlog_not_important {
    ($($arg:tt)+) => {
        $crate::__vlog!($($arg)+)
    };
}
