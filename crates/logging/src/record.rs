//! crates/logging/src/record.rs
//! Per-call inputs to the emission engine.

use super::category::Category;

/// Where a log call was written.
///
/// Usually built by [`call_site!`](crate::call_site), which fills in the
/// current file, line and enclosing function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Source file path as reported by `file!()`.
    pub file: &'static str,
    /// Name of the enclosing function.
    pub function: &'static str,
    /// Line number as reported by `line!()`.
    pub line: u32,
}

impl CallSite {
    /// Builds a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// One logging call: created, evaluated and dropped within the call.
///
/// Message and date are optional. A record without either is never emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Text to log.
    pub message: Option<&'a str>,
    /// When the call site was written, in `yyyy-MMM-dd` form.
    pub date: Option<&'a str>,
    /// Category chosen by the entry point.
    pub category: Category,
    /// Where the call was made.
    pub call_site: CallSite,
}

impl<'a> LogRecord<'a> {
    /// Assembles a record.
    #[must_use]
    pub const fn new(
        category: Category,
        message: Option<&'a str>,
        date: Option<&'a str>,
        call_site: CallSite,
    ) -> Self {
        Self {
            message,
            date,
            category,
            call_site,
        }
    }
}

/// Reduces a fully qualified function path, as produced by
/// `std::any::type_name` on a nested item, to the name of the function that
/// contains the call.
///
/// `app::net::connect::__site` becomes `connect`; closure segments are
/// skipped so a call inside a closure still reports its enclosing function.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function_name(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__site").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}
