//! crates/logging/src/date.rs
//! Calendar dates in the `yyyy-MMM-dd` form used by call sites and the
//! suppression threshold.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use time::Date;
use time::macros::format_description;

/// Error returned when text is not a `yyyy-MMM-dd` date.
#[derive(Debug, Error)]
#[error("invalid log date {input:?}, expected yyyy-MMM-dd (e.g. 2016-Jul-28)")]
pub struct DateParseError {
    input: String,
    #[source]
    source: time::error::Parse,
}

impl DateParseError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// The date a log call site was written, or the suppression threshold.
///
/// Only the calendar day matters; there is no time-of-day component, so two
/// values on the same day compare equal.
///
/// ```
/// use logging::CreationDate;
///
/// let written: CreationDate = "2016-Jul-28".parse()?;
/// let threshold: CreationDate = "2016-jan-1".parse()?;
/// assert!(written > threshold);
/// assert_eq!(threshold.to_string(), "2016-Jan-01");
/// # Ok::<(), logging::DateParseError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreationDate(Date);

impl CreationDate {
    /// Wraps a [`time::Date`].
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Parses `yyyy-MMM-dd`. The month abbreviation is English and matched
    /// without regard to case; the day may omit its leading zero.
    pub fn parse(text: &str) -> Result<Self, DateParseError> {
        let trimmed = text.trim();
        Date::parse(
            trimmed,
            format_description!("[year]-[month repr:short case_sensitive:false]-[day padding:none]"),
        )
        .map(Self)
        .map_err(|source| DateParseError {
            input: trimmed.to_owned(),
            source,
        })
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn as_date(self) -> Date {
        self.0
    }

    /// The following calendar day, or `None` at the end of the supported range.
    #[must_use]
    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// The preceding calendar day, or `None` at the start of the supported range.
    #[must_use]
    pub fn previous_day(self) -> Option<Self> {
        self.0.previous_day().map(Self)
    }
}

impl From<Date> for CreationDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl FromStr for CreationDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CreationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .format(format_description!("[year]-[month repr:short]-[day]"))
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> CreationDate {
        CreationDate::new(Date::from_calendar_date(year, month, day).expect("valid date"))
    }

    #[test]
    fn parses_canonical_form() {
        assert_eq!(
            "2016-Jul-28".parse::<CreationDate>().expect("valid"),
            date(2016, Month::July, 28)
        );
    }

    #[test]
    fn month_is_case_insensitive() {
        let expected = date(2000, Month::January, 1);
        for text in ["2000-Jan-01", "2000-jan-01", "2000-JAN-01"] {
            assert_eq!(CreationDate::parse(text).expect(text), expected);
        }
    }

    #[test]
    fn day_may_omit_leading_zero() {
        assert_eq!(
            CreationDate::parse("2016-Aug-3").expect("valid"),
            date(2016, Month::August, 3)
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            CreationDate::parse("  2016-Jul-28\n").expect("valid"),
            date(2016, Month::July, 28)
        );
    }

    #[test]
    fn rejects_other_layouts() {
        for text in [
            "",
            "2016-07-28",
            "28-Jul-2016",
            "2016/Jul/28",
            "2016-July-28",
            "2016-Jul-32",
            "2015-Feb-29",
            "yesterday",
        ] {
            let error = CreationDate::parse(text).expect_err(text);
            assert_eq!(error.input(), text.trim());
        }
    }

    #[test]
    fn error_message_names_expected_format() {
        let error = CreationDate::parse("soon").expect_err("invalid");
        let message = error.to_string();
        assert!(message.contains("\"soon\""));
        assert!(message.contains("yyyy-MMM-dd"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn display_uses_canonical_form() {
        assert_eq!(date(2016, Month::July, 8).to_string(), "2016-Jul-08");
    }

    #[test]
    fn ordering_follows_the_calendar() {
        let earlier = date(2016, Month::January, 31);
        let later = date(2016, Month::February, 1);
        assert!(later > earlier);
        assert_eq!(earlier.next_day(), Some(later));
        assert_eq!(later.previous_day(), Some(earlier));
    }
}
