//! crates/logging/src/suppression.rs
//! Decides whether a record is emitted.
//!
//! Checks run in a fixed order:
//!
//! 1. the master switch,
//! 2. message present,
//! 3. date present,
//! 4. forced emission for the category (skips the remaining checks),
//! 5. record date parses,
//! 6. threshold parses,
//! 7. record date strictly after the threshold.
//!
//! Malformed dates fail closed.

use super::config::LoggerConfig;
use super::date::CreationDate;
use super::record::LogRecord;

/// Outcome of evaluating a record, with the reason it was dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The record is emitted.
    Emit,
    /// Logging is switched off.
    Disabled,
    /// The record has no message.
    MissingMessage,
    /// The record has no date.
    MissingDate,
    /// The record's date is not a `yyyy-MMM-dd` date.
    MalformedDate,
    /// The configured threshold is not a `yyyy-MMM-dd` date.
    MalformedThreshold,
    /// The record is dated on or before the threshold.
    BeforeThreshold,
}

impl Decision {
    /// Whether the record is emitted.
    #[must_use]
    pub const fn is_emit(self) -> bool {
        matches!(self, Self::Emit)
    }
}

/// Evaluates `record` against the live configuration.
pub fn evaluate(record: &LogRecord<'_>, config: &LoggerConfig) -> Decision {
    if !config.enabled() {
        return Decision::Disabled;
    }
    if record.message.is_none() {
        return Decision::MissingMessage;
    }
    let Some(date) = record.date else {
        return Decision::MissingDate;
    };
    if record.category.forces_emission() {
        return Decision::Emit;
    }

    let Ok(created) = CreationDate::parse(date) else {
        return Decision::MalformedDate;
    };
    let Ok(threshold) = config.with_suppress_before_date(CreationDate::parse) else {
        return Decision::MalformedThreshold;
    };

    if created > threshold {
        Decision::Emit
    } else {
        Decision::BeforeThreshold
    }
}

/// Whether `record` is emitted under the live configuration.
pub fn should_emit(record: &LogRecord<'_>, config: &LoggerConfig) -> bool {
    evaluate(record, config).is_emit()
}
