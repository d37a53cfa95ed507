//! crates/logging-sink/src/sink/tracing_sink.rs
//! Forwards rendered lines to the `tracing` ecosystem.

use super::LineSink;
use crate::error::SinkError;

/// Target attached to every event emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "datelog::line";

/// Sink that re-emits each line as a `tracing` debug event.
///
/// Lines arrive already formatted, so the event carries the whole line in its
/// `message` field. Subscribers decide where the event ends up.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        tracing::debug!(target: "datelog::line", "{line}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_succeeds_without_subscriber() {
        assert!(TracingSink.append("no subscriber installed").is_ok());
    }

    #[test]
    fn target_is_namespaced() {
        assert!(TRACING_TARGET.starts_with("datelog::"));
    }
}
