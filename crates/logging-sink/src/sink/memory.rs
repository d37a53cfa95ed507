use std::sync::{Mutex, MutexGuard};

use super::LineSink;
use crate::error::SinkError;

/// Sink that records every line in arrival order.
///
/// Useful for embedding applications that forward log lines elsewhere in
/// batches, and for asserting on output in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Removes and returns all recorded lines.
    pub fn drain(&self) -> Vec<String> {
        self.lock().drain(..).collect()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no line has been recorded since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl LineSink for MemorySink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        self.lock().push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let sink = MemorySink::new();
        sink.append("first").expect("append");
        sink.append("second").expect("append");
        sink.append("third").expect("append");

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn drain_clears_buffer() {
        let sink = MemorySink::new();
        sink.append("only").expect("append");

        assert_eq!(sink.drain(), vec!["only"]);
        assert!(sink.is_empty());
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn empty_lines_are_kept() {
        let sink = MemorySink::new();
        sink.append("").expect("append");
        assert_eq!(sink.lines(), vec![String::new()]);
    }
}
