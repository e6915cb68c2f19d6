//!
//! Assertion sinks: the receivers of assertion failures.
//!

use log::error;
use parking_lot::Mutex;
use std::fmt;

/// Receives the failures reported by result assertions.
///
/// The message is handed over unformatted, the sink decides whether to format,
/// record, log or panic. Assertions never fail on their own.
pub trait AssertSink {
    fn fail(&self, message: fmt::Arguments<'_>);
}

impl<S: AssertSink + ?Sized> AssertSink for &S {
    #[track_caller]
    fn fail(&self, message: fmt::Arguments<'_>) {
        (**self).fail(message)
    }
}

/// Panics on the first failure, the way `assert!` does.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicSink;

impl AssertSink for PanicSink {
    #[track_caller]
    fn fail(&self, message: fmt::Arguments<'_>) {
        assert_failed(message)
    }
}

/// Non-generic and out of line, to avoid code bloat.
#[cold]
#[track_caller]
fn assert_failed(message: fmt::Arguments<'_>) -> ! {
    panic!("assertion failed: {message}")
}

/// Collects every failure message instead of stopping at the first one.
#[derive(Debug, Default)]
pub struct RecordingSink {
    failures: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of failures reported so far.
    pub fn count(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Returns a copy of the recorded messages, oldest first.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    /// Removes and returns the recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.failures.lock())
    }
}

impl AssertSink for RecordingSink {
    fn fail(&self, message: fmt::Arguments<'_>) {
        self.failures.lock().push(message.to_string());
    }
}

/// Reports failures through the `log` facade and carries on.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AssertSink for LogSink {
    fn fail(&self, message: fmt::Arguments<'_>) {
        error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());
        sink.fail(format_args!("first {}", 1));
        (&sink).fail(format_args!("second"));
        assert_eq!(sink.count(), 2);
        assert_eq!(sink.failures(), vec!["first 1".to_string(), "second".to_string()]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    #[should_panic(expected = "assertion failed: broken 7")]
    fn test_panic_sink() {
        PanicSink.fail(format_args!("broken {}", 7));
    }

    #[test]
    fn test_log_sink_does_not_panic() {
        LogSink.fail(format_args!("only logged"));
    }
}
