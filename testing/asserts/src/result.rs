//!
//! Assertions written against the combined result capability. Failure messages
//! carry the content of the side that was actually populated.
//!

use crate::{AssertSink, CallSite};
use std::fmt::Debug;
use verdict_core::capability::ResultCapability;

pub trait ResultAsserts: AssertSink {
    /// Asserts that `result` is in an okay state.
    #[track_caller]
    fn assert_ok<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ResultCapability + ?Sized,
        R::Error: Debug,
    {
        self.assert_ok_and_get(result, site).0
    }

    /// Asserts that `result` is in an okay state and returns its value.
    #[track_caller]
    fn assert_ok_and_get<'r, R>(&self, result: &'r R, site: CallSite<'_>) -> (&Self, Option<&'r R::Value>)
    where
        R: ResultCapability + ?Sized,
        R::Error: Debug,
    {
        match result.value_or_error() {
            Ok(value) => (self, Some(value)),
            Err(error) => {
                self.fail(format_args!(
                    "{} was expected to be in an okay state, but it wasn't.\nResult error: {:?}\nLine: {}",
                    site.expression, error, site.line
                ));
                (self, None)
            }
        }
    }

    /// Asserts that `result` is not in an okay state.
    #[track_caller]
    fn assert_not_ok<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ResultCapability + ?Sized,
        R::Value: Debug,
    {
        self.assert_not_ok_and_get(result, site).0
    }

    /// Asserts that `result` is not in an okay state and returns its error.
    #[track_caller]
    fn assert_not_ok_and_get<'r, R>(&self, result: &'r R, site: CallSite<'_>) -> (&Self, Option<&'r R::Error>)
    where
        R: ResultCapability + ?Sized,
        R::Value: Debug,
    {
        match result.value_or_error() {
            Ok(value) => {
                self.fail(format_args!(
                    "{} was in an okay state, when it wasn't expected to be.\nResult value: {:?}\nLine: {}",
                    site.expression, value, site.line
                ));
                (self, None)
            }
            Err(error) => (self, Some(error)),
        }
    }

    /// Asserts that `result` is in an errored state.
    #[track_caller]
    fn assert_error<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ResultCapability + ?Sized,
        R::Value: Debug,
    {
        self.assert_error_and_get(result, site).0
    }

    /// Asserts that `result` is in an errored state and returns its error.
    #[track_caller]
    fn assert_error_and_get<'r, R>(&self, result: &'r R, site: CallSite<'_>) -> (&Self, Option<&'r R::Error>)
    where
        R: ResultCapability + ?Sized,
        R::Value: Debug,
    {
        match result.error_or_value() {
            Ok(error) => (self, Some(error)),
            Err(value) => {
                self.fail(format_args!(
                    "{} was expected to be in an errored state, but it wasn't.\nResult value: {:?}\nLine: {}",
                    site.expression, value, site.line
                ));
                (self, None)
            }
        }
    }

    /// Asserts that `result` is not in an errored state.
    #[track_caller]
    fn assert_not_error<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ResultCapability + ?Sized,
        R::Error: Debug,
    {
        self.assert_not_error_and_get(result, site).0
    }

    /// Asserts that `result` is not in an errored state and returns its value.
    #[track_caller]
    fn assert_not_error_and_get<'r, R>(&self, result: &'r R, site: CallSite<'_>) -> (&Self, Option<&'r R::Value>)
    where
        R: ResultCapability + ?Sized,
        R::Error: Debug,
    {
        match result.error_or_value() {
            Ok(error) => {
                self.fail(format_args!(
                    "{} was in an errored state, when it wasn't expected to be.\nResult error: {:?}\nLine: {}",
                    site.expression, error, site.line
                ));
                (self, None)
            }
            Err(value) => (self, Some(value)),
        }
    }
}

impl<S: AssertSink + ?Sized> ResultAsserts for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PanicSink, RecordingSink, call_site};
    use std::sync::Arc;
    use thiserror::Error;
    use verdict_core::result::{BoolResult, DynError, ValueErrorResult, ValueResult};

    #[derive(Debug, Error)]
    #[error("generic failure")]
    struct GenericError;

    #[derive(Debug, PartialEq)]
    enum Rejection {
        Expired { days: u32 },
    }

    fn error() -> DynError {
        Arc::new(GenericError)
    }

    #[test]
    fn test_ok_result_passes_ok_assertions() {
        let sink = RecordingSink::new();
        let result = BoolResult::from_value(true);

        sink.assert_ok(&result, call_site!(result)).assert_not_error(&result, call_site!(result));
        let (_, value) = sink.assert_not_error_and_get(&result, call_site!(result));

        assert_eq!(value, Some(&true));
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_error_result_fails_ok_assertion_once() {
        let sink = RecordingSink::new();
        let result = BoolResult::from_error(error());

        sink.assert_ok(&result, call_site!(result));
        assert_eq!(sink.count(), 1);

        sink.assert_not_error(&result, call_site!(result));
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_error_assertions() {
        let sink = RecordingSink::new();
        let shared = error();
        let err = ValueResult::<u8>::from_error(shared.clone());
        let ok = ValueResult::from_value(1u8);

        let (_, captured) = sink.assert_error(&err, call_site!(err)).assert_not_ok_and_get(&err, call_site!(err));
        assert!(Arc::ptr_eq(captured.unwrap(), &shared));
        assert!(sink.is_empty());

        let (_, captured) = sink.assert_error_and_get(&ok, call_site!(ok));
        assert!(captured.is_none());
        sink.assert_not_ok(&ok, call_site!(ok));
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_messages_include_the_other_side() {
        let sink = RecordingSink::new();
        let expired = ValueErrorResult::<&str, Rejection>::from_error(Rejection::Expired { days: 3 });
        let accepted = ValueErrorResult::<&str, Rejection>::from_value("token");

        sink.assert_ok(&expired, CallSite::new("expired", 40))
            .assert_not_ok(&accepted, CallSite::new("accepted", 41))
            .assert_error(&accepted, CallSite::new("accepted", 42))
            .assert_not_error(&expired, CallSite::default());

        assert_eq!(
            sink.take(),
            vec![
                "expired was expected to be in an okay state, but it wasn't.\nResult error: Expired { days: 3 }\nLine: 40",
                "accepted was in an okay state, when it wasn't expected to be.\nResult value: \"token\"\nLine: 41",
                "accepted was expected to be in an errored state, but it wasn't.\nResult value: \"token\"\nLine: 42",
                "<result> was in an errored state, when it wasn't expected to be.\nResult error: Expired { days: 3 }\nLine: 0",
            ]
        );
    }

    #[test]
    fn test_std_results_are_accepted() {
        let sink = RecordingSink::new();
        let parsed = "17".parse::<u32>();
        let (_, value) = sink.assert_ok_and_get(&parsed, call_site!(parsed));
        assert_eq!(value, Some(&17));

        let failed = "x".parse::<u32>();
        let (_, err) = sink.assert_error_and_get(&failed, call_site!(failed));
        assert!(err.is_some());
        assert!(sink.is_empty());
    }

    #[test]
    #[should_panic(expected = "Result error: GenericError")]
    fn test_panic_sink_reports_the_error() {
        let result = ValueResult::<u8>::from_error(error());
        PanicSink.assert_ok(&result, call_site!(result));
    }
}
