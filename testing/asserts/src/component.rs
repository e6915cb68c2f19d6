//!
//! Assertions written against a single side of a result.
//!
//! These only require the value or the error capability, so they also work for
//! types that implement just one of them. When the combined capability is
//! available, prefer [`crate::ResultAsserts`] for more descriptive messages.
//!

use crate::{AssertSink, CallSite};
use std::fmt::Debug;
use verdict_core::capability::{ErrorCapability, ErrorState, ValueCapability, ValueState};

pub trait ComponentAsserts: AssertSink {
    /// Asserts that `result` is in an okay state.
    #[track_caller]
    fn is_ok<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ValueState + ?Sized,
    {
        if !result.is_ok() {
            self.fail(format_args!(
                "{} was expected to be in an okay state, but it wasn't.\nLine: {}",
                site.expression, site.line
            ));
        }
        self
    }

    /// Asserts that `result` is in an okay state and returns its value.
    #[track_caller]
    fn is_ok_and_get<'r, R>(&self, result: &'r R, site: CallSite<'_>) -> (&Self, Option<&'r R::Value>)
    where
        R: ValueCapability + ?Sized,
    {
        let value = result.value();
        if value.is_none() {
            self.fail(format_args!(
                "{} was expected to be in an okay state, but it wasn't.\nLine: {}",
                site.expression, site.line
            ));
        }
        (self, value)
    }

    /// Asserts that `result` is not in an okay state.
    #[track_caller]
    fn is_not_ok<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ValueState + ?Sized,
    {
        if result.is_ok() {
            self.fail(format_args!(
                "{} was in an okay state, when it wasn't expected to be.\nLine: {}",
                site.expression, site.line
            ));
        }
        self
    }

    /// Like [`ComponentAsserts::is_not_ok`], with the unexpected value in the message.
    #[track_caller]
    fn is_not_ok_verbose<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ValueCapability + ?Sized,
        R::Value: Debug,
    {
        if let Some(value) = result.value() {
            self.fail(format_args!(
                "{} was in an okay state, when it wasn't expected to be.\nResult value: {:?}\nLine: {}",
                site.expression, value, site.line
            ));
        }
        self
    }

    /// Asserts that `result` is in an errored state.
    #[track_caller]
    fn is_error<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ErrorState + ?Sized,
    {
        if !result.is_error() {
            self.fail(format_args!(
                "{} was expected to be in an errored state, but it wasn't.\nLine: {}",
                site.expression, site.line
            ));
        }
        self
    }

    /// Asserts that `result` is in an errored state and returns its error.
    #[track_caller]
    fn is_error_and_get<'r, R>(&self, result: &'r R, site: CallSite<'_>) -> (&Self, Option<&'r R::Error>)
    where
        R: ErrorCapability + ?Sized,
    {
        let error = result.error();
        if error.is_none() {
            self.fail(format_args!(
                "{} was expected to be in an errored state, but it wasn't.\nLine: {}",
                site.expression, site.line
            ));
        }
        (self, error)
    }

    /// Asserts that `result` is not in an errored state.
    #[track_caller]
    fn is_not_error<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ErrorState + ?Sized,
    {
        if result.is_error() {
            self.fail(format_args!(
                "{} was in an errored state, when it wasn't expected to be.\nLine: {}",
                site.expression, site.line
            ));
        }
        self
    }

    /// Like [`ComponentAsserts::is_not_error`], with the unexpected error in the message.
    #[track_caller]
    fn is_not_error_verbose<R>(&self, result: &R, site: CallSite<'_>) -> &Self
    where
        R: ErrorCapability + ?Sized,
        R::Error: Debug,
    {
        if let Some(error) = result.error() {
            self.fail(format_args!(
                "{} was in an errored state, when it wasn't expected to be.\nResult error: {:?}\nLine: {}",
                site.expression, error, site.line
            ));
        }
        self
    }
}

impl<S: AssertSink + ?Sized> ComponentAsserts for S {}
