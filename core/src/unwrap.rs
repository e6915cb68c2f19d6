//!
//! Unwrapping results into their value or their error, synchronously and
//! after awaiting a future that produces the result.
//!

use crate::capability::{ErrorOf, ResultCapability, ValueOf};
use log::trace;
use pin_project_lite::pin_project;
use std::{
    error::Error,
    future::Future,
    pin::Pin,
    task::{Context, Poll, ready},
};
use thiserror::Error;

/// Returns the value stored in `result`, or the stored error if it is in an errored state.
///
/// The error is handed back as is, so it can be propagated with `?`.
pub fn try_unwrap<R>(result: R) -> Result<ValueOf<R>, ErrorOf<R>>
where
    R: ResultCapability,
    ErrorOf<R>: Error,
{
    result.try_unwrap().inspect_err(|err| trace!("unwrapped result is in an errored state: {}", err))
}

/// Unwrapping for futures whose output is a result.
pub trait UnwrapFutureExt: Future {
    /// Awaits the result produced by this future, then unwraps it with [`try_unwrap`].
    ///
    /// Completed futures such as [`std::future::ready`] are unwrapped on the first poll.
    fn try_unwrap(self) -> TryUnwrap<Self>
    where
        Self: Sized,
    {
        TryUnwrap { future: self }
    }
}

impl<F> UnwrapFutureExt for F
where
    F: Future,
    F::Output: ResultCapability,
{
}

pin_project! {
    /// Future for [`UnwrapFutureExt::try_unwrap`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    #[derive(Debug)]
    pub struct TryUnwrap<F> {
        #[pin]
        future: F,
    }
}

impl<F> Future for TryUnwrap<F>
where
    F: Future,
    F::Output: ResultCapability,
    ErrorOf<F::Output>: Error,
{
    type Output = Result<ValueOf<F::Output>, ErrorOf<F::Output>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = ready!(self.project().future.poll(cx));
        Poll::Ready(try_unwrap(result))
    }
}

/// Error returned by [`TryUnwrapFallible`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnwrapError<F, E> {
    /// The awaited future failed before producing a result.
    #[error("awaited future failed: {0}")]
    Future(F),

    /// The awaited future produced a result in an errored state.
    #[error(transparent)]
    Result(E),
}

impl<F, E> UnwrapError<F, E> {
    /// Returns the error stored in the produced result, if the future got that far.
    pub fn into_result_error(self) -> Option<E> {
        match self {
            UnwrapError::Future(_) => None,
            UnwrapError::Result(err) => Some(err),
        }
    }
}

/// Unwrapping for fallible futures whose success output is a result.
pub trait UnwrapFallibleFutureExt: Future {
    /// Awaits this future, then unwraps the result it produced.
    ///
    /// A failure of the future itself is reported as [`UnwrapError::Future`] and the
    /// result is never unwrapped.
    fn try_unwrap_fallible(self) -> TryUnwrapFallible<Self>
    where
        Self: Sized,
    {
        TryUnwrapFallible { future: self }
    }
}

impl<F, R, E> UnwrapFallibleFutureExt for F
where
    F: Future<Output = Result<R, E>>,
    R: ResultCapability,
{
}

pin_project! {
    /// Future for [`UnwrapFallibleFutureExt::try_unwrap_fallible`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    #[derive(Debug)]
    pub struct TryUnwrapFallible<F> {
        #[pin]
        future: F,
    }
}

impl<F, R, E> Future for TryUnwrapFallible<F>
where
    F: Future<Output = Result<R, E>>,
    R: ResultCapability,
    ErrorOf<R>: Error,
{
    type Output = Result<ValueOf<R>, UnwrapError<E, ErrorOf<R>>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(match ready!(self.project().future.poll(cx)) {
            Ok(result) => try_unwrap(result).map_err(UnwrapError::Result),
            Err(err) => {
                trace!("awaited future failed before producing a result");
                Err(UnwrapError::Future(err))
            }
        })
    }
}
