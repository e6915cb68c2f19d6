//!
//! Unwrapping results produced by spawned tokio tasks.
//!

use crate::{
    capability::{ErrorOf, ResultCapability, ValueOf},
    unwrap::try_unwrap,
};
use log::warn;
use std::{
    error::Error,
    future::Future,
    pin::Pin,
    task::{Context, Poll, ready},
};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};

/// Error returned by [`JoinUnwrap`].
#[derive(Debug, Error)]
pub enum JoinUnwrapError<E> {
    /// The task panicked or was cancelled before producing a result.
    #[error("task did not produce a result: {0}")]
    Join(#[from] JoinError),

    /// The task produced a result in an errored state.
    #[error(transparent)]
    Result(E),
}

impl<E> JoinUnwrapError<E> {
    /// Returns the error stored in the produced result, if the task got that far.
    pub fn into_result_error(self) -> Option<E> {
        match self {
            JoinUnwrapError::Join(_) => None,
            JoinUnwrapError::Result(err) => Some(err),
        }
    }
}

/// Unwrapping for the results of spawned tasks.
pub trait JoinUnwrapExt<R> {
    /// Awaits the task, then unwraps the result it produced.
    ///
    /// A task failure is reported as [`JoinUnwrapError::Join`] and the result is never unwrapped.
    fn join_unwrap(self) -> JoinUnwrap<R>;
}

impl<R> JoinUnwrapExt<R> for JoinHandle<R>
where
    R: ResultCapability,
{
    fn join_unwrap(self) -> JoinUnwrap<R> {
        JoinUnwrap { handle: self }
    }
}

/// Future for [`JoinUnwrapExt::join_unwrap`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct JoinUnwrap<R> {
    handle: JoinHandle<R>,
}

impl<R> JoinUnwrap<R> {
    /// Aborts the underlying task.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<R> Future for JoinUnwrap<R>
where
    R: ResultCapability,
    ErrorOf<R>: Error,
{
    type Output = Result<ValueOf<R>, JoinUnwrapError<ErrorOf<R>>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let joined = ready!(Pin::new(&mut self.get_mut().handle).poll(cx));
        Poll::Ready(match joined {
            Ok(result) => try_unwrap(result).map_err(JoinUnwrapError::Result),
            Err(err) => {
                warn!("task producing a result failed: {}", err);
                Err(err.into())
            }
        })
    }
}
