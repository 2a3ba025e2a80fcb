//! Delayed numeric computation with a synchronous precondition check.
//!
//! [`compute`] either rejects its input before any timer is registered, or
//! returns a [`DelayedSquare`] future that resolves to the square of the input
//! once a fixed delay has elapsed.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use thiserror::Error;
use tokio::time::{sleep, Sleep};

/// Fixed wait before a scheduled result becomes observable.
pub const COMPUTE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// The input failed the `n > 0` precondition. Zero is rejected too.
    #[error("Negative number not allowed")]
    InvalidInput,
}

/// The eventual outcome of one accepted computation.
///
/// Resolves exactly once, to `input * input`, no earlier than
/// [`COMPUTE_DELAY`] after the [`compute`] call that created it. The
/// multiplication itself does not run until the timer fires.
pub struct DelayedSquare {
    input: i64,
    timer: Pin<Box<Sleep>>,
}

impl DelayedSquare {
    /// The input this computation was requested with.
    pub fn input(&self) -> i64 {
        self.input
    }
}

impl Future for DelayedSquare {
    type Output = i64;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.timer.as_mut().poll(cx) {
            Poll::Ready(()) => Poll::Ready(self.input * self.input),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Request the square of `n` after a fixed delay.
///
/// The precondition check is synchronous: `n <= 0` returns
/// [`ComputeError::InvalidInput`] immediately and no timer is registered.
/// Independent calls share no state; two calls with the same input yield two
/// futures that each resolve on their own.
pub fn compute(n: i64) -> Result<DelayedSquare, ComputeError> {
    if n <= 0 {
        return Err(ComputeError::InvalidInput);
    }
    Ok(DelayedSquare {
        input: n,
        timer: Box::pin(sleep(COMPUTE_DELAY)),
    })
}

/// Convenience wrapper that awaits the scheduled result in one step.
pub async fn square_delayed(n: i64) -> Result<i64, ComputeError> {
    Ok(compute(n)?.await)
}
