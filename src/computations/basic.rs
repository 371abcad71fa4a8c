//! Primitive computations.

use std::marker::PhantomData;

use crate::core::{Computation, ComputationError, Step};

/// Completes with a value on the first resume.
#[derive(Debug)]
pub struct Ready<T>(Option<T>);

/// Computation that completes immediately with `value`.
pub const fn ready<T>(value: T) -> Ready<T> {
    Ready(Some(value))
}

impl<T> Computation for Ready<T> {
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        match self.0.take() {
            Some(value) => Step::Complete(value),
            None => Step::Fail(ComputationError::Finished.into()),
        }
    }
}

/// Fails with an error on the first resume.
#[derive(Debug)]
pub struct Failing<T> {
    error: Option<anyhow::Error>,
    _output: PhantomData<fn() -> T>,
}

/// Computation that fails immediately with `error`.
pub fn fail<T>(error: impl Into<anyhow::Error>) -> Failing<T> {
    Failing {
        error: Some(error.into()),
        _output: PhantomData,
    }
}

impl<T> Computation for Failing<T> {
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        Step::Fail(
            self.error
                .take()
                .unwrap_or_else(|| ComputationError::Finished.into()),
        )
    }
}

/// Closure-backed computation.
pub struct FromFn<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

/// Computation whose every resume calls `f`.
pub const fn from_fn<F, T>(f: F) -> FromFn<F, T>
where
    F: FnMut() -> Step<T>,
{
    FromFn {
        f,
        _output: PhantomData,
    }
}

impl<F, T> Computation for FromFn<F, T>
where
    F: FnMut() -> Step<T>,
{
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        (self.f)()
    }
}

/// Suspends a fixed number of times, then completes.
#[derive(Debug)]
pub struct SuspendThen<T> {
    remaining: usize,
    value: Option<T>,
}

/// Computation that suspends `times` times and completes with `value` on the
/// following resume.
pub const fn suspend_then<T>(times: usize, value: T) -> SuspendThen<T> {
    SuspendThen {
        remaining: times,
        value: Some(value),
    }
}

impl<T> Computation for SuspendThen<T> {
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Step::Suspend;
        }
        match self.value.take() {
            Some(value) => Step::Complete(value),
            None => Step::Fail(ComputationError::Finished.into()),
        }
    }
}
