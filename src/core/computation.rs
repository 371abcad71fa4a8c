//! The resumable computation contract driven by the scheduler.
//!
//! A computation is an explicit state machine. Every call to
//! [`Computation::resume`] runs it up to its next suspension point and reports
//! what happened as a [`Step`]. Composite computations drive nested ones by
//! resuming them from inside their own `resume` and re-emitting every
//! suspension signal unchanged; see [`Step::delegate`] and the
//! [`delegate!`](crate::delegate) macro.

use std::ops::ControlFlow;

/// Outcome of advancing a computation by one step.
#[derive(Debug)]
pub enum Step<T> {
    /// More work remains; control goes back to the scheduler.
    Suspend,
    /// Suspension carrying a payload. The scheduler rejects this as a
    /// protocol violation.
    Yield(serde_json::Value),
    /// Finished normally with a value.
    Complete(T),
    /// Finished abnormally with an error.
    Fail(anyhow::Error),
}

impl<T> Step<T> {
    /// Whether this step ends the computation.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::Fail(_))
    }

    /// Map the completion value, leaving every other step untouched.
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Suspend => Step::Suspend,
            Self::Yield(payload) => Step::Yield(payload),
            Self::Complete(value) => Step::Complete(f(value)),
            Self::Fail(err) => Step::Fail(err),
        }
    }

    /// Split a nested step for a delegating computation.
    ///
    /// Suspension signals come back as `Break` and must be returned from the
    /// outer `resume` as-is. Terminal steps come back as `Continue` holding the
    /// nested result, which the outer computation is free to inspect.
    pub fn delegate<U>(self) -> ControlFlow<Step<U>, anyhow::Result<T>> {
        match self {
            Self::Suspend => ControlFlow::Break(Step::Suspend),
            Self::Yield(payload) => ControlFlow::Break(Step::Yield(payload)),
            Self::Complete(value) => ControlFlow::Continue(Ok(value)),
            Self::Fail(err) => ControlFlow::Continue(Err(err)),
        }
    }
}

/// A suspendable, resumable unit of work.
///
/// After `resume` has returned a terminal step the computation is never
/// resumed again by the scheduler.
pub trait Computation {
    /// Value produced on normal completion.
    type Output;

    /// Run until the next suspension point or until the computation ends.
    fn resume(&mut self) -> Step<Self::Output>;
}

impl<C> Computation for Box<C>
where
    C: Computation + ?Sized,
{
    type Output = C::Output;

    fn resume(&mut self) -> Step<Self::Output> {
        (**self).resume()
    }
}

/// Resume a nested computation step and either forward its suspension signal
/// out of the enclosing `resume`, or evaluate to its `anyhow::Result`.
///
/// ```
/// use cooperative_scheduler::core::{Computation, Step};
/// use cooperative_scheduler::computations::{sleep, Sleep};
/// use cooperative_scheduler::delegate;
/// use std::time::Duration;
///
/// struct Twice {
///     pending: Sleep,
/// }
///
/// impl Computation for Twice {
///     type Output = &'static str;
///
///     fn resume(&mut self) -> Step<Self::Output> {
///         if let Err(err) = delegate!(self.pending.resume()) {
///             return Step::Fail(err);
///         }
///         Step::Complete("done")
///     }
/// }
///
/// let mut task = Twice { pending: sleep(Duration::ZERO) };
/// assert!(matches!(task.resume(), Step::Suspend));
/// assert!(matches!(task.resume(), Step::Complete("done")));
/// ```
#[macro_export]
macro_rules! delegate {
    ($step:expr) => {
        match $crate::core::Step::delegate($step) {
            ::std::ops::ControlFlow::Break(signal) => return signal,
            ::std::ops::ControlFlow::Continue(outcome) => outcome,
        }
    };
}
