//! Console progress indicator.

use std::io::Write;
use std::marker::PhantomData;
use std::time::Duration;

use crate::computations::{sleep, Sleep};
use crate::core::{Computation, ComputationError, Step};
use crate::delegate;

/// Frames the spinner cycles through.
pub const FRAMES: [char; 4] = ['-', '\\', '|', '/'];

/// Redraws `"\r[<frame>] <message>"` every `interval`, forever.
///
/// Never completes; it only ends by failing when the writer does. The output
/// type is free so a spinner can share a scheduler with any other task.
pub struct Spinner<W, T = ()> {
    out: W,
    message: String,
    interval: Duration,
    frame: usize,
    pause: Option<Sleep>,
    _output: PhantomData<fn() -> T>,
}

/// Spinner writing to `out`.
pub fn spinner<W, T>(out: W, message: impl Into<String>, interval: Duration) -> Spinner<W, T>
where
    W: Write,
{
    Spinner {
        out,
        message: message.into(),
        interval,
        frame: 0,
        pause: None,
        _output: PhantomData,
    }
}

impl<W, T> Spinner<W, T> {
    /// Number of frames drawn so far.
    #[must_use]
    pub const fn frames_drawn(&self) -> usize {
        self.frame
    }
}

impl<W, T> Computation for Spinner<W, T>
where
    W: Write,
{
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        loop {
            if let Some(pause) = self.pause.as_mut() {
                if let Err(err) = delegate!(pause.resume()) {
                    return Step::Fail(err);
                }
                self.pause = None;
            }
            let frame = FRAMES[self.frame % FRAMES.len()];
            let drawn = write!(self.out, "\r[{frame}] {}", self.message).and_then(|()| self.out.flush());
            if let Err(err) = drawn {
                return Step::Fail(ComputationError::Io(err).into());
            }
            self.frame += 1;
            self.pause = Some(sleep(self.interval));
        }
    }
}
