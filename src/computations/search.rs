//! Searching a sequence with a suspendable predicate.

use crate::core::{Computation, ComputationError, Step};
use crate::delegate;

/// Walks a source, running one predicate computation per item.
struct Probe<I: Iterator, F, P> {
    source: I,
    predicate: F,
    current: Option<(I::Item, P)>,
}

impl<I, F, P> Probe<I, F, P>
where
    I: Iterator,
    F: FnMut(&I::Item) -> P,
    P: Computation<Output = bool>,
{
    const fn new(source: I, predicate: F) -> Self {
        Self {
            source,
            predicate,
            current: None,
        }
    }

    /// Completes with the next matching item, or `None` once the source is
    /// exhausted.
    fn next_match(&mut self) -> Step<Option<I::Item>> {
        loop {
            if self.current.is_none() {
                let Some(item) = self.source.next() else {
                    return Step::Complete(None);
                };
                let test = (self.predicate)(&item);
                self.current = Some((item, test));
            }
            let outcome = match self.current.as_mut() {
                Some((_, test)) => delegate!(test.resume()),
                None => continue,
            };
            let tested = self.current.take();
            match outcome {
                Ok(true) => return Step::Complete(tested.map(|(item, _)| item)),
                Ok(false) => {}
                Err(err) => return Step::Fail(err),
            }
        }
    }
}

/// Completes with the first item the predicate accepts.
///
/// Fails with [`ComputationError::NotFound`] if the source runs out first, and
/// with the predicate's own error if a predicate fails.
pub struct Search<I: Iterator, F, P> {
    probe: Probe<I, F, P>,
}

/// Search `source` for the first item whose predicate computation completes
/// with `true`.
///
/// ```
/// use cooperative_scheduler::computations::{ready, search};
/// use cooperative_scheduler::core::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let id = scheduler.add(search(0u64.., |x: &u64| ready(*x >= 10)));
/// scheduler.run_all().unwrap();
/// assert_eq!(scheduler.completed_value(id), Some(&10));
/// ```
pub fn search<I, F, P>(source: I, predicate: F) -> Search<I::IntoIter, F, P>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> P,
    P: Computation<Output = bool>,
{
    Search {
        probe: Probe::new(source.into_iter(), predicate),
    }
}

impl<I, F, P> Computation for Search<I, F, P>
where
    I: Iterator,
    F: FnMut(&I::Item) -> P,
    P: Computation<Output = bool>,
{
    type Output = I::Item;

    fn resume(&mut self) -> Step<I::Item> {
        match delegate!(self.probe.next_match()) {
            Ok(Some(item)) => Step::Complete(item),
            Ok(None) => Step::Fail(ComputationError::NotFound.into()),
            Err(err) => Step::Fail(err),
        }
    }
}

/// Hands every accepted item to a callback and completes with the number of
/// matches once the source is exhausted.
pub struct ReportMatches<I: Iterator, F, P, M> {
    probe: Probe<I, F, P>,
    on_match: M,
    matches: usize,
}

/// Report every item of `source` whose predicate completes with `true`.
pub fn report_matches<I, F, P, M>(
    source: I,
    predicate: F,
    on_match: M,
) -> ReportMatches<I::IntoIter, F, P, M>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> P,
    P: Computation<Output = bool>,
    M: FnMut(&I::Item),
{
    ReportMatches {
        probe: Probe::new(source.into_iter(), predicate),
        on_match,
        matches: 0,
    }
}

impl<I, F, P, M> Computation for ReportMatches<I, F, P, M>
where
    I: Iterator,
    F: FnMut(&I::Item) -> P,
    P: Computation<Output = bool>,
    M: FnMut(&I::Item),
{
    type Output = usize;

    fn resume(&mut self) -> Step<usize> {
        loop {
            match delegate!(self.probe.next_match()) {
                Ok(Some(item)) => {
                    (self.on_match)(&item);
                    self.matches += 1;
                }
                Ok(None) => return Step::Complete(self.matches),
                Err(err) => return Step::Fail(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computations::{fail, ready, suspend_then};

    fn drive<C: Computation>(c: &mut C) -> (Step<C::Output>, usize) {
        let mut suspensions = 0;
        loop {
            match c.resume() {
                Step::Suspend => suspensions += 1,
                other => return (other, suspensions),
            }
        }
    }

    #[test]
    fn test_first_match_without_suspension() {
        let mut s = search(0u64.., |x: &u64| ready(*x >= 10));
        let (step, suspensions) = drive(&mut s);
        assert!(matches!(step, Step::Complete(10)));
        assert_eq!(suspensions, 0);
    }

    #[test]
    fn test_predicate_suspensions_are_forwarded() {
        let mut s = search(vec![1, 2, 3], |x: &i32| suspend_then(1, *x == 3));
        let (step, suspensions) = drive(&mut s);
        assert!(matches!(step, Step::Complete(3)));
        assert_eq!(suspensions, 3);
    }

    #[test]
    fn test_exhausted_source_is_not_found() {
        let mut s = search(vec![1, 2, 3], |_: &i32| ready(false));
        match drive(&mut s).0 {
            Step::Fail(err) => assert!(matches!(
                err.downcast_ref::<ComputationError>(),
                Some(ComputationError::NotFound)
            )),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_predicate_failure_propagates() {
        let mut s = search(vec![1, 2], |_: &i32| fail::<bool>(anyhow::anyhow!("bad predicate")));
        match drive(&mut s).0 {
            Step::Fail(err) => assert_eq!(err.to_string(), "bad predicate"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_report_matches_counts_all() {
        let mut found = Vec::new();
        let mut r = report_matches(1..=10, |x: &i32| suspend_then(1, x % 3 == 0), |x: &i32| {
            found.push(*x);
        });
        let (step, suspensions) = drive(&mut r);
        assert!(matches!(step, Step::Complete(3)));
        assert_eq!(suspensions, 10);
        assert_eq!(found, vec![3, 6, 9]);
    }
}
