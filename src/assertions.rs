use core::fmt::Debug;

use crate::error::ResumeError;
use crate::resumable::Resumable;

/// Extension trait providing assertion methods for testing computations.
///
/// This trait is separate from [`Resumable`] to keep its inherent API focused
/// on driving the computation. Import this trait in your tests to access
/// assertion methods. Every assertion returns the computation, so they can be
/// chained:
///
/// ```rust
/// use resumable::InputCell;
/// use resumable::Resumable;
/// use resumable::ResumeAssertions;
///
/// Resumable::new(|_: InputCell<&'static str>| [1, 2, 3])
///     .assert_yields("a", 1)
///     .assert_yields("b", 2)
///     .assert_yields("c", 3)
///     .assert_finishes("d", 3)
///     .assert_completed("e");
/// ```
pub trait ResumeAssertions<I, O> {
    /// Resumes the computation with `input` and asserts that it produced
    /// `expected` and is still alive.
    ///
    /// Panics if the computation completes on this step, was already
    /// completed, or produced a different value.
    fn assert_yields(&mut self, input: I, expected: O) -> &mut Self;

    /// Resumes the computation with `input` and asserts that this is the step
    /// that completes it, returning `expected` as the final current value.
    ///
    /// Panics if the computation is still alive after this step or was
    /// already completed.
    fn assert_finishes(&mut self, input: I, expected: O) -> &mut Self;

    /// Asserts that resuming with `input` fails because the computation has
    /// already completed.
    fn assert_completed(&mut self, input: I) -> &mut Self;
}

impl<I, P> ResumeAssertions<I, P::Item> for Resumable<I, P>
where
    P: Iterator,
    P::Item: Clone + Default + PartialEq + Debug,
{
    #[track_caller]
    fn assert_yields(&mut self, input: I, expected: P::Item) -> &mut Self {
        match self.resume(input) {
            Ok(actual) if self.is_alive() => {
                assert_eq!(
                    actual, expected,
                    "expected Yield({expected:?}), got Yield({actual:?})"
                );
            }
            Ok(actual) => {
                panic!("expected Yield({expected:?}), got Finish({actual:?})")
            }
            Err(e) => panic!("expected Yield({expected:?}), got Err({e})"),
        }
        self
    }

    #[track_caller]
    fn assert_finishes(&mut self, input: I, expected: P::Item) -> &mut Self {
        match self.resume(input) {
            Ok(actual) if self.is_alive() => {
                panic!("expected Finish({expected:?}), got Yield({actual:?})")
            }
            Ok(actual) => {
                assert_eq!(
                    actual, expected,
                    "expected Finish({expected:?}), got Finish({actual:?})"
                );
            }
            Err(e) => panic!("expected Finish({expected:?}), got Err({e})"),
        }
        self
    }

    #[track_caller]
    fn assert_completed(&mut self, input: I) -> &mut Self {
        match self.resume(input) {
            Err(ResumeError::Completed) => {}
            Ok(actual) => panic!("expected Err(Completed), got Ok({actual:?})"),
        }
        self
    }
}
