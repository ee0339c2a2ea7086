use core::ops::ControlFlow;

use ControlFlow::*;

use crate::input::InputCell;
use crate::resumable::Resumable;

/// The producer behind [`from_control_flow()`].
pub struct FromControlFlow<I, F> {
    input: InputCell<I>,
    f: F,
}

impl<I, O, F> Iterator for FromControlFlow<I, F>
where
    F: FnMut(&I) -> ControlFlow<(), O>,
{
    type Item = O;
    fn next(&mut self) -> Option<O> {
        match self.input.with(&mut self.f) {
            Continue(o) => Some(o),
            Break(()) => None,
        }
    }
}

/// Creates a computation from a function that returns [`ControlFlow`].
///
/// The provided function `f` is called with the latest input each time the
/// computation is resumed.
/// - If `f` returns `ControlFlow::Continue(o)`, the step produces `o`.
/// - If `f` returns `ControlFlow::Break(())`, the computation completes.
///
/// This is the usual way to let an input act as a stop signal.
///
/// # Examples
///
/// ```rust
/// use core::ops::ControlFlow;
///
/// use resumable::ResumeAssertions;
/// use resumable::from_control_flow;
///
/// // Doubles its input until it is told to stop with a negative number.
/// from_control_flow(|n: &i32| {
///     if *n < 0 {
///         ControlFlow::Break(())
///     } else {
///         ControlFlow::Continue(n * 2)
///     }
/// })
/// .assert_yields(1, 2)
/// .assert_yields(10, 20)
/// .assert_finishes(-1, 20)
/// .assert_completed(4);
/// ```
pub fn from_control_flow<I, O, F>(f: F) -> Resumable<I, FromControlFlow<I, F>>
where
    I: Default,
    F: FnMut(&I) -> ControlFlow<(), O>,
{
    Resumable::new(|input| FromControlFlow { input, f })
}
