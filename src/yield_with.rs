use crate::input::InputCell;
use crate::resumable::Resumable;

/// The producer behind [`yield_with()`].
pub struct YieldWith<I, F> {
    input: InputCell<I>,
    f: F,
}

impl<I, O, F> Iterator for YieldWith<I, F>
where
    F: FnMut(&I) -> O,
{
    type Item = O;
    fn next(&mut self) -> Option<O> {
        Some(self.input.with(&mut self.f))
    }
}

/// Creates a computation that never completes, producing `f(&input)` for every
/// input it is resumed with.
///
/// The closure can keep whatever state it needs between steps.
///
/// ```rust
/// use resumable::ResumeAssertions;
/// use resumable::yield_with;
///
/// let mut length = 0;
/// yield_with(move |s: &&str| {
///     length += s.len();
///     length
/// })
/// .assert_yields("foo", 3)
/// .assert_yields("bar", 6)
/// .assert_yields("hello", 11);
/// ```
pub fn yield_with<I, O, F>(f: F) -> Resumable<I, YieldWith<I, F>>
where
    I: Default,
    F: FnMut(&I) -> O,
{
    Resumable::new(|input| YieldWith { input, f })
}
