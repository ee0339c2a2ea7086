use alloc::rc::Rc;
use core::cell::Ref;
use core::cell::RefCell;
use core::fmt;

/// A shared handle to the most recent input passed to
/// [`Resumable::resume()`](crate::Resumable::resume).
///
/// The factory given to [`Resumable::new()`](crate::Resumable::new) receives
/// an `InputCell` and moves it into the producer it builds. Every time the
/// computation is resumed, the new input is written into the cell *before* the
/// producer is advanced, so whatever the producer reads during its next step
/// is the value the caller just supplied.
///
/// The handle is read-only. Only the owning `Resumable` can write to the
/// cell, so there is exactly one writer and it never writes while the
/// producer is running.
///
/// ```rust
/// use resumable::InputCell;
/// use resumable::Resumable;
///
/// let mut shout = Resumable::new(|input: InputCell<&'static str>| {
///     core::iter::from_fn(move || Some(input.with(|s| s.to_uppercase())))
/// });
/// assert_eq!(shout.resume("hello"), Ok("HELLO".to_string()));
/// assert_eq!(shout.resume("bye"), Ok("BYE".to_string()));
/// ```
pub struct InputCell<I>(Rc<RefCell<I>>);

impl<I> InputCell<I> {
    pub(crate) fn new(initial: I) -> Self {
        InputCell(Rc::new(RefCell::new(initial)))
    }

    /// Stores a new input and returns the old one.
    pub(crate) fn replace(&self, input: I) -> I {
        self.0.replace(input)
    }

    /// Returns a copy of the current input.
    pub fn get(&self) -> I
    where
        I: Clone,
    {
        self.0.borrow().clone()
    }

    /// Calls `f` with a reference to the current input.
    pub fn with<T>(&self, f: impl FnOnce(&I) -> T) -> T {
        f(&*self.0.borrow())
    }

    /// Borrows the current input.
    ///
    /// The guard must be dropped before the producer returns from its step;
    /// a producer cannot hold it across a suspension point anyway, since the
    /// guard borrows from the cell the producer owns.
    pub fn borrow(&self) -> Ref<'_, I> {
        self.0.borrow()
    }

    pub(crate) fn share(&self) -> Self {
        InputCell(Rc::clone(&self.0))
    }
}

impl<I: fmt::Debug> fmt::Debug for InputCell<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputCell").field(&*self.0.borrow()).finish()
    }
}
