use core::fmt;

use log::trace;

use crate::drive::Drive;
use crate::error::ResumeError;
use crate::error::Result;
use crate::input::InputCell;

/// A computation that is driven one step at a time, receiving an input on
/// every step and producing an output in return.
///
/// The computation is built from a *producer*: any iterator, constructed by a
/// factory that is handed the computation's [`InputCell`]. Each call to
/// [`resume()`](Resumable::resume) writes the input into the cell, runs the
/// producer up to its next yielded value, and hands that value back. The
/// producer therefore sees every input at the moment it resumes, never a stale
/// one.
///
/// ```rust
/// use resumable::InputCell;
/// use resumable::Resumable;
///
/// // Echoes `input + 1`, except for the very first step, which runs before
/// // the producer has looked at any input.
/// let mut echo = Resumable::new(|input: InputCell<i32>| {
///     let mut x = 0;
///     let mut started = false;
///     core::iter::from_fn(move || {
///         if started {
///             x = input.get();
///         }
///         started = true;
///         Some(x + 1)
///     })
/// });
/// assert_eq!(echo.resume(5), Ok(1));
/// assert_eq!(echo.resume(5), Ok(6));
/// assert_eq!(echo.resume(0), Ok(1));
/// assert!(echo.is_alive());
/// ```
///
/// # Completion
///
/// A computation stays alive until its producer runs out. Exhaustion is only
/// discovered by the step that tries to go past the last value: that step
/// marks the computation as completed and returns the *current value* again,
/// i.e. the last value the producer yielded. Every step after that fails with
/// [`ResumeError::Completed`].
///
/// ```rust
/// use resumable::InputCell;
/// use resumable::Resumable;
/// use resumable::ResumeError;
///
/// let mut count = Resumable::new(|_: InputCell<&'static str>| [1, 2, 3]);
/// assert_eq!(count.resume("a"), Ok(1));
/// assert_eq!(count.resume("b"), Ok(2));
/// assert_eq!(count.resume("c"), Ok(3));
/// assert!(count.is_alive());
/// assert_eq!(count.resume("d"), Ok(3));
/// assert!(!count.is_alive());
/// assert_eq!(count.resume("e"), Err(ResumeError::Completed));
/// ```
///
/// If the producer panics, the computation is left completed. A caller that
/// catches the unwind gets [`ResumeError::Completed`] from any further step,
/// and the producer is never advanced again.
///
/// `Resumable` is neither `Send` nor `Sync`; it is meant to be driven by one
/// caller on one thread.
pub struct Resumable<I, P: Iterator> {
    input: InputCell<I>,
    producer: P,
    current: Option<P::Item>,
    alive: bool,
}

impl<I, P: Iterator> Resumable<I, P> {
    /// Creates a computation whose input cell starts at `I::default()`.
    ///
    /// The factory is called right away to build the producer, but the
    /// producer is not advanced until the first call to `resume()`.
    pub fn new<F, T>(factory: F) -> Self
    where
        I: Default,
        F: FnOnce(InputCell<I>) -> T,
        T: IntoIterator<IntoIter = P>,
    {
        Self::with_input(I::default(), factory)
    }

    /// Creates a computation whose input cell starts at `initial`.
    ///
    /// This is useful when `I` has no sensible default, or when the producer
    /// may look at the input before the first value is supplied.
    ///
    /// ```rust
    /// use resumable::InputCell;
    /// use resumable::Resumable;
    ///
    /// let mut greet = Resumable::with_input(
    ///     String::from("nobody"),
    ///     |name: InputCell<String>| {
    ///         let first = name.get();
    ///         core::iter::once(first)
    ///             .chain(core::iter::repeat_with(move || name.get()))
    ///     },
    /// );
    /// // `first` was captured when the factory ran, before any input.
    /// let nobody = greet.resume(String::from("ada"));
    /// assert_eq!(nobody, Ok(String::from("nobody")));
    /// let grace = greet.resume(String::from("grace"));
    /// assert_eq!(grace, Ok(String::from("grace")));
    /// ```
    pub fn with_input<F, T>(initial: I, factory: F) -> Self
    where
        F: FnOnce(InputCell<I>) -> T,
        T: IntoIterator<IntoIter = P>,
    {
        let input = InputCell::new(initial);
        let producer = factory(input.share()).into_iter();
        trace!("created resumable computation");
        Resumable {
            input,
            producer,
            current: None,
            alive: true,
        }
    }

    /// Whether the computation can still be resumed.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The last value the producer yielded, or `None` if it has not yielded
    /// anything yet.
    ///
    /// The value is kept after the computation completes.
    pub fn current(&self) -> Option<&P::Item> {
        self.current.as_ref()
    }

    /// Consumes the computation, returning its current value.
    pub fn into_current(self) -> Option<P::Item> {
        self.current
    }

    /// Writes `input` into the input cell and advances the producer by one
    /// step.
    ///
    /// Returns `Ok(true)` if the producer yielded a value, which is then
    /// available from [`current()`](Resumable::current), or `Ok(false)` if
    /// the producer was exhausted. In the latter case the computation is now
    /// completed and the current value is left as it was.
    ///
    /// This is the same step as `resume()`, without requiring the output type
    /// to be `Clone` or `Default`.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::Completed`] if the computation has already
    /// completed. The input is dropped without being written.
    pub fn advance(&mut self, input: I) -> Result<bool> {
        if !self.alive {
            return Err(ResumeError::Completed);
        }
        drop(self.input.replace(input));
        // Cleared first so that a panicking producer leaves us completed.
        self.alive = false;
        match self.producer.next() {
            Some(value) => {
                self.current = Some(value);
                self.alive = true;
                Ok(true)
            }
            None => {
                trace!("resumable computation completed");
                Ok(false)
            }
        }
    }

    /// Resumes the computation with `input` and returns the next value.
    ///
    /// On the step that finds the producer exhausted, the computation
    /// completes and this returns the current value again: the last value
    /// the producer yielded, or `P::Item::default()` if it never yielded
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::Completed`] if the computation has already
    /// completed. Nothing is executed.
    pub fn resume(&mut self, input: I) -> Result<P::Item>
    where
        P::Item: Clone + Default,
    {
        self.advance(input)?;
        Ok(self.current.clone().unwrap_or_default())
    }

    /// Returns an iterator that resumes the computation once for each value
    /// in `inputs`, yielding whatever the producer yields.
    ///
    /// The iterator ends when `inputs` runs out or the computation completes.
    /// The completing step is not reported as an extra item.
    ///
    /// ```rust
    /// use resumable::yield_with;
    ///
    /// let mut total = 0;
    /// let mut running_total = yield_with(move |n: &i32| {
    ///     total += n;
    ///     total
    /// });
    /// let totals: Vec<i32> = running_total.drive([1, 2, 3, 4]).collect();
    /// assert_eq!(totals, vec![1, 3, 6, 10]);
    /// ```
    pub fn drive<J>(&mut self, inputs: J) -> Drive<'_, I, P, J::IntoIter>
    where
        J: IntoIterator<Item = I>,
    {
        Drive::new(self, inputs.into_iter())
    }
}

impl<I, P> fmt::Debug for Resumable<I, P>
where
    I: fmt::Debug,
    P: Iterator,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resumable")
            .field("input", &self.input)
            .field("current", &self.current)
            .field("alive", &self.alive)
            .finish_non_exhaustive()
    }
}
