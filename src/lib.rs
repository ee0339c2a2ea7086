//! The `resumable` crate turns an ordinary lazy iterator into a computation
//! you can talk to.
//!
//! A *resumable computation* is driven one step at a time. Each step passes
//! an input value *in* and gets the next produced value *out*. The logic that
//! produces the values is a plain [`Iterator`] (the *producer*), built by a
//! factory that receives an [`InputCell`]: a read-only handle to the input of
//! the current step.
//!
//! ```rust
//! use resumable::InputCell;
//! use resumable::Resumable;
//!
//! // Keeps a running total of everything it has been given.
//! let mut total = Resumable::new(|input: InputCell<i32>| {
//!     let mut sum = 0;
//!     core::iter::from_fn(move || {
//!         sum += input.get();
//!         Some(sum)
//!     })
//! });
//! assert_eq!(total.resume(2), Ok(2));
//! assert_eq!(total.resume(3), Ok(5));
//! assert_eq!(total.resume(-5), Ok(0));
//! ```
//!
//! The producer never runs on its own. Building the computation only calls
//! the factory; every bit of producer logic after that runs synchronously
//! inside [`Resumable::resume()`], on the caller's thread, from where the
//! producer last yielded up to where it yields next. Because the input is
//! written before the producer is advanced, the producer always sees the
//! value passed to the `resume()` call that is running it.
//!
//! ## Completion
//!
//! When the producer runs out of values, the computation *completes*. The
//! step that discovers this returns the last value the producer yielded one
//! more time and flips [`Resumable::is_alive()`] to `false`, so callers get
//! the final value together with the news that there will be no more. After
//! that, `resume()` fails with [`ResumeError::Completed`].
//!
//! If you'd rather not clone outputs, use [`Resumable::advance()`], which
//! reports whether a value was produced and leaves it in
//! [`Resumable::current()`].
//!
//! ## Stopping early
//!
//! There is no way to cancel a computation from the outside other than to
//! stop resuming it. To let a caller ask the producer to stop, pick an input
//! that means "stop" and have the producer end its iteration when it sees it.
//! [`from_control_flow()`] makes this easy:
//!
//! ```rust
//! use core::ops::ControlFlow;
//!
//! use resumable::from_control_flow;
//!
//! let mut echo = from_control_flow(|line: &String| {
//!     if line == "quit" {
//!         ControlFlow::Break(())
//!     } else {
//!         ControlFlow::Continue(line.len())
//!     }
//! });
//! assert_eq!(echo.resume("hello".to_string()), Ok(5));
//! assert_eq!(echo.resume("quit".to_string()), Ok(5));
//! assert!(!echo.is_alive());
//! ```
//!
//! ## Relationship to other coroutines
//!
//! The standard library's `Coroutine` trait is still unstable and requires
//! pinning. A `Resumable` gets by with stable iterators because the producer
//! never needs to borrow from itself across a step: everything it needs to
//! remember lives in the iterator's own state, and the input arrives through
//! the shared cell.
#![no_std]

extern crate alloc;

mod assertions;
mod drive;
mod error;
mod from_control_flow;
mod input;
mod resumable;
mod yield_with;

pub use assertions::ResumeAssertions;
pub use drive::Drive;
pub use error::Result;
pub use error::ResumeError;
pub use from_control_flow::FromControlFlow;
pub use from_control_flow::from_control_flow;
pub use input::InputCell;
pub use resumable::Resumable;
pub use yield_with::YieldWith;
pub use yield_with::yield_with;

#[cfg(test)]
mod test;
