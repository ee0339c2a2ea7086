use thiserror::Error;

/// The result type returned when stepping a [`Resumable`](crate::Resumable).
pub type Result<T, E = ResumeError> = core::result::Result<T, E>;

/// Errors raised by [`Resumable`](crate::Resumable) itself.
///
/// Failures inside the producer are never translated into this type. A
/// producer that yields `Result` values hands its errors straight to the
/// caller, and a producer that panics unwinds through `resume()` unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeError {
    /// `resume()` was called after the computation had already completed.
    ///
    /// This is always a logic error in the caller. Nothing was executed and
    /// the input was dropped without being written.
    #[error("cannot resume a completed computation")]
    Completed,
}
