// src/errors.rs

//! The error wrapper: one rule for turning a declared failure into one that
//! may cross a trusted boundary.
//!
//! - [`WrappedError`] holds exactly one checked cause and mirrors its message.
//! - [`wrap_failure`] passes unchecked failures through untouched and wraps
//!   everything else exactly once.
//! - [`wrap`] is the same rule lifted over the "no failure" case.

use std::error::Error as StdError;
use std::panic;

use thiserror::Error;
use tracing::{debug, trace};

use crate::failure::{Cause, Failure};

/// Unchecked error carrying a checked failure as its cause.
///
/// Only [`wrap_failure`] creates these. The message is the cause's
/// `Display` output at the time of wrapping.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct WrappedError {
    message: String,
    #[source]
    cause: Cause,
}

impl WrappedError {
    fn new(message: String, cause: Cause) -> Self {
        Self { message, cause }
    }

    /// The message, identical to the cause's message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The checked failure this error was created for.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Borrow the cause as a concrete type, if it is one.
    pub fn downcast_cause_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.cause.downcast_ref::<T>()
    }

    /// Give up the wrapper and return the original cause.
    pub fn into_cause(self) -> Cause {
        self.cause
    }
}

/// Outcome of wrapping a failure.
#[derive(Debug)]
pub enum Unchecked<E> {
    /// The failure was already unchecked and is returned as-is.
    Passed(E),
    /// The failure was checked and now lives inside a [`WrappedError`].
    Wrapped(WrappedError),
}

impl<E: Failure> Unchecked<E> {
    /// Whether the failure had to be wrapped.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Unchecked::Wrapped(_))
    }

    /// Borrow the wrapper, if the failure was wrapped.
    pub fn as_wrapped(&self) -> Option<&WrappedError> {
        match self {
            Unchecked::Wrapped(wrapped) => Some(wrapped),
            Unchecked::Passed(_) => None,
        }
    }

    /// The wrapper, if the failure was wrapped.
    pub fn into_wrapped(self) -> Option<WrappedError> {
        match self {
            Unchecked::Wrapped(wrapped) => Some(wrapped),
            Unchecked::Passed(_) => None,
        }
    }

    /// The original failure, if it passed through.
    pub fn into_passed(self) -> Option<E> {
        match self {
            Unchecked::Passed(failure) => Some(failure),
            Unchecked::Wrapped(_) => None,
        }
    }

    /// Unwind with the held value as the panic payload.
    ///
    /// A caller catching the unwind downcasts the payload to `E` (passed
    /// through) or to [`WrappedError`].
    pub fn raise(self) -> ! {
        match self {
            Unchecked::Passed(failure) => {
                trace!(%failure, "raising unchecked failure");
                panic::panic_any(failure)
            }
            Unchecked::Wrapped(wrapped) => {
                trace!(message = %wrapped, "raising wrapped failure");
                panic::panic_any(wrapped)
            }
        }
    }
}

/// Wrap a failure unless it is already unchecked.
///
/// Unchecked failures (including [`WrappedError`]) come back unchanged in
/// [`Unchecked::Passed`]. Checked failures are wrapped once; a checked
/// failure whose erased cause is itself a [`WrappedError`] yields that
/// error rather than a nested one.
pub fn wrap_failure<E: Failure>(failure: E) -> Unchecked<E> {
    if failure.is_unchecked() {
        trace!(%failure, "unchecked failure passes through");
        return Unchecked::Passed(failure);
    }

    let message = failure.to_string();
    match failure.into_cause().downcast::<WrappedError>() {
        Ok(wrapped) => Unchecked::Wrapped(*wrapped),
        Err(cause) => {
            debug!(%message, "wrapping checked failure");
            Unchecked::Wrapped(WrappedError::new(message, cause))
        }
    }
}

/// [`wrap_failure`] over an optional failure; `None` stays `None`.
pub fn wrap<E: Failure>(failure: Option<E>) -> Option<Unchecked<E>> {
    failure.map(wrap_failure)
}
