// src/failure.rs

//! Classification of the failures a fallible operation may return.
//!
//! Every error type used as the `E` of a shape trait implements [`Failure`].
//! The trait answers two questions for the error wrapper:
//! - may this value cross a trusted boundary as-is (`is_unchecked`)?
//! - if not, how is it erased into a cause (`into_cause`)?
//!
//! Downstream error types opt in with [`checked_failure!`] or
//! [`unchecked_failure!`].

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use crate::errors::WrappedError;

/// Boxed, thread-safe error used as the cause of a [`WrappedError`].
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// A failure a fallible operation may return.
pub trait Failure: fmt::Debug + fmt::Display + Send + 'static {
    /// Whether this value may propagate through a trusted call unchanged.
    ///
    /// Decided per value, so an error enum can mark only some variants.
    /// Erased failures (`Cause`, `anyhow::Error`) cannot see the class of the
    /// error they carry and are always checked: an unchecked error inside one
    /// is wrapped, and stays reachable as the wrapper's cause.
    fn is_unchecked(&self) -> bool {
        false
    }

    /// Erase the failure so it can be held as the cause of a wrapped error.
    fn into_cause(self) -> Cause;
}

/// Implement [`Failure`] for error types that must be wrapped before they
/// cross a trusted boundary.
///
/// The types must be `Error + Send + Sync + 'static`.
#[macro_export]
macro_rules! checked_failure {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Failure for $ty {
                fn into_cause(self) -> $crate::failure::Cause {
                    ::std::boxed::Box::new(self)
                }
            }
        )+
    };
}

/// Implement [`Failure`] for error types that propagate through trusted
/// calls unchanged.
#[macro_export]
macro_rules! unchecked_failure {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Failure for $ty {
                fn is_unchecked(&self) -> bool {
                    true
                }

                fn into_cause(self) -> $crate::failure::Cause {
                    ::std::boxed::Box::new(self)
                }
            }
        )+
    };
}

impl Failure for WrappedError {
    fn is_unchecked(&self) -> bool {
        true
    }

    fn into_cause(self) -> Cause {
        Box::new(self)
    }
}

impl Failure for Cause {
    fn into_cause(self) -> Cause {
        self
    }
}

impl Failure for anyhow::Error {
    fn into_cause(self) -> Cause {
        // Moves the underlying error into a box of its own type, so both a
        // carried WrappedError and the original failure stay downcastable.
        self.reallocate_into_boxed_dyn_error_without_backtrace()
    }
}

impl Failure for Infallible {
    fn into_cause(self) -> Cause {
        match self {}
    }
}

checked_failure!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    std::char::ParseCharError,
    std::net::AddrParseError,
    std::env::VarError,
    std::time::SystemTimeError,
);
