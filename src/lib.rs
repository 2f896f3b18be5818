// src/lib.rs

//! Use operations that declare their failures wherever a plain closure is
//! expected.
//!
//! A *fallible* operation returns `Result<_, E>`. Each of the nine operation
//! shapes in [`shapes`] pairs its fallible method with a *trusted* one that
//! has the plain signature: it returns the value on success and otherwise
//! raises the failure after passing it through [`wrap_failure`]:
//! - failures classified unchecked (see [`Failure`]) propagate unchanged;
//! - every other failure is raised inside a [`WrappedError`] whose cause is
//!   the original failure.
//!
//! Raising unwinds with the failure as the panic payload, so a caller that
//! needs to inspect it uses `std::panic::catch_unwind` and downcasts.
//!
//! - [`adapt`] turns an operation into an `impl Fn` of the same shape.
//! - [`invoke`] calls an operation once as if it were trusted.
//! - [`narrow`] views an operation under a compatible, stricter
//!   parametrization without copying it.
//!
//! ```
//! use std::num::ParseIntError;
//!
//! use rex::Function;
//!
//! let with_hex = |x: &str| -> Result<String, ParseIntError> {
//!     Ok(format!("{x}{:x}", x.parse::<u64>()?))
//! };
//! assert_eq!(with_hex.apply("255"), "255ff");
//! ```

pub mod adapt;
pub mod errors;
pub mod failure;
pub mod invoke;
pub mod logging;
pub mod narrow;
pub mod shapes;

pub use errors::{wrap, wrap_failure, Unchecked, WrappedError};
pub use failure::Failure;
pub use narrow::CastDown;
pub use shapes::{
    BiConsumer, BiFunction, BiPredicate, Condition, Consumer, Function, Predicate, Runnable,
    Supplier,
};
