// src/adapt.rs

//! Adapt fallible operations into plain closures.
//!
//! Each function takes an operation by value and returns the closure of the
//! matching standard shape, ready for any API that expects `Fn`. Adapting
//! does not call the operation; every call of the closure calls it once.
//! Declared failures are wrapped and raised as described in
//! [`crate::errors`].
//!
//! To adapt a borrowed operation, pass a view from [`crate::narrow`]:
//! `adapt::function(narrow::function(&op))`.
//!
//! ```
//! use std::num::ParseIntError;
//!
//! let total: u32 = ["1", "2", "3"]
//!     .into_iter()
//!     .map(rex::adapt::function(|s: &str| -> Result<u32, ParseIntError> { s.parse() }))
//!     .sum();
//! assert_eq!(total, 6);
//! ```

use crate::failure::Failure;
use crate::shapes::{
    BiConsumer, BiFunction, BiPredicate, Condition, Consumer, Function, Predicate, Runnable,
    Supplier,
};

/// Adapt an action for `std::thread::spawn` and similar. `Send` and `'static`
/// carry over from `op`.
pub fn runnable<E: Failure>(op: impl Runnable<E>) -> impl Fn() {
    move || op.run()
}

pub fn consumer<X, E: Failure>(op: impl Consumer<X, E>) -> impl Fn(X) {
    move |x| op.accept(x)
}

pub fn bi_consumer<X, Y, E: Failure>(op: impl BiConsumer<X, Y, E>) -> impl Fn(X, Y) {
    move |x, y| op.accept(x, y)
}

/// Suits `std::iter::repeat_with` and `Option::unwrap_or_else`.
pub fn supplier<R, E: Failure>(op: impl Supplier<R, E>) -> impl Fn() -> R {
    move || op.get()
}

pub fn function<X, R, E: Failure>(op: impl Function<X, R, E>) -> impl Fn(X) -> R {
    move |x| op.apply(x)
}

pub fn bi_function<X, Y, R, E: Failure>(op: impl BiFunction<X, Y, R, E>) -> impl Fn(X, Y) -> R {
    move |x, y| op.apply(x, y)
}

pub fn condition<E: Failure>(op: impl Condition<E>) -> impl Fn() -> bool {
    move || op.test()
}

/// Suits APIs that pass the item by value, such as `Iterator::any`. The
/// returned closure is not generic over lifetimes, so `Iterator::filter`
/// wants `|x| op.test(*x)` instead.
pub fn predicate<X, E: Failure>(op: impl Predicate<X, E>) -> impl Fn(X) -> bool {
    move |x| op.test(x)
}

pub fn bi_predicate<X, Y, E: Failure>(op: impl BiPredicate<X, Y, E>) -> impl Fn(X, Y) -> bool {
    move |x, y| op.test(x, y)
}

/// Same as [`function`] for an operation from a type to itself.
pub fn unary_op<X, E: Failure>(op: impl Function<X, X, E>) -> impl Fn(X) -> X {
    function(op)
}

/// Same as [`bi_function`] for an operation combining two values of one
/// type, e.g. as the closure of `Iterator::reduce`.
pub fn binary_op<X, E: Failure>(op: impl BiFunction<X, X, X, E>) -> impl Fn(X, X) -> X {
    bi_function(op)
}

/// Same as [`bi_predicate`] for a relation between two values of one type.
/// Comparators taking `&T` run into the lifetime limit described on
/// [`predicate`].
pub fn relation<X, E: Failure>(op: impl BiPredicate<X, X, E>) -> impl Fn(X, X) -> bool {
    bi_predicate(op)
}
