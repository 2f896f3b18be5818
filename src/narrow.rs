// src/narrow.rs

//! Variance-safe narrowing of operations.
//!
//! A call site may require, say, a `Function<&str, u64, AppError>` while the
//! operation at hand is a `Function<String, u32, ParseIntError>`. The second
//! accepts every input the first is given, produces results that widen into
//! the first's result, and fails only with errors that convert into the
//! first's error. [`CastDown`] is a borrowed view that lets it stand in for
//! the first without copying or wrapping the operation.
//!
//! The compatibility rule is checked at compile time with `Into` bounds:
//! - every target input converts into the source input;
//! - the source result converts into the target result;
//! - the source failure converts into the target failure.
//!
//! With identical parameters each conversion is the identity. The trusted
//! method of a view calls the source's trusted method, so results and raised
//! failures are exactly those of the source.

use std::fmt;
use std::marker::PhantomData;

use crate::failure::Failure;
use crate::shapes::{
    BiConsumer, BiFunction, BiPredicate, Condition, Consumer, Function, Predicate, Runnable,
    Supplier,
};

/// A re-typed view of an operation.
///
/// `Sig` records the source parametrization as a tuple, e.g.
/// `(X0, R0, E0)` for a [`Function`]. The view implements the source's shape
/// for every target parametrization compatible with `Sig`.
pub struct CastDown<'a, Op: ?Sized, Sig> {
    op: &'a Op,
    sig: PhantomData<fn() -> Sig>,
}

impl<'a, Op: ?Sized, Sig> CastDown<'a, Op, Sig> {
    /// The underlying operation, the very same reference the view was made
    /// from.
    pub fn get_ref(&self) -> &'a Op {
        self.op
    }

    fn new(op: &'a Op) -> Self {
        Self {
            op,
            sig: PhantomData,
        }
    }
}

impl<Op: ?Sized, Sig> Clone for CastDown<'_, Op, Sig> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op: ?Sized, Sig> Copy for CastDown<'_, Op, Sig> {}

impl<Op: ?Sized, Sig> fmt::Debug for CastDown<'_, Op, Sig> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastDown")
            .field("op", &std::any::type_name::<Op>())
            .field("sig", &std::any::type_name::<Sig>())
            .finish()
    }
}

/// View a [`Runnable`] under a wider failure type.
pub fn runnable<E, Op>(op: &Op) -> CastDown<'_, Op, (E,)>
where
    Op: Runnable<E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`Consumer`] under any compatible parametrization.
pub fn consumer<X, E, Op>(op: &Op) -> CastDown<'_, Op, (X, E)>
where
    Op: Consumer<X, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`BiConsumer`] under any compatible parametrization.
pub fn bi_consumer<X, Y, E, Op>(op: &Op) -> CastDown<'_, Op, (X, Y, E)>
where
    Op: BiConsumer<X, Y, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`Supplier`] under any compatible parametrization.
pub fn supplier<R, E, Op>(op: &Op) -> CastDown<'_, Op, (R, E)>
where
    Op: Supplier<R, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`Function`] under any compatible parametrization.
///
/// ```
/// use std::num::ParseIntError;
///
/// use rex::{narrow, Function};
///
/// fn lengths(f: &impl Function<&'static str, u64, anyhow::Error>) -> u64 {
///     f.apply("12") + f.apply("345")
/// }
///
/// let parse = |s: &str| -> Result<u32, ParseIntError> { s.parse() };
/// assert_eq!(lengths(&narrow::function(&parse)), 357);
/// ```
pub fn function<X, R, E, Op>(op: &Op) -> CastDown<'_, Op, (X, R, E)>
where
    Op: Function<X, R, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`BiFunction`] under any compatible parametrization.
pub fn bi_function<X, Y, R, E, Op>(op: &Op) -> CastDown<'_, Op, (X, Y, R, E)>
where
    Op: BiFunction<X, Y, R, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`Condition`] under a wider failure type.
pub fn condition<E, Op>(op: &Op) -> CastDown<'_, Op, (E,)>
where
    Op: Condition<E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`Predicate`] under any compatible parametrization.
pub fn predicate<X, E, Op>(op: &Op) -> CastDown<'_, Op, (X, E)>
where
    Op: Predicate<X, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// View a [`BiPredicate`] under any compatible parametrization.
pub fn bi_predicate<X, Y, E, Op>(op: &Op) -> CastDown<'_, Op, (X, Y, E)>
where
    Op: BiPredicate<X, Y, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// [`function`] for an operation from a type to itself.
pub fn unary_op<X, E, Op>(op: &Op) -> CastDown<'_, Op, (X, X, E)>
where
    Op: Function<X, X, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// [`bi_function`] for an operation combining two values of one type.
pub fn binary_op<X, E, Op>(op: &Op) -> CastDown<'_, Op, (X, X, X, E)>
where
    Op: BiFunction<X, X, X, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}

/// [`bi_predicate`] for a relation between two values of one type.
pub fn relation<X, E, Op>(op: &Op) -> CastDown<'_, Op, (X, X, E)>
where
    Op: BiPredicate<X, X, E> + ?Sized,
    E: Failure,
{
    CastDown::new(op)
}
