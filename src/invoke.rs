// src/invoke.rs

//! Invoke a fallible operation as if it were trusted.
//!
//! [`invoke_with`] holds the one rule every trusted method follows. The
//! remaining functions call an operation once with the given arguments;
//! `invoke::function(&op, x)` is the same as `adapt::function(op)(x)`,
//! minus taking ownership of `op`.

use crate::errors::wrap_failure;
use crate::failure::Failure;
use crate::shapes::{
    BiConsumer, BiFunction, BiPredicate, Condition, Consumer, Function, Predicate, Runnable,
    Supplier,
};

/// Run `call`; return its value, or wrap its failure and raise it.
pub fn invoke_with<R, E: Failure>(call: impl FnOnce() -> Result<R, E>) -> R {
    match call() {
        Ok(value) => value,
        Err(failure) => wrap_failure(failure).raise(),
    }
}

pub fn runnable<E: Failure>(op: &(impl Runnable<E> + ?Sized)) {
    op.run()
}

pub fn consumer<X, E: Failure>(op: &(impl Consumer<X, E> + ?Sized), x: X) {
    op.accept(x)
}

pub fn bi_consumer<X, Y, E: Failure>(op: &(impl BiConsumer<X, Y, E> + ?Sized), x: X, y: Y) {
    op.accept(x, y)
}

pub fn supplier<R, E: Failure>(op: &(impl Supplier<R, E> + ?Sized)) -> R {
    op.get()
}

pub fn function<X, R, E: Failure>(op: &(impl Function<X, R, E> + ?Sized), x: X) -> R {
    op.apply(x)
}

pub fn bi_function<X, Y, R, E: Failure>(
    op: &(impl BiFunction<X, Y, R, E> + ?Sized),
    x: X,
    y: Y,
) -> R {
    op.apply(x, y)
}

pub fn condition<E: Failure>(op: &(impl Condition<E> + ?Sized)) -> bool {
    op.test()
}

pub fn predicate<X, E: Failure>(op: &(impl Predicate<X, E> + ?Sized), x: X) -> bool {
    op.test(x)
}

pub fn bi_predicate<X, Y, E: Failure>(op: &(impl BiPredicate<X, Y, E> + ?Sized), x: X, y: Y) -> bool {
    op.test(x, y)
}
