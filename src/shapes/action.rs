// src/shapes/action.rs

//! Shapes that exist for their side effects.
//!
//! Invoking an action usually has side effects. Invoking it again may or may
//! not repeat them.

operation_shape! {
    /// A task with no input, e.g. the body of a thread.
    ///
    /// Trusted form: `Fn()`.
    Runnable() -> ();
    checked_run / run
}

operation_shape! {
    /// An operation on one input value.
    ///
    /// Trusted form: `Fn(X)`.
    Consumer(x: X => X0) -> ();
    checked_accept / accept
}

operation_shape! {
    /// An operation on two input values, e.g. a key and its value.
    ///
    /// Trusted form: `Fn(X, Y)`.
    BiConsumer(x: X => X0, y: Y => Y0) -> ();
    checked_accept / accept
}
