// src/shapes/predicate.rs

//! Boolean tests over zero, one or two values.

operation_shape! {
    /// A boolean test with no input.
    ///
    /// Trusted form: `Fn() -> bool`.
    Condition() -> bool;
    checked_test / test
}

operation_shape! {
    /// A boolean test of one value.
    ///
    /// Trusted form: `Fn(X) -> bool`.
    Predicate(x: X => X0) -> bool;
    checked_test / test
}

operation_shape! {
    /// A boolean relation between two values.
    ///
    /// Trusted form: `Fn(X, Y) -> bool`.
    BiPredicate(x: X => X0, y: Y => Y0) -> bool;
    checked_test / test
}
