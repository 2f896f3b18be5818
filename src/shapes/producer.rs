// src/shapes/producer.rs

//! Shapes that produce a value.
//!
//! While not enforced, repeated invocation with equal inputs is expected to
//! yield equal results.

operation_shape! {
    /// A source of values. A new or distinct value per call is not required.
    ///
    /// Trusted form: `Fn() -> R`.
    Supplier() -> R <= R0;
    checked_get / get
}

operation_shape! {
    /// Maps one argument to a result.
    ///
    /// Trusted form: `Fn(X) -> R`.
    Function(x: X => X0) -> R <= R0;
    checked_apply / apply
}

operation_shape! {
    /// Maps two arguments to a result.
    ///
    /// Trusted form: `Fn(X, Y) -> R`.
    BiFunction(x: X => X0, y: Y => Y0) -> R <= R0;
    checked_apply / apply
}
