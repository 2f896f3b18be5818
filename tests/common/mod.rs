#![allow(dead_code)]

use std::cell::Cell;

pub use rex_test_utils::fixtures::{Boom, Glitch, Mixed};
pub use rex_test_utils::raised::{catch_raised, describe, expect_raised, expect_wrapped};
pub use rex_test_utils::CallCounter;

/// Tracing for the test binary, and a panic hook that stays quiet about
/// failures raised on purpose.
pub fn setup() {
    rex_test_utils::init_tracing();
    rex_test_utils::quiet_panics();
}

/// A fresh checked failure whose id is recorded in `seen`.
pub fn boom(seen: &Cell<u64>) -> Boom {
    let failure = Boom::new("boom");
    seen.set(failure.id());
    failure
}

/// A fresh unchecked failure whose id is recorded in `seen`.
pub fn glitch(seen: &Cell<u64>) -> Glitch {
    let failure = Glitch::new("glitch");
    seen.set(failure.id());
    failure
}

/// Assert `wrapped` holds the `Boom` last recorded in `seen`.
pub fn assert_wraps_boom(wrapped: &rex::WrappedError, seen: &Cell<u64>) {
    let cause = wrapped
        .downcast_cause_ref::<Boom>()
        .expect("cause should be the original Boom");
    assert_eq!(cause.id(), seen.get(), "cause is a different Boom");
    assert_eq!(wrapped.message(), "boom");
}
