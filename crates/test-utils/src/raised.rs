//! Catch what a trusted call raises.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use rex::WrappedError;

/// Panic payload of a raised failure.
pub type Payload = Box<dyn Any + Send>;

/// Run `f`, turning an unwind into `Err(payload)`.
pub fn catch_raised<T>(f: impl FnOnce() -> T) -> Result<T, Payload> {
    crate::quiet_panics();
    panic::catch_unwind(AssertUnwindSafe(f))
}

/// Run `f`, expecting it to raise a payload of type `P`.
pub fn expect_raised<P: Any, T: Debug>(f: impl FnOnce() -> T) -> P {
    match catch_raised(f) {
        Ok(value) => panic!("expected a raised failure, got {value:?}"),
        Err(payload) => match payload.downcast::<P>() {
            Ok(raised) => *raised,
            Err(other) => panic!(
                "raised payload is not a {}: {}",
                std::any::type_name::<P>(),
                describe(&*other)
            ),
        },
    }
}

/// Run `f`, expecting it to raise a [`WrappedError`].
pub fn expect_wrapped<T: Debug>(f: impl FnOnce() -> T) -> WrappedError {
    expect_raised::<WrappedError, T>(f)
}

/// Best-effort description of a payload for assertion messages.
pub fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(wrapped) = payload.downcast_ref::<WrappedError>() {
        format!("WrappedError({wrapped})")
    } else {
        "<opaque payload>".to_string()
    }
}
