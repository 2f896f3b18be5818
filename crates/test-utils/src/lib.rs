pub mod fixtures;
pub mod raised;

use std::panic;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rex::WrappedError;
use tracing_subscriber::{fmt, EnvFilter};

use crate::fixtures::{Boom, Glitch};

static INIT: Once = Once::new();
static QUIET: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=rex=trace cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Keep the panic hook from reporting failures the tests raise on purpose.
///
/// Payloads other than [`WrappedError`], [`Boom`] and [`Glitch`] still reach
/// the previous hook, so genuine assertion failures are reported as usual.
pub fn quiet_panics() {
    QUIET.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let payload = info.payload();
            if payload.is::<WrappedError>() || payload.is::<Boom>() || payload.is::<Glitch>() {
                return;
            }
            previous(info);
        }));
    });
}

/// Counts invocations of the operations that share it.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
