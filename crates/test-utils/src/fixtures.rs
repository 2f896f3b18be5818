//! Failure types with observable identity.
//!
//! Neither type is `Clone`, and every constructed value gets a fresh id, so
//! two values with the same id are the same value moved around.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A checked failure: always wrapped at a trusted boundary.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct Boom {
    id: u64,
    message: String,
}

impl Boom {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// An unchecked failure: passes through trusted boundaries unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("glitch: {message}")]
pub struct Glitch {
    id: u64,
    message: String,
}

impl Glitch {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// A failure enum where only one variant is unchecked.
#[derive(Error, Debug)]
pub enum Mixed {
    #[error("declared: {0}")]
    Declared(String),
    #[error("runtime: {0}")]
    Runtime(String),
}

rex::checked_failure!(Boom);
rex::unchecked_failure!(Glitch);

impl rex::Failure for Mixed {
    fn is_unchecked(&self) -> bool {
        matches!(self, Mixed::Runtime(_))
    }

    fn into_cause(self) -> rex::failure::Cause {
        Box::new(self)
    }
}
