#![forbid(unsafe_code)]

//! Error model for the composition core.
//!
//! The core never recovers from a failure. Precondition violations are
//! reported as [`ToyError::InvalidIndex`]; failures raised by user handlers
//! travel up the combinator chain unchanged as [`ToyError::Handler`].

use std::fmt;

/// Errors produced by the composition core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToyError {
    /// A vector component index outside `0..3`.
    #[error("invalid vector component index {0}")]
    InvalidIndex(usize),
    /// An event handler reported a failure.
    #[error("event handler failed: {0}")]
    Handler(String),
}

impl ToyError {
    /// Build a handler failure from any displayable message.
    pub fn handler(message: impl fmt::Display) -> Self {
        Self::Handler(message.to_string())
    }
}

/// Standard result type for the composition core.
pub type Result<T> = std::result::Result<T, ToyError>;

/// Return values accepted from event handlers.
///
/// Handlers that cannot fail return `()`; fallible ones return a `Result`
/// whose error converts into [`ToyError`].
pub trait HandlerResult {
    fn into_result(self) -> Result<()>;
}

impl HandlerResult for () {
    #[inline]
    fn into_result(self) -> Result<()> {
        Ok(())
    }
}

impl<E: Into<ToyError>> HandlerResult for std::result::Result<(), E> {
    #[inline]
    fn into_result(self) -> Result<()> {
        self.map_err(Into::into)
    }
}
