#![forbid(unsafe_code)]

//! Reactor errors.

use toys_core::ToyError;

/// Boxed backend error.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that stop the reactor.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A widget handler failed.
    #[error(transparent)]
    Toy(#[from] ToyError),
    /// The event source failed.
    #[error("event source failed: {0}")]
    Source(#[source] BackendError),
    /// Presenting a frame failed.
    #[error("presenting frame failed: {0}")]
    Present(#[source] BackendError),
    /// The event source closed before exit was requested.
    #[error("event source closed before exit was requested")]
    SourceClosed,
    /// The configured event budget ran out before exit was requested.
    #[error("event budget of {limit} exhausted before exit was requested")]
    EventBudgetExhausted { limit: u64 },
}

/// Standard result type for the reactor.
pub type Result<T> = std::result::Result<T, RunError>;
