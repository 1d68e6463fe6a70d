//! Error types surfaced by context-bound operations.

use thiserror::Error;

/// Errors returned when a consumer cannot be bound to a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A selector or dispatch accessor was used in a [`Context`](crate::Context)
    /// that has no enclosing provider.
    #[error("no store provided in this context; wrap the consumer with Context::provider")]
    MissingProvider,
}
