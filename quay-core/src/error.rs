use std::result;

pub type Result<T> = result::Result<T, Error>;

/// Failure classes surfaced by this layer.
///
/// Collection lookup errors (`InvalidArgument`, `IndexOutOfRange`) always
/// propagate to the caller. Execution errors carry their driver-reported
/// cause and are filtered through the [`ErrorCheckMode`] of the policy that
/// dispatched the statement.
///
/// [`ErrorCheckMode`]: crate::ErrorCheckMode
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown name passed to a named accessor, or an otherwise unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Positional access beyond the current bounds of the collection.
    #[error("index {index} is out of range for a collection of {len} parameters")]
    IndexOutOfRange { index: usize, len: usize },

    /// The connection could not be opened or reopened. Recoverable by retry.
    #[error("connection unavailable: {0:#}")]
    ConnectionUnavailable(#[source] anyhow::Error),

    /// The driver rejected the statement (syntax, constraint, type mismatch).
    #[error("statement execution failed: {0:#}")]
    StatementExecution(#[source] anyhow::Error),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn connection_unavailable(cause: impl Into<anyhow::Error>) -> Self {
        Error::ConnectionUnavailable(cause.into())
    }

    pub fn statement_execution(cause: impl Into<anyhow::Error>) -> Self {
        Error::StatementExecution(cause.into())
    }

    /// Whether reopening the connection can repair this failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ConnectionUnavailable(..))
    }
}
