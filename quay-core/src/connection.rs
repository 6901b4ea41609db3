use crate::{Command, Result, RowLabeled, RowsAffected};
use futures::Stream;
use std::future::Future;

/// Driver-reported state of a connection handle.
///
/// The exact set is driver-defined; this layer only distinguishes usable
/// from needs-reopening via [`ConnectionState::needs_reopen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Closed,
    Broken,
    Connecting,
    Executing,
}

impl ConnectionState {
    /// Whether a statement cannot be issued without reopening first.
    pub fn needs_reopen(self) -> bool {
        matches!(self, ConnectionState::Closed | ConnectionState::Broken)
    }
}

/// A single database connection owned by one flow of execution.
///
/// A connection and the commands bound to it are not safe for concurrent
/// use: each task owns a private connection, coordinated with others only
/// through an external stop signal.
pub trait Connection: Send {
    /// Build a connection handle for the given URL.
    fn connect(url: &str) -> impl Future<Output = Result<Self>> + Send
    where
        Self: Sized;

    fn state(&self) -> ConnectionState;

    /// (Re)establish the underlying handle. Fails with
    /// [`ConnectionUnavailable`](crate::Error::ConnectionUnavailable) when
    /// the target is unreachable or rejects the credentials.
    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Run a statement that yields no rows, returning the modify metadata.
    fn execute(&mut self, command: &Command) -> impl Future<Output = Result<RowsAffected>> + Send;

    /// Run a statement and return its forward-only row cursor.
    fn fetch(&mut self, command: &Command) -> impl Stream<Item = Result<RowLabeled>> + Send;
}
