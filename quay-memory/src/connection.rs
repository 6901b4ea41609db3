use anyhow::anyhow;
use quay_core::{
    Command, Connection, ConnectionState, Error, Result, RowLabeled, RowsAffected, Value,
    stream::{self, Stream},
};
use std::collections::VecDeque;
use url::Url;

const URL_PREFIX: &str = "memory://";

/// One statement the connection accepted, with a snapshot of its bindings.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub text: String,
    pub values: Vec<(String, Value)>,
}

/// An in-memory connection with scriptable faults.
///
/// The handle starts `Closed`; the first `open` establishes it. Faults can
/// be injected through the URL (`memory://host?fail_open=N` makes the first
/// N opens fail) or through [`fail_executions`](Self::fail_executions) and
/// [`break_connection`](Self::break_connection). Accepted statements are
/// journaled together with a snapshot of their bound values, and rows queued
/// via [`push_row`](Self::push_row) are served by the next `fetch`.
pub struct MemoryConnection {
    endpoint: String,
    state: ConnectionState,
    failing_opens: u32,
    failing_executions: u32,
    open_attempts: u32,
    execution_attempts: u32,
    pending_rows: VecDeque<RowLabeled>,
    journal: Vec<JournalEntry>,
}

impl MemoryConnection {
    /// Make the next `n` statement dispatches fail.
    pub fn fail_executions(&mut self, n: u32) {
        self.failing_executions = n;
    }

    /// Make the next `n` opens fail.
    pub fn fail_opens(&mut self, n: u32) {
        self.failing_opens = n;
    }

    /// Force the handle into the `Broken` state.
    pub fn break_connection(&mut self) {
        self.state = ConnectionState::Broken;
    }

    /// Queue a row to be served by the next `fetch`.
    pub fn push_row(&mut self, row: RowLabeled) {
        self.pending_rows.push_back(row);
    }

    /// Opens tried so far, successful or not.
    pub fn open_attempts(&self) -> u32 {
        self.open_attempts
    }

    /// Statements dispatched so far, successful or not.
    pub fn execution_attempts(&self) -> u32 {
        self.execution_attempts
    }

    /// Statements accepted so far, oldest first.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    fn dispatch(&mut self, command: &Command) -> Result<()> {
        if self.state.needs_reopen() {
            return Err(Error::connection_unavailable(anyhow!(
                "connection to `{}` is {:?}",
                self.endpoint,
                self.state
            )));
        }
        self.execution_attempts += 1;
        if self.failing_executions > 0 {
            self.failing_executions -= 1;
            let error = Error::statement_execution(anyhow!("injected statement failure"));
            log::error!("{error}");
            return Err(error);
        }
        self.journal.push(JournalEntry {
            text: command.text().to_owned(),
            values: command
                .parameters()
                .iter()
                .map(|p| (p.name().to_owned(), p.value().clone()))
                .collect(),
        });
        Ok(())
    }
}

impl Connection for MemoryConnection {
    async fn connect(url: &str) -> Result<MemoryConnection> {
        if !url.starts_with(URL_PREFIX) {
            let error = Error::invalid_argument(format!(
                "expected memory connection url to start with `{URL_PREFIX}`, got `{url}`"
            ));
            log::error!("{error}");
            return Err(error);
        }
        let parsed = Url::parse(url)
            .map_err(|e| Error::invalid_argument(format!("could not parse `{url}`: {e}")))?;
        let mut failing_opens = 0;
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                "fail_open" => {
                    failing_opens = value.parse().map_err(|e| {
                        Error::invalid_argument(format!("bad fail_open value `{value}`: {e}"))
                    })?;
                }
                other => {
                    return Err(Error::invalid_argument(format!(
                        "unknown connection parameter `{other}`"
                    )));
                }
            }
        }
        Ok(Self {
            endpoint: url.to_owned(),
            state: ConnectionState::Closed,
            failing_opens,
            failing_executions: 0,
            open_attempts: 0,
            execution_attempts: 0,
            pending_rows: VecDeque::new(),
            journal: Vec::new(),
        })
    }

    fn state(&self) -> ConnectionState {
        self.state
    }

    async fn open(&mut self) -> Result<()> {
        self.open_attempts += 1;
        if self.failing_opens > 0 {
            self.failing_opens -= 1;
            return Err(Error::connection_unavailable(anyhow!(
                "injected open failure for `{}`",
                self.endpoint
            )));
        }
        self.state = ConnectionState::Open;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.state = ConnectionState::Closed;
        Ok(())
    }

    async fn execute(&mut self, command: &Command) -> Result<RowsAffected> {
        self.dispatch(command)?;
        // The journal position of the accepted statement doubles as the
        // backend identifier.
        Ok(RowsAffected {
            rows_affected: 1,
            last_affected_id: Some(self.journal.len() as i64),
        })
    }

    fn fetch(&mut self, command: &Command) -> impl Stream<Item = Result<RowLabeled>> + Send {
        let items = match self.dispatch(command) {
            Ok(()) => self.pending_rows.drain(..).map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        };
        stream::iter(items)
    }
}
