use crate::{Command, Connection, Error, Result, RowLabeled};
use futures::TryStreamExt;

/// Caller-selected disposition for statement-execution failures.
///
/// Supplied per call, never global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCheckMode {
    /// Propagate the failure immediately, aborting all further attempts.
    #[default]
    Fail,
    /// Log the failure and continue as if the attempt succeeded.
    Warn,
    /// Keep attempting until success or the attempt budget is exhausted.
    Retry,
    /// Suppress the failure entirely.
    Ignore,
}

/// Passes through the attempt loop before giving up.
pub const ATTEMPT_BUDGET: u32 = 5;

/// Outcome of one checked execution.
///
/// Under [`ErrorCheckMode::Retry`] an exhausted budget does not surface an
/// error; this report is the side channel that tells exhaustion apart from
/// success. `attempts` counts statement dispatches only, connection repairs
/// are not included.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub attempts: u32,
    pub succeeded: bool,
    pub rows_affected: u64,
    pub last_error: Option<Error>,
}

/// Wraps one logical statement execution with connection-health
/// verification, a bounded retry loop and a per-mode failure disposition.
///
/// Every pass first verifies the connection is live and reopens it when it
/// is not. A failed reopen abandons the pass without counting it as a
/// statement failure: connection-open failures are a distinct class,
/// repaired transparently inside the loop. Statement failures are dispatched
/// per [`ErrorCheckMode`]; only `Fail` guarantees propagation to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionPolicy {
    mode: ErrorCheckMode,
}

impl ExecutionPolicy {
    pub fn new(mode: ErrorCheckMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ErrorCheckMode {
        self.mode
    }

    /// Run a statement that yields no rows (the non-query path).
    pub async fn execute<C: Connection>(
        &self,
        connection: &mut C,
        command: &Command,
    ) -> Result<ExecutionReport> {
        let mut report = ExecutionReport::default();
        let mut open_failure = None;
        for _pass in 0..ATTEMPT_BUDGET {
            if let Err(e) = reopen_if_needed(connection).await {
                log::warn!("could not repair connection for `{command}`: {e}");
                open_failure = Some(e);
                continue;
            }
            open_failure = None;
            report.attempts += 1;
            match connection.execute(command).await {
                Ok(affected) => {
                    report.succeeded = true;
                    report.rows_affected = affected.rows_affected;
                    return Ok(report);
                }
                Err(e) => match self.mode {
                    ErrorCheckMode::Fail => return Err(e),
                    ErrorCheckMode::Warn => {
                        log::warn!("statement `{command}` failed, continuing: {e}");
                        report.last_error = Some(e);
                        return Ok(report);
                    }
                    ErrorCheckMode::Ignore => {
                        report.last_error = Some(e);
                        return Ok(report);
                    }
                    ErrorCheckMode::Retry => {
                        log::warn!("statement `{command}` failed, will retry: {e}");
                        report.last_error = Some(e);
                    }
                },
            }
        }
        self.exhausted(report, open_failure)
    }

    /// Run a statement and drain its row cursor (the reader path).
    ///
    /// Same loop as [`execute`](Self::execute); under `Warn`/`Ignore` (and
    /// under `Retry` once the budget is exhausted) a failing statement
    /// yields an empty row set instead of an error.
    pub async fn fetch_all<C: Connection>(
        &self,
        connection: &mut C,
        command: &Command,
    ) -> Result<Vec<RowLabeled>> {
        let mut open_failure = None;
        for _pass in 0..ATTEMPT_BUDGET {
            if let Err(e) = reopen_if_needed(connection).await {
                log::warn!("could not repair connection for `{command}`: {e}");
                open_failure = Some(e);
                continue;
            }
            open_failure = None;
            match connection.fetch(command).try_collect().await {
                Ok(rows) => return Ok(rows),
                Err(e) => match self.mode {
                    ErrorCheckMode::Fail => return Err(e),
                    ErrorCheckMode::Warn => {
                        log::warn!("statement `{command}` failed, continuing: {e}");
                        return Ok(Vec::new());
                    }
                    ErrorCheckMode::Ignore => return Ok(Vec::new()),
                    ErrorCheckMode::Retry => {
                        log::warn!("statement `{command}` failed, will retry: {e}");
                    }
                },
            }
        }
        if let Some(e) = open_failure {
            if self.mode == ErrorCheckMode::Fail {
                return Err(e);
            }
            log::warn!("giving up on `{command}`: {e}");
        }
        Ok(Vec::new())
    }

    /// The loop ran out of passes. Retry exhaustion ends without raising;
    /// the report is the only failure signal. A connection that never became
    /// usable still propagates under `Fail`.
    fn exhausted(
        &self,
        mut report: ExecutionReport,
        open_failure: Option<Error>,
    ) -> Result<ExecutionReport> {
        if let Some(e) = open_failure {
            if self.mode == ErrorCheckMode::Fail {
                return Err(e);
            }
            log::warn!("giving up after {ATTEMPT_BUDGET} passes: {e}");
            report.last_error = Some(e);
        }
        Ok(report)
    }
}

async fn reopen_if_needed<C: Connection>(connection: &mut C) -> Result<()> {
    if !connection.state().needs_reopen() {
        return Ok(());
    }
    connection.open().await.map_err(|e| match e {
        e @ Error::ConnectionUnavailable(..) => e,
        other => Error::connection_unavailable(anyhow::Error::new(other)),
    })
}
