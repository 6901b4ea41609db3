//! Stress harness: two independent tasks, each owning a private connection
//! and command, hammering the same table until a shared cancellation signal
//! fires. Run with `cargo run --example stress`.

use indoc::indoc;
use log::{LevelFilter, info, warn};
use quay::{Command, Connection, ErrorCheckMode, ExecutionPolicy};
use quay_memory::MemoryConnection;
use std::{env, time::Duration};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

const SERVER_URL: &str = "memory://stress";
const TABLE_NAME: &str = "vol_table";
const RUN_FOR: Duration = Duration::from_secs(12);
const CADENCE: Duration = Duration::from_millis(100);

fn init_logs() {
    let mut logger = env_logger::builder();
    logger.format_file(true).format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Info);
    }
    let _ = logger.try_init();
}

async fn select_task(token: CancellationToken) -> quay::Result<()> {
    let mut connection = MemoryConnection::connect(SERVER_URL).await?;
    let policy = ExecutionPolicy::new(ErrorCheckMode::Fail);
    let mut i = 0u32;
    while !token.is_cancelled() {
        let mut command = Command::new(format!(
            "SELECT * FROM {TABLE_NAME} WHERE tagid = @id LIMIT 1"
        ));
        command
            .parameters_mut()
            .add_with_value("id", format!("TAG-{:02}", i % 30));
        let rows = policy.fetch_all(&mut connection, &command).await?;
        match rows.first() {
            Some(row) => info!("select: {:?}", row.values()),
            None => info!("select: nothing to select"),
        }
        i += 1;
        sleep(CADENCE).await;
    }
    connection.close().await
}

async fn upsert_task(token: CancellationToken) -> quay::Result<()> {
    let mut connection = MemoryConnection::connect(SERVER_URL).await?;
    let policy = ExecutionPolicy::new(ErrorCheckMode::Retry);
    let mut i = 0u32;
    while !token.is_cancelled() {
        let mut command = Command::new(format!(
            "INSERT INTO {TABLE_NAME} VALUES (@id) ON DUPLICATE KEY UPDATE"
        ));
        command
            .parameters_mut()
            .add_with_value("id", format!("TAG-{:02}", i % 30));
        let report = policy.execute(&mut connection, &command).await?;
        if !report.succeeded {
            warn!("upsert exhausted its retry budget after {} attempts", report.attempts);
        }
        i += 1;
        sleep(CADENCE).await;
    }
    connection.close().await
}

#[tokio::main]
async fn main() -> quay::Result<()> {
    init_logs();

    let mut connection = MemoryConnection::connect(SERVER_URL).await?;
    ExecutionPolicy::new(ErrorCheckMode::Ignore)
        .execute(&mut connection, &Command::new(format!("DROP TABLE {TABLE_NAME}")))
        .await?;
    ExecutionPolicy::new(ErrorCheckMode::Retry)
        .execute(
            &mut connection,
            &Command::new(indoc! {"
                CREATE LOOKUP TABLE vol_table (tagid VARCHAR(100) PRIMARY KEY)
            "}),
        )
        .await?;
    connection.close().await?;

    let token = CancellationToken::new();
    info!("tasks are starting up, running for {RUN_FOR:?}");
    let select = tokio::spawn(select_task(token.clone()));
    let upsert = tokio::spawn(upsert_task(token.clone()));

    sleep(RUN_FOR).await;
    info!("tasks are shutting down");
    token.cancel();
    select.await.expect("select task panicked")?;
    upsert.await.expect("upsert task panicked")?;
    Ok(())
}
