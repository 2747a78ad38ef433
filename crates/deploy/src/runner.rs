//! Sequential statement execution loop.
//!
//! Every statement is attempted, in order, each call awaited before the
//! next one starts. Failures are counted and reported, never fatal.

use std::io::Write;

use async_trait::async_trait;
use supadeploy_core::outcome::{classify, DeploySummary, Outcome};
use supadeploy_core::statements::preview;

use crate::rpc::RpcError;

/// Something that can execute a single SQL statement remotely.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<(), RpcError>;
}

/// Execute `statements` one by one, writing progress to `out`.
pub async fn execute_all<E, W>(
    executor: &E,
    statements: &[String],
    out: &mut W,
) -> std::io::Result<DeploySummary>
where
    E: SqlExecutor + ?Sized,
    W: Write,
{
    let total = statements.len();
    let mut summary = DeploySummary::default();

    for (index, statement) in statements.iter().enumerate() {
        let position = index + 1;
        writeln!(out, "[{position}/{total}] {}", preview(statement))?;

        let outcome = match executor.execute(statement).await {
            Ok(()) => Outcome::Ok,
            Err(e) => {
                let message = e.to_string();
                let outcome = classify(&message);
                tracing::debug!(
                    position,
                    total,
                    ?outcome,
                    status = e.status(),
                    code = e.code(),
                    error = %message,
                    "Statement returned an error",
                );
                if outcome == Outcome::Failed {
                    writeln!(out, "  ⚠️ {message}\n")?;
                }
                outcome
            }
        };

        if outcome != Outcome::Failed {
            writeln!(out, "  ✓ OK\n")?;
        }
        summary.record(outcome);
    }

    Ok(summary)
}
