//! `supadeploy` -- push a SQL schema file to a Supabase project.
//!
//! Reads credentials from `.env.production`, splits the schema file on
//! `;` and runs every statement through the `exec_sql` database
//! function. Existence conflicts (`already exists`, `does not exist`)
//! count as success so the schema can be re-applied.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default                              | Description                      |
//! |---------------------------|----------|--------------------------------------|----------------------------------|
//! | `SUPADEPLOY_ENV_FILE`     | no       | `.env.production`                    | File holding the Supabase keys   |
//! | `SUPADEPLOY_SCHEMA_FILE`  | no       | `supabase/full_user_data_schema.sql` | SQL file to deploy               |
//! | `SUPADEPLOY_RPC_FUNCTION` | no       | `exec_sql`                           | Database function that runs SQL  |
//! | `SUPADEPLOY_RPC_PARAM`    | no       | `sql`                                | Argument name for the statement  |
//! | `SUPADEPLOY_TIMEOUT_SECS` | no       | --                                   | Per-request timeout              |
//!
//! Exits with status 1 when the credentials are missing or setup fails,
//! and 0 once every statement has been attempted.

use std::process::ExitCode;

use supadeploy::{DeployConfig, DeployError};
use supadeploy_core::error::CoreError;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supadeploy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DeployConfig::from_env();

    tracing::info!(
        env_file = %config.env_file.display(),
        schema_file = %config.schema_file.display(),
        function = %config.rpc.function,
        "Starting supadeploy",
    );

    match supadeploy::run(&config, &mut std::io::stdout()).await {
        Ok(summary) => {
            tracing::info!(
                attempted = summary.attempted(),
                success = summary.success,
                failed = summary.failed,
                "Deployment finished",
            );
            ExitCode::SUCCESS
        }
        Err(DeployError::Core(CoreError::MissingCredentials(missing))) => {
            eprintln!("❌ Missing Supabase credentials");
            tracing::error!(
                env_file = %config.env_file.display(),
                missing = ?missing,
                "Required credentials not found",
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ {e}");
            tracing::error!(error = %e, "Deployment aborted");
            ExitCode::FAILURE
        }
    }
}
