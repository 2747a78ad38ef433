//! The full deployment run: credentials, client, schema, execution, report.

use std::io::Write;

use supadeploy_core::credentials::Credentials;
use supadeploy_core::env_file::load_env_file;
use supadeploy_core::outcome::DeploySummary;
use supadeploy_core::statements::split_statements;

use crate::config::DeployConfig;
use crate::error::DeployError;
use crate::rpc::SupabaseRpc;
use crate::runner::execute_all;

const RULE: &str = "==================================================";

/// Deploy the configured schema file, writing progress to `out`.
///
/// Credentials are validated before the client is built or the schema
/// file is touched. Statement failures are reported in the returned
/// summary; only setup problems produce an `Err`.
pub async fn run<W: Write>(config: &DeployConfig, out: &mut W) -> Result<DeploySummary, DeployError> {
    let env = load_env_file(&config.env_file)?;
    let credentials = Credentials::from_env(&env)?;

    writeln!(out, "\n📦 Supabase Schema Deployer")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "URL: {}", credentials.url)?;
    writeln!(out, "Project: {}", credentials.project_ref())?;
    writeln!(out, "Key: {}", credentials.key_preview())?;
    writeln!(out)?;

    let rpc = SupabaseRpc::new(&credentials, &config.rpc)?;
    tracing::info!(
        endpoint = rpc.endpoint(),
        service_key = credentials.service_key.is_some(),
        "Supabase RPC client ready",
    );
    writeln!(out, "✓ Supabase client ready\n")?;

    let sql = tokio::fs::read_to_string(&config.schema_file)
        .await
        .map_err(|source| DeployError::Schema {
            path: config.schema_file.clone(),
            source,
        })?;
    let sql = sql.replace("\r\n", "\n");
    let statements = split_statements(&sql);
    tracing::info!(
        schema_file = %config.schema_file.display(),
        statements = statements.len(),
        "Schema file loaded",
    );

    writeln!(out, "📋 Found {} SQL statements\n", statements.len())?;
    writeln!(out, "Deploying...\n")?;

    let summary = execute_all(&rpc, &statements, &mut *out).await?;

    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "✅ Complete: {} succeeded, {} warnings",
        summary.success, summary.failed
    )?;
    writeln!(out, "{RULE}")?;

    Ok(summary)
}
