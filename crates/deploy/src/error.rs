use std::path::PathBuf;

use supadeploy_core::error::CoreError;

use crate::rpc::RpcError;

/// Errors that abort a deployment run.
///
/// Per-statement failures are not errors at this level; they are counted
/// in the run summary.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read schema file {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to construct Supabase client: {0}")]
    Client(#[from] RpcError),

    #[error("Failed to write console output: {0}")]
    Output(#[from] std::io::Error),
}
