//! Tool configuration read from the process environment.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENV_FILE: &str = ".env.production";
pub const DEFAULT_SCHEMA_FILE: &str = "supabase/full_user_data_schema.sql";
pub const DEFAULT_RPC_FUNCTION: &str = "exec_sql";
pub const DEFAULT_RPC_PARAM: &str = "sql";

/// Remote procedure call settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcSettings {
    /// Name of the SQL-executing function exposed under `/rest/v1/rpc/`.
    pub function: String,
    /// JSON parameter that carries the statement text.
    pub param: String,
    /// Whole-request timeout. `None` leaves the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            function: DEFAULT_RPC_FUNCTION.to_string(),
            param: DEFAULT_RPC_PARAM.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub env_file: PathBuf,
    pub schema_file: PathBuf,
    pub rpc: RpcSettings,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            schema_file: PathBuf::from(DEFAULT_SCHEMA_FILE),
            rpc: RpcSettings::default(),
        }
    }
}

impl DeployConfig {
    /// Build a config from `SUPADEPLOY_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let timeout = lookup("SUPADEPLOY_TIMEOUT_SECS").and_then(|raw| match raw.parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring invalid SUPADEPLOY_TIMEOUT_SECS");
                None
            }
        });

        Self {
            env_file: lookup("SUPADEPLOY_ENV_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.env_file),
            schema_file: lookup("SUPADEPLOY_SCHEMA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_file),
            rpc: RpcSettings {
                function: lookup("SUPADEPLOY_RPC_FUNCTION").unwrap_or(defaults.rpc.function),
                param: lookup("SUPADEPLOY_RPC_PARAM").unwrap_or(defaults.rpc.param),
                timeout,
            },
        }
    }
}
