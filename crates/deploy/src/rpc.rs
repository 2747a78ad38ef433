//! PostgREST RPC client for the SQL-executing database function.
//!
//! Supabase exposes database functions at `POST /rest/v1/rpc/{name}`
//! with named arguments as a JSON object. Errors come back as JSON
//! bodies carrying the Postgres error `code` and `message`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use supadeploy_core::credentials::Credentials;

use crate::config::RpcSettings;
use crate::runner::SqlExecutor;

/// Errors from the RPC layer.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API key cannot be sent as an HTTP header.
    #[error("Invalid API key: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The endpoint returned a non-2xx status. Displays as the server's
    /// message so it can be shown and matched verbatim.
    #[error("{message}")]
    Api {
        status: u16,
        /// Postgres SQLSTATE or PostgREST error code, when provided.
        code: Option<String>,
        message: String,
    },
}

impl RpcError {
    /// HTTP status of a rejected call. `None` when no response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error code reported by the server, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// HTTP client bound to one project's RPC function.
pub struct SupabaseRpc {
    client: reqwest::Client,
    endpoint: String,
    param: String,
}

impl SupabaseRpc {
    /// Create a client that authenticates every request with the
    /// credentials' request key.
    pub fn new(credentials: &Credentials, settings: &RpcSettings) -> Result<Self, RpcError> {
        let key = credentials.request_key();

        let mut apikey = HeaderValue::from_str(key)?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: rpc_endpoint(&credentials.url, &settings.function),
            param: settings.param.clone(),
        })
    }

    /// Full URL of the RPC function.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one SQL statement through the RPC function.
    pub async fn exec_sql(&self, sql: &str) -> Result<(), RpcError> {
        let mut args = serde_json::Map::new();
        args.insert(self.param.clone(), serde_json::Value::String(sql.to_string()));

        let response = self.client.post(&self.endpoint).json(&args).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_else(|e| {
            tracing::debug!(status = status.as_u16(), error = %e, "Failed to read RPC error body");
            "<unreadable body>".to_string()
        });
        tracing::debug!(status = status.as_u16(), body = %body, "RPC call rejected");
        Err(api_error(status.as_u16(), &body))
    }
}

#[async_trait]
impl SqlExecutor for SupabaseRpc {
    async fn execute(&self, sql: &str) -> Result<(), RpcError> {
        self.exec_sql(sql).await
    }
}

fn rpc_endpoint(base_url: &str, function: &str) -> String {
    format!("{}/rest/v1/rpc/{}", base_url.trim_end_matches('/'), function)
}

/// Build an [`RpcError::Api`] from a status and raw response body.
fn api_error(status: u16, body: &str) -> RpcError {
    let parsed = serde_json::from_str::<PostgrestErrorBody>(body).ok();
    let code = parsed.as_ref().and_then(|p| p.code.clone());

    let message = match parsed.and_then(|p| p.message) {
        Some(message) => message,
        None if body.trim().is_empty() => format!("HTTP {status}"),
        None => body.to_string(),
    };

    RpcError::Api {
        status,
        code,
        message,
    }
}
