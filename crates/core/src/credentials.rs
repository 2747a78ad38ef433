//! Supabase credentials pulled out of an [`EnvMap`].

use crate::env_file::EnvMap;
use crate::error::CoreError;

pub const URL_KEY: &str = "VITE_SUPABASE_URL";
pub const ANON_KEY_KEY: &str = "VITE_SUPABASE_ANON_KEY";
/// Optional elevated key; preferred over the anon key for requests.
pub const SERVICE_KEY_KEY: &str = "SUPABASE_SERVICE_KEY";

/// Number of key characters shown in console output.
const KEY_PREVIEW_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub anon_key: String,
    pub service_key: Option<String>,
}

impl Credentials {
    /// Validate that the URL and anon key are present and non-empty.
    ///
    /// Every missing key is listed in the returned error, in a fixed order.
    pub fn from_env(env: &EnvMap) -> Result<Self, CoreError> {
        let lookup = |key: &str| env.get(key).filter(|v| !v.is_empty()).cloned();

        let url = lookup(URL_KEY);
        let anon_key = lookup(ANON_KEY_KEY);

        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Ok(Self {
                url,
                anon_key,
                service_key: lookup(SERVICE_KEY_KEY),
            }),
            (url, anon_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_KEY);
                }
                if anon_key.is_none() {
                    missing.push(ANON_KEY_KEY);
                }
                Err(CoreError::MissingCredentials(missing))
            }
        }
    }

    /// Key sent with every request: the service key if configured,
    /// otherwise the anon key.
    pub fn request_key(&self) -> &str {
        self.service_key.as_deref().unwrap_or(&self.anon_key)
    }

    /// Project reference: the first label of the URL host.
    pub fn project_ref(&self) -> &str {
        let host = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        host.split(['.', '/', ':']).next().unwrap_or(host)
    }

    /// First characters of the request key followed by `...`.
    pub fn key_preview(&self) -> String {
        let shown: String = self.request_key().chars().take(KEY_PREVIEW_CHARS).collect();
        format!("{shown}...")
    }
}
