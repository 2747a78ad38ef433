//! `KEY=VALUE` environment file loader.
//!
//! Deliberately simpler than a dotenv parser: no quoting, no escapes, no
//! `export` prefix. Each line is trimmed and split on its first `=`.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CoreError;

/// Key/value pairs read from an environment file.
pub type EnvMap = HashMap<String, String>;

/// Parse environment file content.
///
/// Lines without `=` are skipped. Later occurrences of a key overwrite
/// earlier ones.
pub fn parse_env(content: &str) -> EnvMap {
    let mut env = EnvMap::new();
    for line in content.lines() {
        if let Some((key, value)) = line.trim().split_once('=') {
            env.insert(key.trim().to_string(), value.to_string());
        }
    }
    env
}

/// Read and parse the environment file at `path`.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<EnvMap, CoreError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_env(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals_only() {
        let env = parse_env("VITE_SUPABASE_ANON_KEY=abc==def=\n");
        assert_eq!(env["VITE_SUPABASE_ANON_KEY"], "abc==def=");
    }

    #[test]
    fn last_occurrence_wins() {
        let env = parse_env("A=1\nB=2\nA=3\n");
        assert_eq!(env["A"], "3");
        assert_eq!(env["B"], "2");
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn lines_without_equals_are_skipped() {
        let env = parse_env("# comment\n\nJUSTAWORD\nKEY=value\n");
        assert_eq!(env.len(), 1);
        assert_eq!(env["KEY"], "value");
    }

    #[test]
    fn key_is_trimmed_and_crlf_removed() {
        let env = parse_env("  URL =https://x.supabase.co\r\n");
        assert_eq!(env["URL"], "https://x.supabase.co");
    }

    #[test]
    fn value_may_be_empty() {
        let env = parse_env("EMPTY=\n");
        assert_eq!(env["EMPTY"], "");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_env_file("/nonexistent/dir/.env.production").unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains(".env.production"));
    }
}
