//! Client configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.jobcoach/` in
//! production) and deserializes it into [`ClientConfig`]. Falls back to
//! sensible defaults when the file is missing or malformed. The
//! `JOBCOACH_API_URL` environment variable overrides the configured base URL.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default base URL of the matching API.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds (transport default, no per-call tuning).
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the remote matching API.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Resolve the data directory for jobcoach.
///
/// Priority:
/// 1. `JOBCOACH_DATA_DIR` environment variable
/// 2. `~/.jobcoach`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JOBCOACH_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".jobcoach");
    }

    // Last resort: current directory
    PathBuf::from(".jobcoach")
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - `JOBCOACH_API_URL` overrides `base_url` regardless of source.
pub async fn load_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => match toml::from_str::<ClientConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}: {err}, using defaults",
                    config_path.display()
                );
                ClientConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    };

    if let Ok(url) = std::env::var("JOBCOACH_API_URL") {
        if !url.is_empty() {
            config.base_url = url;
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
base_url = "http://coach.internal:9000"
timeout_secs = 30
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://coach.internal:9000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn load_config_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "timeout_secs = 10\n")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, ClientConfig::default());
    }
}
