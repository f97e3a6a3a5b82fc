//! Runtime configuration.
//!
//! Loaded from `config.json` in the platform config directory, e.g.
//!
//! ```json
//! {
//!   "backend_url": "http://localhost:8081",
//!   "request_timeout_ms": 5000,
//!   "log_filter": "pulsardash=debug"
//! }
//! ```
//!
//! Every field is optional. `PULSARDASH_BACKEND_URL` overrides the backend URL.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

pub const BACKEND_URL_ENV: &str = "PULSARDASH_BACKEND_URL";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_FILTER: &str = "pulsardash=info,reqwest=warn,hyper=warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Base URL of the dashboard backend; endpoints live under `/api`
    pub backend_url: String,
    pub request_timeout_ms: u64,
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DashConfig {
    /// Load from the platform config directory, falling back to defaults,
    /// then apply environment overrides.
    pub fn load() -> Self {
        let config = match Self::default_path() {
            Some(path) => Self::load_from_path(path),
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Load from `path`. A missing file yields defaults silently; an
    /// unreadable or invalid one yields defaults with a warning.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<DashConfig>(&contents) {
                Ok(config) => {
                    debug!(
                        "Loaded config from {:?}: backend={}, timeout={}ms",
                        path, config.backend_url, config.request_timeout_ms
                    );
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "", "pulsardash")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_backend_override(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn with_backend_override(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|url| !url.trim().is_empty()) {
            debug!("Backend URL overridden by {}: {}", BACKEND_URL_ENV, url);
            self.backend_url = url.trim().to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashConfig::load_from_path(dir.path().join("config.json"));
        assert_eq!(config, DashConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "backend_url": "http://pulsar-ui:8081" }}"#).unwrap();

        let config = DashConfig::load_from_path(file.path());

        assert_eq!(config.backend_url, "http://pulsar-ui:8081");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "backend_url = 1").unwrap();

        assert_eq!(DashConfig::load_from_path(file.path()), DashConfig::default());
    }

    #[test]
    fn test_backend_override() {
        let config = DashConfig::default().with_backend_override(Some(" http://other:1 ".into()));
        assert_eq!(config.backend_url, "http://other:1");

        let config = DashConfig::default().with_backend_override(Some("  ".into()));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_request_timeout() {
        assert_eq!(
            DashConfig::default().request_timeout(),
            Duration::from_millis(5000)
        );
    }
}
