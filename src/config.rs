//! File-based client settings
//!
//! [`ClientSettings`] is the serializable face of [`HttpClientConfig`]:
//! every field is optional in YAML and durations are plain milliseconds.
//!
//! ```yaml
//! base_url: https://sourcify.dev/server
//! timeout_ms: 10000
//! retry:
//!   max_retries: 3
//!   delay_ms: 500
//! rate_limit:
//!   max: 5
//!   duration_ms: 200
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Settings
// ============================================================================

/// Client settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Server base URL; its path is kept as a prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Retry policy
    #[serde(default)]
    pub retry: RetrySettings,

    /// Rate limiting, off when absent
    #[serde(default)]
    pub rate_limit: Option<RateLimitSettings>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: None,
            retry: RetrySettings::default(),
            rate_limit: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

/// Retry policy settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Retries after the first attempt
    #[serde(default)]
    pub max_retries: u32,

    /// Delay between attempts in milliseconds
    #[serde(default)]
    pub delay_ms: u64,
}

/// Token bucket settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Bucket capacity
    pub max: u32,

    /// Refill period for one token in milliseconds
    pub duration_ms: u64,
}

// ============================================================================
// Loading
// ============================================================================

impl ClientSettings {
    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: ClientSettings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            Error::Config { message } => {
                Error::config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        if let Some(ref limit) = self.rate_limit {
            if limit.max == 0 || limit.duration_ms == 0 {
                return Err(Error::config(
                    "rate_limit max and duration_ms must be greater than zero",
                ));
            }
        }
        Ok(())
    }

    /// Convert into a client config
    pub fn into_config(self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .retry(
                self.retry.max_retries,
                Duration::from_millis(self.retry.delay_ms),
            );

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(limit) = self.rate_limit {
            builder = builder.rate_limit(RateLimiterConfig::new(
                limit.max,
                Duration::from_millis(limit.duration_ms),
            ));
        }

        builder.build()
    }

    /// Build a client from these settings
    pub fn build_client(self) -> Result<HttpClient> {
        HttpClient::with_config(self.into_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_settings() {
        let settings = ClientSettings::from_yaml_str("{}").unwrap();
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(settings.base_url, "https://sourcify.dev/server");
        assert_eq!(settings.retry.max_retries, 0);
        assert!(settings.rate_limit.is_none());
    }

    #[test]
    fn test_parse_full_settings() {
        let yaml = r"
base_url: http://localhost:5555
timeout_ms: 1500
user_agent: my-indexer/2.0
retry:
  max_retries: 3
  delay_ms: 250
rate_limit:
  max: 5
  duration_ms: 200
";
        let config = ClientSettings::from_yaml_str(yaml).unwrap().into_config();

        assert_eq!(config.base_url, "http://localhost:5555");
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.user_agent, "my-indexer/2.0");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert_eq!(
            config.rate_limit,
            Some(RateLimiterConfig::new(5, Duration::from_millis(200)))
        );
    }

    #[test]
    fn test_parse_rejects_zero_rate_limit() {
        let yaml = "rate_limit:\n  max: 0\n  duration_ms: 100\n";
        let err = ClientSettings::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_base_url() {
        let err = ClientSettings::from_yaml_str("base_url: ''").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = ClientSettings::from_yaml_str("retry: [1, 2").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://127.0.0.1:8080/server").unwrap();
        writeln!(file, "retry:\n  max_retries: 1").unwrap();

        let settings = ClientSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:8080/server");
        assert_eq!(settings.retry.max_retries, 1);
        assert_eq!(settings.retry.delay_ms, 0);

        let client = settings.build_client().unwrap();
        assert_eq!(client.base_url().path(), "/server");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientSettings::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_file_error_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: '  '").unwrap();

        let err = ClientSettings::from_file(file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));
    }
}
