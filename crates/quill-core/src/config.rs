//! Configuration management for Quill
//!
//! This module provides configuration structures for the posting pipeline,
//! including model selection, retry/failover tuning, and the publish
//! endpoint settings. Secrets (API keys, bearer tokens) are never stored
//! here; they come from the process environment.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::Result;

/// Top-level Quill configuration
///
/// Loaded from `quill.toml` in the working directory, or defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuillConfig {
    /// Content-generation pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Publish endpoint settings
    #[serde(default)]
    pub publish: PublishConfig,
}

/// Content-generation pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Chat model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completions API
    #[serde(default = "default_chat_api_base")]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Attempts allowed per credential before giving up
    /// (total budget = this value times the pool size)
    #[serde(default = "default_attempts_per_credential")]
    pub attempts_per_credential: usize,

    /// Delay between failed attempts, in seconds
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

/// Publish endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Base URL of the platform REST API
    #[serde(default = "default_publish_api_base")]
    pub api_base: String,

    /// Versioned-protocol header value the platform requires
    #[serde(default = "default_platform_version")]
    pub platform_version: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

// Default value providers
fn default_model() -> String {
    "deepseek-r1-distill-llama-70b".to_string()
}

fn default_chat_api_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_publish_api_base() -> String {
    "https://api.linkedin.com/v2".to_string()
}

fn default_platform_version() -> String {
    "202210".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_attempts_per_credential() -> usize {
    2
}

fn default_retry_delay_secs() -> u64 {
    5
}

impl QuillConfig {
    /// Load configuration from `quill.toml` at the given path, or use defaults
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Ok(toml::from_str(&content).map_err(|e| {
                crate::QuillError::Config(format!("Failed to parse config file: {}", e))
            })?)
        } else {
            Ok(Self::default())
        }
    }
}

impl PipelineConfig {
    /// Per-request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Inter-attempt delay as a [`Duration`]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl PublishConfig {
    /// Per-request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_chat_api_base(),
            request_timeout_secs: default_request_timeout_secs(),
            attempts_per_credential: default_attempts_per_credential(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            api_base: default_publish_api_base(),
            platform_version: default_platform_version(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuillConfig::load_or_default(&dir.path().join("quill.toml")).unwrap();
        assert_eq!(config.pipeline.model, "deepseek-r1-distill-llama-70b");
        assert_eq!(config.pipeline.attempts_per_credential, 2);
        assert_eq!(config.pipeline.retry_delay_secs, 5);
        assert_eq!(config.publish.api_base, "https://api.linkedin.com/v2");
        assert_eq!(config.publish.platform_version, "202210");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(
            &path,
            r#"
[pipeline]
retry_delay_secs = 1
model = "llama-3.3-70b-versatile"
"#,
        )
        .unwrap();

        let config = QuillConfig::load_or_default(&path).unwrap();
        assert_eq!(config.pipeline.retry_delay_secs, 1);
        assert_eq!(config.pipeline.model, "llama-3.3-70b-versatile");
        // Unset sections and fields keep their defaults
        assert_eq!(config.pipeline.attempts_per_credential, 2);
        assert_eq!(config.publish.platform_version, "202210");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "pipeline = 7").unwrap();
        assert!(QuillConfig::load_or_default(&path).is_err());
    }
}
