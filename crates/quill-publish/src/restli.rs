//! LinkedIn REST transport
//!
//! Thin HTTP layer behind the [`PlatformApi`] seam: identity lookup and
//! post creation with the versioned protocol headers LinkedIn requires.
//! Non-2xx responses surface as [`QuillError::HttpStatus`] so the publisher
//! can render them; everything else maps to [`QuillError::Api`].

use crate::types::{PostReceipt, UgcPost, UserInfo};
use async_trait::async_trait;
use quill_core::{PublishConfig, QuillError, Result};

const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// Platform REST operations the publisher depends on
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Resolve the identity behind a bearer token
    async fn userinfo(&self, token: &str) -> Result<UserInfo>;

    /// Create a UGC post, returning the platform's receipt
    async fn create_post(&self, token: &str, post: &UgcPost) -> Result<PostReceipt>;
}

/// reqwest-backed [`PlatformApi`] implementation
#[derive(Debug, Clone)]
pub struct RestliClient {
    api_base: String,
    platform_version: String,
    http: reqwest::Client,
}

impl RestliClient {
    /// Create a client from publish configuration
    pub fn new(config: &PublishConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| QuillError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            platform_version: config.platform_version.clone(),
            http,
        })
    }
}

#[async_trait]
impl PlatformApi for RestliClient {
    async fn userinfo(&self, token: &str) -> Result<UserInfo> {
        tracing::debug!("Fetching userinfo from {}", self.api_base);

        let response = self
            .http
            .get(format!("{}/userinfo", self.api_base))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| QuillError::Identity(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(QuillError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| QuillError::Identity(format!("Failed to parse userinfo: {}", e)))
    }

    async fn create_post(&self, token: &str, post: &UgcPost) -> Result<PostReceipt> {
        tracing::debug!("Creating UGC post at {}", self.api_base);

        let response = self
            .http
            .post(format!("{}/ugcPosts", self.api_base))
            .header("LinkedIn-Version", &self.platform_version)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .bearer_auth(token)
            .json(post)
            .send()
            .await
            .map_err(|e| QuillError::Api(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(QuillError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| QuillError::Api(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = PublishConfig::default();
        let client = RestliClient::new(&config).unwrap();
        assert_eq!(client.api_base, "https://api.linkedin.com/v2");
        assert_eq!(client.platform_version, "202210");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = PublishConfig {
            api_base: "https://api.linkedin.com/v2/".to_string(),
            ..PublishConfig::default()
        };
        let client = RestliClient::new(&config).unwrap();
        assert_eq!(client.api_base, "https://api.linkedin.com/v2");
    }
}
