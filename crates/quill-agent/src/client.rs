//! Groq chat-completions client
//!
//! Key design: the client makes exactly one upstream attempt per call and
//! reports rate limiting as a distinct error kind. Retry and credential
//! rotation live in the pipeline runner, which owns the attempt budget.

use crate::types::{ChatMessage, ChatOutput, ChatRequest, ChatResponse};
use quill_core::{PipelineConfig, QuillError, Result};

/// Chat client for the Groq OpenAI-compatible API
#[derive(Debug, Clone)]
pub struct ChatClient {
    api_base: String,
    model: String,
    http: reqwest::Client,
}

impl ChatClient {
    /// Create a client from pipeline configuration
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| QuillError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            http,
        })
    }

    /// The model this client requests
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one completion with the given API key
    ///
    /// Status mapping:
    /// - 429 becomes [`QuillError::RateLimited`] so the runner can log the
    ///   quota exhaustion distinctly
    /// - any other non-2xx becomes [`QuillError::Api`]
    /// - 2xx yields the first choice's text plus token usage
    pub async fn complete(&self, api_key: &str, messages: Vec<ChatMessage>) -> Result<ChatOutput> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        tracing::debug!("Sending chat request to {}", self.api_base);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QuillError::Api(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if status.as_u16() == 429 {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(QuillError::RateLimited(error_text));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(QuillError::Api(format!(
                "Chat API error {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| QuillError::Api(format!("Failed to parse response: {}", e)))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| QuillError::Api("No choices in response".to_string()))?
            .message
            .content;

        tracing::debug!("Completion received ({} chars)", text.len());

        Ok(ChatOutput {
            text,
            usage: chat_response.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = PipelineConfig::default();
        let client = ChatClient::new(&config).unwrap();
        assert_eq!(client.model(), "deepseek-r1-distill-llama-70b");
        assert_eq!(client.api_base, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = PipelineConfig {
            api_base: "https://api.groq.com/openai/v1/".to_string(),
            ..PipelineConfig::default()
        };
        let client = ChatClient::new(&config).unwrap();
        assert_eq!(client.api_base, "https://api.groq.com/openai/v1");
    }
}
