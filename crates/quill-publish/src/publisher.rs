//! Content publisher
//!
//! Resolves the acting identity, flattens the generated markdown, and
//! submits the post. Every failure mode is absorbed into a
//! [`PublishResult`] - the publish path never propagates an error to its
//! caller, so the signature itself guarantees total coverage.

use crate::restli::PlatformApi;
use crate::sanitize::{clean_content, escape_quotes};
use crate::types::{PublishResult, UgcPost};
use quill_core::QuillError;
use tracing::{info, warn};

/// Publisher over a platform transport
pub struct Publisher<A: PlatformApi> {
    api: A,
    access_token: String,
}

impl<A: PlatformApi> Publisher<A> {
    /// Create a publisher with the given transport and bearer token
    pub fn new(api: A, access_token: String) -> Self {
        Self { api, access_token }
    }

    /// Sanitize and publish the given text
    ///
    /// Identity resolution runs first; if it fails in any way the publish
    /// endpoint is never called.
    pub async fn publish(&self, content: &str) -> PublishResult {
        let user = match self.api.userinfo(&self.access_token).await {
            Ok(user) => user,
            Err(err) => {
                warn!("Identity lookup failed: {}", err);
                return PublishResult::failed("Could not get user URN");
            }
        };

        let clean = clean_content(content);
        let escaped = escape_quotes(&clean);

        let author = format!("urn:li:person:{}", user.sub);
        let post = UgcPost::plain_text(author, escaped);

        match self.api.create_post(&self.access_token, &post).await {
            Ok(receipt) => {
                info!("Post created: {}", receipt.id);
                PublishResult::posted(receipt.id)
            }
            Err(QuillError::HttpStatus { status, body }) => {
                warn!("Post creation returned HTTP {}", status);
                let mut error = format!("HTTP Error: {}", status);
                if let Ok(details) = serde_json::from_str::<serde_json::Value>(&body) {
                    error.push_str(&format!(" - {}", details));
                }
                PublishResult::failed(error)
            }
            Err(err) => {
                warn!("Post creation failed: {}", err);
                PublishResult::failed(format!("Unexpected error: {}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PostReceipt, UserInfo};
    use async_trait::async_trait;
    use quill_core::Result;
    use std::sync::Mutex;

    /// Transport mock that records calls and replays configured outcomes
    struct MockApi {
        userinfo_outcome: Option<UserInfo>,
        post_outcome: std::result::Result<String, QuillError>,
        posts_seen: Mutex<Vec<UgcPost>>,
    }

    impl MockApi {
        fn happy() -> Self {
            Self {
                userinfo_outcome: Some(UserInfo {
                    sub: "abc123".to_string(),
                }),
                post_outcome: Ok("urn:li:share:123".to_string()),
                posts_seen: Mutex::new(Vec::new()),
            }
        }

        fn identity_down() -> Self {
            Self {
                userinfo_outcome: None,
                post_outcome: Ok("urn:li:share:123".to_string()),
                posts_seen: Mutex::new(Vec::new()),
            }
        }

        fn post_fails(err: QuillError) -> Self {
            Self {
                userinfo_outcome: Some(UserInfo {
                    sub: "abc123".to_string(),
                }),
                post_outcome: Err(err),
                posts_seen: Mutex::new(Vec::new()),
            }
        }

        fn post_count(&self) -> usize {
            self.posts_seen.lock().unwrap().len()
        }

        fn last_post(&self) -> UgcPost {
            self.posts_seen.lock().unwrap().last().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlatformApi for MockApi {
        async fn userinfo(&self, _token: &str) -> Result<UserInfo> {
            match &self.userinfo_outcome {
                Some(user) => Ok(UserInfo {
                    sub: user.sub.clone(),
                }),
                None => Err(QuillError::HttpStatus {
                    status: 401,
                    body: "expired token".to_string(),
                }),
            }
        }

        async fn create_post(&self, _token: &str, post: &UgcPost) -> Result<PostReceipt> {
            self.posts_seen.lock().unwrap().push(post.clone());
            match &self.post_outcome {
                Ok(id) => Ok(PostReceipt { id: id.clone() }),
                Err(QuillError::HttpStatus { status, body }) => Err(QuillError::HttpStatus {
                    status: *status,
                    body: body.clone(),
                }),
                Err(err) => Err(QuillError::Api(err.to_string())),
            }
        }
    }

    fn publisher(api: MockApi) -> Publisher<MockApi> {
        Publisher::new(api, "token".to_string())
    }

    #[tokio::test]
    async fn test_identity_failure_skips_publish() {
        let publisher = publisher(MockApi::identity_down());

        let result = publisher.publish("some content").await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Could not get user URN"));
        assert_eq!(publisher.api.post_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_publish() {
        let publisher = publisher(MockApi::happy());

        let result = publisher.publish("# Big News\n\nIt **works**").await;

        assert_eq!(
            result,
            PublishResult {
                success: true,
                post_id: Some("urn:li:share:123".to_string()),
                message: Some("Successfully posted!".to_string()),
                error: None,
            }
        );

        let post = publisher.api.last_post();
        assert_eq!(post.author, "urn:li:person:abc123");
        assert_eq!(post.text(), "Big News\n\nIt works");
    }

    #[tokio::test]
    async fn test_quotes_escaped_in_body() {
        let publisher = publisher(MockApi::happy());

        publisher.publish(r#"They said "ship it""#).await;

        assert_eq!(
            publisher.api.last_post().text(),
            r#"They said \"ship it\""#
        );
    }

    #[tokio::test]
    async fn test_http_error_with_json_body() {
        let publisher = publisher(MockApi::post_fails(QuillError::HttpStatus {
            status: 422,
            body: r#"{"message":"duplicate"}"#.to_string(),
        }));

        let result = publisher.publish("content").await;

        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.starts_with("HTTP Error: 422"));
        assert!(error.contains("duplicate"));
    }

    #[tokio::test]
    async fn test_http_error_with_non_json_body() {
        let publisher = publisher(MockApi::post_fails(QuillError::HttpStatus {
            status: 500,
            body: "<html>oops</html>".to_string(),
        }));

        let result = publisher.publish("content").await;

        assert_eq!(result.error.as_deref(), Some("HTTP Error: 500"));
    }

    #[tokio::test]
    async fn test_transport_error_is_unexpected() {
        let publisher = publisher(MockApi::post_fails(QuillError::Api(
            "connection reset".to_string(),
        )));

        let result = publisher.publish("content").await;

        assert!(!result.success);
        assert!(result
            .error
            .unwrap()
            .starts_with("Unexpected error:"));
    }
}
