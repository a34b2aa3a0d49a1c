//! Type definitions for LinkedIn UGC publishing

use serde::{Deserialize, Serialize};

/// Structured outcome of one publish attempt
///
/// Exactly one side is populated: `post_id`/`message` when `success` is
/// true, `error` when it is false. The constructors enforce the gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishResult {
    /// A successful publish with the platform's post identifier
    pub fn posted(post_id: impl Into<String>) -> Self {
        Self {
            success: true,
            post_id: Some(post_id.into()),
            message: Some("Successfully posted!".to_string()),
            error: None,
        }
    }

    /// A failed publish with a human-readable reason
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            post_id: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Identity record from the userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// Subject identifier used to build the author URN
    pub sub: String,
}

/// Receipt from the post-creation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PostReceipt {
    pub id: String,
}

/// UGC post creation body
///
/// Field names are dictated by LinkedIn's Rest.li schema, hence the renames.
#[derive(Debug, Clone, Serialize)]
pub struct UgcPost {
    pub author: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: String,
    #[serde(rename = "specificContent")]
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareContent {
    #[serde(rename = "shareCommentary")]
    pub share_commentary: Commentary,
    #[serde(rename = "shareMediaCategory")]
    pub share_media_category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Commentary {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: String,
}

impl UgcPost {
    /// A public, text-only post by the given author URN
    pub fn plain_text(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: Commentary { text: text.into() },
                    share_media_category: "NONE".to_string(),
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC".to_string(),
            },
        }
    }

    /// The commentary text carried by this post
    pub fn text(&self) -> &str {
        &self.specific_content.share_content.share_commentary.text
    }
}
