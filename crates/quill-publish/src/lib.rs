//! # quill-publish
//!
//! Markdown sanitizer and LinkedIn UGC publisher for Quill.
//!
//! This crate provides:
//! - [`clean_content`] - pure markdown-to-plain-text transform
//! - [`RestliClient`] - the versioned REST transport behind [`PlatformApi`]
//! - [`Publisher`] - identity resolution + sanitize + submit, with every
//!   failure mode absorbed into a [`PublishResult`]

mod publisher;
mod restli;
mod sanitize;
mod types;

pub use publisher::Publisher;
pub use restli::{PlatformApi, RestliClient};
pub use sanitize::{clean_content, escape_quotes};
pub use types::{PostReceipt, PublishResult, UgcPost, UserInfo};
