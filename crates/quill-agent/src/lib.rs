//! # quill-agent
//!
//! Groq API client and credential pool for the Quill pipeline.
//!
//! This crate holds the thin upstream layer the rest of Quill builds on:
//! - [`CredentialPool`] - immutable failover pool of API keys
//! - [`ChatClient`] - one-shot chat-completions client
//!
//! ## Key Pattern
//!
//! The client never retries. Rate limiting surfaces as a distinct error
//! kind, and the pipeline runner decides whether to rotate credentials and
//! try again. That keeps the attempt budget in exactly one place.

mod client;
mod credentials;
mod types;

pub use client::ChatClient;
pub use credentials::{linkedin_token, CredentialPool};
pub use types::*;
