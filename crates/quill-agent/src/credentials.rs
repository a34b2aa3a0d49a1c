//! Credential handling for upstream APIs
//!
//! Two kinds of secrets come from the environment:
//! 1. A pool of Groq API keys (`GROQ_API_KEY`, `GROQ_API_KEY_2`, ...) used
//!    with failover by the pipeline runner
//! 2. A LinkedIn bearer token (`LINKEDIN_ACCESS_TOKEN`) used by the publisher

use quill_core::{QuillError, Result};
use std::env;

/// Environment variable holding the primary Groq API key
const PRIMARY_KEY_VAR: &str = "GROQ_API_KEY";

/// Highest numbered fallback key checked (`GROQ_API_KEY_2` .. `GROQ_API_KEY_9`)
const MAX_FALLBACK_KEYS: usize = 9;

/// Environment variable holding the LinkedIn bearer token
const LINKEDIN_TOKEN_VAR: &str = "LINKEDIN_ACCESS_TOKEN";

/// An ordered, immutable pool of interchangeable API keys
///
/// The rotation cursor is deliberately NOT part of the pool - it is loop
/// state owned by the runner, advanced through [`CredentialPool::next_index`].
#[derive(Debug, Clone)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    /// Build a pool from the given keys
    ///
    /// Fails if the pool would be empty; the runner cannot start without
    /// at least one credential.
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            return Err(QuillError::Auth(
                "No API keys available. Set at least:\n\
                 - GROQ_API_KEY=gsk_...        (primary key)\n\
                 - GROQ_API_KEY_2=gsk_...      (optional fallback keys)"
                    .to_string(),
            ));
        }
        Ok(Self { keys })
    }

    /// Build a pool from the process environment
    ///
    /// Collects `GROQ_API_KEY` and then `GROQ_API_KEY_2` through
    /// `GROQ_API_KEY_9`, skipping absent or blank entries.
    pub fn from_env() -> Result<Self> {
        let mut keys = Vec::new();

        if let Ok(key) = env::var(PRIMARY_KEY_VAR) {
            if !key.trim().is_empty() {
                keys.push(key);
            }
        }

        for n in 2..=MAX_FALLBACK_KEYS {
            if let Ok(key) = env::var(format!("{}_{}", PRIMARY_KEY_VAR, n)) {
                if !key.trim().is_empty() {
                    keys.push(key);
                }
            }
        }

        tracing::info!("Found {} API key(s) in environment", keys.len());
        Self::new(keys)
    }

    /// Number of keys in the pool
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false - construction rejects empty pools
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key at the given cursor position
    ///
    /// The cursor must satisfy `cursor < len()`; the runner maintains this
    /// invariant by only advancing through [`CredentialPool::next_index`].
    pub fn key(&self, cursor: usize) -> &str {
        &self.keys[cursor]
    }

    /// The next cursor position in round-robin order
    pub fn next_index(&self, cursor: usize) -> usize {
        (cursor + 1) % self.keys.len()
    }
}

/// Get the LinkedIn bearer token from the environment
pub fn linkedin_token() -> Result<String> {
    match env::var(LINKEDIN_TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(QuillError::Auth(
            "No LinkedIn token found. Set:\n\
             - LINKEDIN_ACCESS_TOKEN=...  (member token with w_member_social scope)"
                .to_string(),
        )),
    }
}
