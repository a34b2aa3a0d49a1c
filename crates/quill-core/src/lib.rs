//! # quill-core
//!
//! Core types for the Quill posting pipeline.
//!
//! Quill drives a sequential multi-agent content pipeline against a
//! rate-limited LLM API, rotating through a pool of credentials, then
//! publishes the cleaned result to LinkedIn. This crate holds what the
//! other crates share:
//!
//! - The unified [`QuillError`] enum and [`Result`] alias
//! - [`QuillConfig`] loaded from `quill.toml` plus defaults

mod config;
mod error;

pub use config::{PipelineConfig, PublishConfig, QuillConfig};
pub use error::{QuillError, Result};
