//! Sequential crew execution
//!
//! Runs the plan -> write -> review stages in order against the chat API,
//! threading each stage's output into the next stage's prompt. The whole
//! run uses a single API key; the failover runner decides which key that
//! is per attempt.

use crate::prompt::{build_system_prompt, build_task_prompt};
use crate::roles::{standard_stages, Stage};
use crate::types::{CrewOutput, StageOutput};
use async_trait::async_trait;
use chrono::Utc;
use quill_agent::{ChatClient, ChatMessage, Usage};
use quill_core::Result;
use tracing::{debug, info};

/// Close tag some reasoning models emit before their actual answer
const THINK_CLOSE_TAG: &str = "</think>";

/// External content-generation capability driven by the failover runner
///
/// One call is one attempt with one credential. Rate limiting surfaces as
/// [`quill_core::QuillError::RateLimited`]; the runner treats every other
/// error as a transient failure with the same retry policy.
#[async_trait]
pub trait PipelineExecutor: Send + Sync {
    /// Run the full pipeline for a topic using the given API key
    async fn kickoff(&self, api_key: &str, topic: &str) -> Result<CrewOutput>;
}

/// The standard three-stage content crew
pub struct Crew {
    client: ChatClient,
    stages: Vec<Stage>,
}

impl Crew {
    /// Create a crew with the standard plan -> write -> review stages
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            stages: standard_stages(),
        }
    }

    /// Number of stages in this crew
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

#[async_trait]
impl PipelineExecutor for Crew {
    async fn kickoff(&self, api_key: &str, topic: &str) -> Result<CrewOutput> {
        let mut context: Option<String> = None;
        let mut stages = Vec::with_capacity(self.stages.len());
        let mut total_usage = Usage::default();

        for stage in &self.stages {
            info!("Running stage: {}", stage.agent.role);

            let messages = vec![
                ChatMessage::system(build_system_prompt(&stage.agent, topic)),
                ChatMessage::user(build_task_prompt(&stage.task, topic, context.as_deref())),
            ];

            let output = self.client.complete(api_key, messages).await?;

            if let Some(usage) = &output.usage {
                total_usage.accumulate(usage);
            }

            debug!(
                "Stage {} complete ({} chars)",
                stage.agent.role,
                output.text.len()
            );

            context = Some(output.text.clone());
            stages.push(StageOutput {
                role: stage.agent.role.clone(),
                text: output.text,
            });
        }

        // stages is never empty, so context is always set by now
        let raw = context.unwrap_or_default();
        let text = strip_reasoning(&raw);

        info!(
            "Crew complete ({} stages, {} prompt + {} completion tokens)",
            stages.len(),
            total_usage.prompt_tokens,
            total_usage.completion_tokens
        );

        Ok(CrewOutput {
            text,
            stages,
            total_usage,
            generated_at: Utc::now(),
        })
    }
}

/// Drop a leading reasoning trace from model output
///
/// Reasoning-tuned models wrap their scratch work in a think block before
/// the answer. Everything through the close tag is discarded; text without
/// the tag passes through untouched (modulo trimming).
pub fn strip_reasoning(text: &str) -> String {
    match text.find(THINK_CLOSE_TAG) {
        Some(pos) => text[pos + THINK_CLOSE_TAG.len()..].trim().to_string(),
        None => text.trim().to_string(),
    }
}
