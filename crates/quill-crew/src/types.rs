//! Result types for crew runs

use chrono::{DateTime, Utc};
use quill_agent::Usage;
use serde::{Deserialize, Serialize};

/// Raw output of one pipeline stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOutput {
    /// Role of the agent that produced this text
    pub role: String,
    /// The stage's raw output, reasoning traces included
    pub text: String,
}

/// Result of one complete crew run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewOutput {
    /// The final post text, reasoning traces stripped
    pub text: String,
    /// Raw per-stage outputs, in pipeline order
    pub stages: Vec<StageOutput>,
    /// Token usage accumulated across all stages
    pub total_usage: Usage,
    /// When this output was generated
    pub generated_at: DateTime<Utc>,
}

/// Outcome of driving the crew through the failover runner
///
/// The runner never propagates an error past its boundary - it either
/// produced a post or used up its whole attempt budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The pipeline produced a post
    Completed {
        post: CrewOutput,
        /// 1-based number of attempts consumed, including the successful one
        attempts: usize,
    },
    /// Every allotted attempt failed
    Exhausted {
        attempts: usize,
        /// Rendering of the last attempt's error
        last_error: String,
    },
}

impl RunOutcome {
    /// Whether the run produced a post
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}
