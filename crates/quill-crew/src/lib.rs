//! # quill-crew
//!
//! Sequential content crew and credential-failover runner for Quill.
//!
//! This crate provides:
//! - Agent role/task definitions for the plan -> write -> review pipeline
//! - Prompt assembly for each stage
//! - [`Crew`], the sequential executor behind the [`PipelineExecutor`] seam
//! - [`run_with_failover`], the retry loop that rotates API keys
//!
//! ## Key Pattern
//!
//! One `kickoff` call is one attempt with one credential. The runner owns
//! the attempt budget (two tries per key), the rotation cursor, and the
//! inter-attempt delay; the crew itself never retries.

mod crew;
mod prompt;
mod roles;
mod runner;
mod types;

pub use crew::{strip_reasoning, Crew, PipelineExecutor};
pub use prompt::{build_system_prompt, build_task_prompt};
pub use roles::{planner, reviewer, standard_stages, writer, AgentSpec, Stage, TaskSpec};
pub use runner::run_with_failover;
pub use types::{CrewOutput, RunOutcome, StageOutput};
