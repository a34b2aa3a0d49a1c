//! Credential-failover runner
//!
//! Drives a [`PipelineExecutor`] to completion despite per-credential rate
//! limiting. The attempt budget is `attempts_per_credential * pool size`;
//! every failed attempt rotates to the next credential in round-robin order
//! and sleeps a fixed delay before retrying.
//!
//! Rate-limit and other failures follow the same retry policy; they differ
//! only in how they are logged.

use crate::crew::PipelineExecutor;
use crate::types::RunOutcome;
use quill_agent::CredentialPool;
use quill_core::PipelineConfig;
use tracing::{info, warn};

/// Run the pipeline with retry and credential failover
///
/// Never returns an error: the outcome is either a post or an explicit
/// exhaustion report after the full attempt budget.
pub async fn run_with_failover<E: PipelineExecutor>(
    executor: &E,
    pool: &CredentialPool,
    config: &PipelineConfig,
    topic: &str,
) -> RunOutcome {
    let max_attempts = config.attempts_per_credential * pool.len();
    let delay = config.retry_delay();
    let mut cursor = 0;
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        info!(
            "Attempt {}/{} using credential {}/{}",
            attempt,
            max_attempts,
            cursor + 1,
            pool.len()
        );

        match executor.kickoff(pool.key(cursor), topic).await {
            Ok(post) => {
                info!("Pipeline completed on attempt {}", attempt);
                return RunOutcome::Completed { post, attempts: attempt };
            }
            Err(err) => {
                if err.is_rate_limit() {
                    warn!(
                        "Rate limit hit on credential {}/{}",
                        cursor + 1,
                        pool.len()
                    );
                } else {
                    warn!("Attempt {} failed: {}", attempt, err);
                }
                last_error = err.to_string();

                if attempt < max_attempts {
                    cursor = pool.next_index(cursor);
                    info!(
                        "Switching to credential {}/{}, retrying in {:?}",
                        cursor + 1,
                        pool.len(),
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    warn!("All credentials exhausted after {} attempts", max_attempts);
    RunOutcome::Exhausted {
        attempts: max_attempts,
        last_error,
    }
}
