//! Prompt builder for crew stages
//!
//! Constructs the system and user prompts for one stage:
//! - System prompt from the agent's role, goal, and backstory
//! - User prompt from the task description, the previous stage's output,
//!   and the expected output shape

use crate::roles::{AgentSpec, TaskSpec};

/// Build the system prompt for an agent
pub fn build_system_prompt(agent: &AgentSpec, topic: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!("You are the {}.\n\n", agent.role));
    prompt.push_str(&format!(
        "## GOAL\n\n{}\n\n",
        agent.goal.replace("{topic}", topic)
    ));
    prompt.push_str(&format!("## BACKSTORY\n\n{}\n", agent.backstory));

    prompt
}

/// Build the user prompt for a task
///
/// `context` carries the previous stage's output; the first stage has none.
pub fn build_task_prompt(task: &TaskSpec, topic: &str, context: Option<&str>) -> String {
    let mut prompt = String::new();

    prompt.push_str("## TASK\n\n");
    prompt.push_str(&task.description.replace("{topic}", topic));
    prompt.push_str("\n\n");

    if let Some(context) = context {
        prompt.push_str("## CONTEXT FROM THE PREVIOUS STAGE\n\n");
        prompt.push_str(context);
        prompt.push_str("\n\n");
    }

    prompt.push_str("## EXPECTED OUTPUT\n\n");
    prompt.push_str(&task.expected_output);
    prompt.push('\n');

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;

    #[test]
    fn test_topic_substitution() {
        let system = build_system_prompt(&roles::writer(), "Rust async runtimes");
        assert!(system.contains("Rust async runtimes"));
        assert!(!system.contains("{topic}"));

        let stages = roles::standard_stages();
        let user = build_task_prompt(&stages[0].task, "Rust async runtimes", None);
        assert!(user.contains("Rust async runtimes"));
        assert!(!user.contains("{topic}"));
    }

    #[test]
    fn test_context_section_only_when_present() {
        let stages = roles::standard_stages();

        let first = build_task_prompt(&stages[0].task, "t", None);
        assert!(!first.contains("## CONTEXT"));

        let second = build_task_prompt(&stages[1].task, "t", Some("the plan"));
        assert!(second.contains("## CONTEXT FROM THE PREVIOUS STAGE"));
        assert!(second.contains("the plan"));
    }

    #[test]
    fn test_expected_output_always_present() {
        let stages = roles::standard_stages();
        for stage in &stages {
            let prompt = build_task_prompt(&stage.task, "t", Some("ctx"));
            assert!(prompt.contains("## EXPECTED OUTPUT"));
        }
    }
}
