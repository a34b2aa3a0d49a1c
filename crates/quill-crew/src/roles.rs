//! Agent and task definitions for the content crew
//!
//! Three fixed roles run in sequence: a planner outlines the post, a writer
//! drafts it from the plan, and a reviewer polishes it into the final text.
//! Task descriptions carry a `{topic}` placeholder that the prompt builder
//! substitutes at run time.

use serde::{Deserialize, Serialize};

/// Persona for one agent in the crew
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Short role name, e.g. "Content Planner"
    pub role: String,
    /// What this agent is trying to achieve
    pub goal: String,
    /// Persona background that shapes the agent's voice
    pub backstory: String,
}

/// Work item handed to one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    /// What to do; may contain a `{topic}` placeholder
    pub description: String,
    /// Shape of the output the next stage (or the publisher) expects
    pub expected_output: String,
}

/// One stage of the sequential pipeline: an agent plus its task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub agent: AgentSpec,
    pub task: TaskSpec,
}

/// The content planner agent
pub fn planner() -> AgentSpec {
    AgentSpec {
        role: "Content Planner".to_string(),
        goal: "Plan engaging and factually accurate LinkedIn posts on technical topics that are easy to digest.".to_string(),
        backstory: "You specialize in creating engaging, bite-sized LinkedIn posts for technical topics. \
            Your mission is to make complex concepts accessible and interesting, especially for beginners. \
            You focus on quick, actionable insights that spark curiosity and encourage learning, ensuring \
            each post is both informative and easy to understand. Your content planning is tailored to help \
            readers gain valuable knowledge without feeling overwhelmed. Your work is the basis for the \
            Content Writer to write an article on this topic.".to_string(),
    }
}

/// The content writer agent
pub fn writer() -> AgentSpec {
    AgentSpec {
        role: "Content Writer".to_string(),
        goal: "Write a LinkedIn post on {topic} based on the plan provided by the Content Planner, \
            possibly including character-based diagrams and simple analogies.".to_string(),
        backstory: "You are a skilled technical writer with expertise in crafting clear, engaging LinkedIn \
            posts. You have a special talent for simplifying complex topics using character-based diagrams \
            (like flowcharts) and relatable analogies and concise writing. Your mission is to take the plan \
            provided by the Content Planner and transform it into a well-structured, informative, and \
            interesting short-form LinkedIn post. You focus on delivering valuable insights in a punchy and \
            concise format, ideal for grabbing attention quickly, ensuring each post is both informative and \
            easy to understand.".to_string(),
    }
}

/// The content reviewer agent
pub fn reviewer() -> AgentSpec {
    AgentSpec {
        role: "Content Reviewer".to_string(),
        goal: "Review the LinkedIn post for quality, accuracy, and engagement, providing feedback for improvement.".to_string(),
        backstory: "You are an experienced content reviewer with a keen eye for detail and a deep \
            understanding of what makes a LinkedIn post successful. Your mission is to ensure that every \
            post is polished, professional, and aligns with the intended goals. You check for clarity, tone, \
            factual accuracy, and overall impact, providing constructive feedback to elevate the content to \
            its highest potential.".to_string(),
    }
}

fn plan_task() -> TaskSpec {
    TaskSpec {
        description: "Create a detailed content plan for a LinkedIn post on the topic: {topic}. \
            The plan should be engaging, factually accurate, and easy for beginners to digest. Include key \
            points, a suggested structure, and any relevant hashtags. Also, suggest if a simple \
            character-based diagram or a short analogy would be beneficial for explaining the topic.".to_string(),
        expected_output: "A comprehensive content plan in markdown format, including an outline, key \
            talking points, relevant hashtags, and a suggestion on whether to use a character-based diagram \
            or analogy.".to_string(),
    }
}

fn write_task() -> TaskSpec {
    TaskSpec {
        description: "Using the content plan from the planner, write a compelling LinkedIn post on \
            {topic}. The post should be clear, engaging, and well-structured. If the topic is complex, \
            consider using a simple character-based diagram or a short analogy to make it easier to \
            understand. Make sure to follow the provided plan and maintain a professional yet accessible \
            tone.".to_string(),
        expected_output: "A short, punchy LinkedIn post as a markdown text, ready to be published. The \
            post should be concise, ideally 1-2 paragraphs long, and may include a simple character-based \
            diagram or analogy if it helps with clarity.".to_string(),
    }
}

fn review_task() -> TaskSpec {
    TaskSpec {
        description: "Review the LinkedIn post written by the Content Writer. Check for quality, \
            accuracy, clarity, and engagement. Provide constructive feedback and make necessary edits to \
            ensure the post is polished and ready for publication.".to_string(),
        expected_output: "ONLY the final LinkedIn post content in markdown format, ready for publishing. \
            Do NOT include any thinking process, commentary, analysis, or remarks. Just the clean post \
            content that can be directly copied and pasted to LinkedIn.".to_string(),
    }
}

/// The standard plan -> write -> review pipeline
pub fn standard_stages() -> Vec<Stage> {
    vec![
        Stage {
            agent: planner(),
            task: plan_task(),
        },
        Stage {
            agent: writer(),
            task: write_task(),
        },
        Stage {
            agent: reviewer(),
            task: review_task(),
        },
    ]
}
