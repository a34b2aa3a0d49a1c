//! Quill CLI - agent-generated LinkedIn posts
//!
//! Usage:
//!   quill run --topic <text>    Generate a post and publish it
//!   quill post <file>           Publish an existing file's contents
//!   quill whoami                Check the configured LinkedIn token

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quill_agent::{linkedin_token, ChatClient, CredentialPool};
use quill_core::QuillConfig;
use quill_crew::{run_with_failover, Crew, RunOutcome};
use quill_publish::{PlatformApi, PublishResult, Publisher, RestliClient};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Multi-agent LinkedIn post generation and publishing")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the configuration file
    #[arg(long, default_value = "quill.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a post with the content crew and publish it
    Run {
        /// Topic for the post
        #[arg(short, long)]
        topic: String,

        /// File to save the generated post to
        #[arg(short, long, default_value = "output.md")]
        output: PathBuf,

        /// Generate and save, but skip publishing
        #[arg(long)]
        dry_run: bool,
    },

    /// Publish the contents of an existing file
    Post {
        /// File whose contents to publish
        file: PathBuf,
    },

    /// Resolve and print the identity behind the configured token
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = QuillConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Run {
            topic,
            output,
            dry_run,
        } => cmd_run(config, topic, output, dry_run).await,
        Commands::Post { file } => cmd_post(config, file).await,
        Commands::Whoami => cmd_whoami(config).await,
    }
}

async fn cmd_run(config: QuillConfig, topic: String, output: PathBuf, dry_run: bool) -> Result<()> {
    let pool = CredentialPool::from_env().context("No pipeline credentials available")?;
    println!("Starting with {} API credential(s) available", pool.len());

    let client = ChatClient::new(&config.pipeline)?;
    let crew = Crew::new(client);

    match run_with_failover(&crew, &pool, &config.pipeline, &topic).await {
        RunOutcome::Completed { post, attempts } => {
            println!("Pipeline completed after {} attempt(s)", attempts);
            println!(
                "Token usage: {} prompt + {} completion",
                post.total_usage.prompt_tokens, post.total_usage.completion_tokens
            );
            println!("\n{}\n", post.text);

            tokio::fs::write(&output, &post.text)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Saved to {}", output.display());

            if dry_run {
                println!("Dry run: skipping publish");
                return Ok(());
            }

            publish_text(&config, &post.text).await
        }
        RunOutcome::Exhausted {
            attempts,
            last_error,
        } => {
            println!("All credentials exhausted after {} attempt(s)", attempts);
            println!("Last error: {}", last_error);
            anyhow::bail!("content pipeline exhausted its attempt budget")
        }
    }
}

async fn cmd_post(config: QuillConfig, file: PathBuf) -> Result<()> {
    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    info!("Publishing {} chars from {}", content.len(), file.display());
    publish_text(&config, &content).await
}

async fn cmd_whoami(config: QuillConfig) -> Result<()> {
    let token = linkedin_token()?;
    let api = RestliClient::new(&config.publish)?;

    let user = api
        .userinfo(&token)
        .await
        .context("Identity lookup failed - check LINKEDIN_ACCESS_TOKEN")?;

    println!("Authenticated as member: {}", user.sub);
    Ok(())
}

async fn publish_text(config: &QuillConfig, text: &str) -> Result<()> {
    let token = linkedin_token()?;
    let api = RestliClient::new(&config.publish)?;
    let publisher = Publisher::new(api, token);

    println!("Publishing...");
    let result = publisher.publish(text).await;
    report_publish(&result)
}

fn report_publish(result: &PublishResult) -> Result<()> {
    if result.success {
        println!(
            "{}",
            result.message.as_deref().unwrap_or("Posted")
        );
        println!(
            "Post ID: {}",
            result.post_id.as_deref().unwrap_or("unknown")
        );
        Ok(())
    } else {
        println!(
            "Publish failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
        anyhow::bail!("publish failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_report_publish_success() {
        let result = PublishResult::posted("urn:li:share:9");
        assert!(report_publish(&result).is_ok());
    }

    #[test]
    fn test_report_publish_failure_is_nonzero() {
        let result = PublishResult::failed("HTTP Error: 500");
        assert!(report_publish(&result).is_err());
    }
}
