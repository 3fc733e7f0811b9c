mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::github::GitHubClient;
use crate::infra::jira::JiraClient;

#[derive(Parser)]
#[command(
    name = "jira-pr",
    author,
    version,
    about = "Open a draft GitHub pull request titled after a Jira issue"
)]
struct Cli {
    /// Jira issue key, e.g. PROJ-123.
    #[arg(short, long)]
    issue: String,

    /// Base branch for the pull request. Defaults to the remote's default branch.
    #[arg(short, long)]
    base: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(cli.issue, cli.base)?;

    let git = Arc::new(GitCli::new(cwd));
    let issue_tracker = Arc::new(JiraClient::new(
        config.jira_base_url.clone(),
        config.jira_email.clone(),
        config.jira_api_token.clone(),
    ));
    let pull_requests = Arc::new(GitHubClient::new(config.github_token.clone()));

    let context = AppContext::new(config, git, issue_tracker, pull_requests);

    let created = workflow::pull_request::open_pull_request(&context).await?;
    println!("Pull request created: {}", created.url);

    Ok(())
}
