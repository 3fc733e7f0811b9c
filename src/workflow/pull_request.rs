use crate::context::AppContext;
use crate::domain::branch::BranchPair;
use crate::domain::pull_request::{PullRequestRequest, PullRequestResult};
use crate::domain::repo::parse_remote_url;
use crate::error::AppResult;

/// Runs the whole flow: resolve branches, parse the remote, look up the
/// issue, open the pull request. Any failure aborts the run; later steps
/// are never reached and nothing is retried.
pub async fn open_pull_request(ctx: &AppContext) -> AppResult<PullRequestResult> {
    let head = ctx.git.current_branch().await?;
    let base = match ctx.config.base_override.clone() {
        Some(base) => base,
        None => ctx.git.default_branch().await?,
    };
    let branches = BranchPair { head, base };
    println!(
        "Source branch: {} (base: {})",
        branches.head, branches.base
    );

    let remote = ctx.git.remote_url().await?;
    let coordinates = parse_remote_url(&remote)?;
    println!(
        "GitHub repository: {}/{}",
        coordinates.owner, coordinates.repo
    );

    let summary = ctx
        .issue_tracker
        .fetch_summary(&ctx.config.issue_key)
        .await?;
    println!("Jira issue {}: {}", ctx.config.issue_key, summary.as_str());

    let request = PullRequestRequest::from_issue(
        &ctx.config.jira_base_url,
        &ctx.config.issue_key,
        summary.as_str(),
        branches,
    );

    ctx.pull_requests.create(&coordinates, &request).await
}
