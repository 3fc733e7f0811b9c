use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{AppError, AppResult};
use crate::services::GitInspector;

/// GitInspector backed by the local `git` binary.
pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    /// Runs one git command and returns its trimmed single-line stdout.
    async fn run(&self, args: &[&str]) -> AppResult<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Git(format!(
                "`git {}` failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Err(AppError::Git(format!(
                "`git {}` produced no output",
                args.join(" ")
            )));
        }
        Ok(stdout)
    }
}

#[async_trait]
impl GitInspector for GitCli {
    async fn current_branch(&self) -> AppResult<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    async fn default_branch(&self) -> AppResult<String> {
        // Output looks like `refs/remotes/origin/main`; the branch is the
        // last path segment.
        let symbolic_ref = self.run(&["symbolic-ref", "refs/remotes/origin/HEAD"]).await?;
        symbolic_ref
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Git(format!(
                    "could not parse default branch from: {symbolic_ref}"
                ))
            })
    }

    async fn remote_url(&self) -> AppResult<String> {
        self.run(&["config", "--get", "remote.origin.url"]).await
    }
}
