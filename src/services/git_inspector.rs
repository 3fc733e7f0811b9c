use async_trait::async_trait;

use crate::error::AppResult;

/// Read-only view of the local repository. Each query maps to one git
/// invocation; keeping this behind a trait lets tests run without spawning
/// real processes.
#[async_trait]
pub trait GitInspector: Send + Sync {
    /// Name of the branch currently checked out.
    async fn current_branch(&self) -> AppResult<String>;

    /// Branch the remote designates as HEAD, e.g. `main`.
    async fn default_branch(&self) -> AppResult<String>;

    /// Raw `remote.origin.url` value, unparsed.
    async fn remote_url(&self) -> AppResult<String>;
}
