/// Source and base branch of the pull request, fixed once resolved.
#[derive(Debug, Clone)]
pub struct BranchPair {
    /// Branch currently checked out; becomes the PR head.
    pub head: String,
    /// Branch the PR targets: the --base override or the remote's default.
    pub base: String,
}
