//! Pull request data as reported by `gh --json`

use serde::{Deserialize, Serialize};

/// Basic information about a single pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,
}

/// One record of `gh pr list --json number`
#[derive(Debug, Deserialize)]
pub(crate) struct PrNumberRecord {
    pub number: u64,
}
