//! The pull request source trait

use crate::{PrStatusError, PullRequestInfo};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Where open pull request state comes from
///
/// Implementations must be `Send + Sync`. The repository being queried is
/// fixed at construction time, so both methods only take what varies per
/// call.
///
/// # Failure contract
///
/// A failed or partial lookup is an `Err`, never a shortened result. In
/// particular `active_pr_numbers` returns `Ok` with an empty set only when
/// the source positively reported zero open pull requests.
///
/// # Example
///
/// ```rust,ignore
/// use gh_pr_status::PullRequestSource;
///
/// async fn is_open(source: &dyn PullRequestSource, number: u64) -> bool {
///     source
///         .active_pr_numbers()
///         .await
///         .map(|open| open.contains(&number))
///         .unwrap_or(true)
/// }
/// ```
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Numbers of all pull requests that are currently open
    async fn active_pr_numbers(&self) -> Result<BTreeSet<u64>, PrStatusError>;

    /// Look up a single pull request by number
    async fn pull_request(&self, number: u64) -> Result<PullRequestInfo, PrStatusError>;
}
