//! One complete cleanup run

use crate::{reconcile, ActivePrs, DEFAULT_MAX_PLAUSIBLE_OPEN_PRS};
use gh_pr_status::PullRequestSource;
use log::info;
use std::path::Path;
use std::time::Duration;

/// Limits applied to the pull request query of a cleanup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupOptions {
    /// More open PRs than this is treated as an untrustworthy answer
    pub max_plausible_open_prs: usize,

    /// The query is abandoned after this long and treated as failed
    pub query_timeout: Duration,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            max_plausible_open_prs: DEFAULT_MAX_PLAUSIBLE_OPEN_PRS,
            query_timeout: Duration::from_secs(120),
        }
    }
}

/// Clean up previews of pull requests that are no longer open
///
/// Queries `source` once, then reconciles `prs_dir` against the answer.
/// Returns the number of preview directories removed.
pub async fn clean_old_pr_directories(
    prs_dir: &Path,
    source: &dyn PullRequestSource,
    options: CleanupOptions,
) -> usize {
    if !prs_dir.is_dir() {
        info!(
            "The '{}' directory does not exist. Nothing to clean.",
            prs_dir.display()
        );
        return 0;
    }

    info!("Getting list of active PRs...");
    let result =
        match tokio::time::timeout(options.query_timeout, source.active_pr_numbers()).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(_) => Err(format!(
                "no answer within {:?}",
                options.query_timeout
            )),
        };

    let active = ActivePrs::resolve(result, options.max_plausible_open_prs);
    info!("Active PR numbers: {}", active);

    reconcile(prs_dir, &active)
}
