//! gh-pages directory naming convention
//!
//! The publishing workflow writes one preview per pull request under the PRs
//! root, named `pr<N>` (e.g. `prs/pr12/it/index.html`). Cleanup and the
//! landing page both read these names back.

use regex::Regex;
use std::sync::OnceLock;

/// Literal prefix every managed PR preview directory starts with
pub const PR_DIR_PREFIX: &str = "pr";

/// Check whether a directory name belongs to the PR preview convention
///
/// Only the prefix is checked; a name like `pr-archive` passes here but
/// yields no number from [`extract_pr_number`].
pub fn is_pr_dir_name(name: &str) -> bool {
    name.starts_with(PR_DIR_PREFIX)
}

/// Extract the PR number from a directory name (e.g. `pr12` -> 12)
///
/// The first `pr<digits>` occurrence wins. Returns `None` when there is no
/// such occurrence or the digits do not fit a `u64`.
pub fn extract_pr_number(name: &str) -> Option<u64> {
    static PR_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = PR_NUMBER_REGEX.get_or_init(|| Regex::new(r"pr(\d+)").unwrap());

    let captures = re.captures(name)?;
    captures.get(1)?.as_str().parse().ok()
}
