//! Stale pull request preview cleanup
//!
//! The documentation workflow publishes every pull request to
//! `prs/pr<N>/` on the gh-pages branch. Once the pull request is closed or
//! merged the preview is dead weight. This crate removes those previews:
//!
//! 1. ask a [`PullRequestSource`](gh_pr_status::PullRequestSource) which pull requests are open
//! 2. turn the answer into an [`ActivePrs`], falling back to
//!    [`ActivePrs::AssumeAllActive`] whenever the answer cannot be trusted
//! 3. [`reconcile`] the PRs root against it
//!
//! The fallback is what keeps a failed `gh` call from wiping every preview:
//! with `AssumeAllActive` the reconcile pass is skipped altogether.

pub mod active_set;
pub mod cleanup;
pub mod reconcile;

pub use active_set::{ActivePrs, DEFAULT_MAX_PLAUSIBLE_OPEN_PRS};
pub use cleanup::{clean_old_pr_directories, CleanupOptions};
pub use reconcile::reconcile;
