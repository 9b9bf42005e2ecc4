//! Pull request status lookups
//!
//! This crate answers two questions about a GitHub repository: which pull
//! requests are currently open, and what a given pull request is called.
//! The answers come from a trait so callers can swap the transport.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        PullRequestSource trait           │
//! │  - active_pr_numbers()                   │
//! │  - pull_request(number)                  │
//! └──────────────────────────────────────────┘
//!                      │
//!                      ▼
//!            ┌──────────────────┐
//!            │      GhCli       │
//!            │ (gh pr list/view)│
//!            └──────────────────┘
//! ```
//!
//! Failures are always reported as [`PrStatusError`]. An empty set is only
//! ever returned when `gh` successfully reported zero open pull requests.
//! A list that fills the `--limit` page is a failure too
//! ([`PrStatusError::Truncated`]), never a partial set.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_pr_status::{GhCli, PullRequestSource};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), gh_pr_status::PrStatusError> {
//! let gh = GhCli::new(Some("octocat/Hello-World".to_string()))
//!     .with_timeout(Duration::from_secs(30));
//!
//! let open = gh.active_pr_numbers().await?;
//! println!("{} open pull requests", open.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gh_cli;
pub mod source;
pub mod types;

pub use error::PrStatusError;
pub use gh_cli::{parse_pr_info, parse_pr_numbers, GhCli, DEFAULT_LIST_LIMIT};
pub use source::PullRequestSource;
pub use types::PullRequestInfo;
