//! Clean up old PR directories in the gh-pages branch
//!
//! 1. Gets the list of open PRs using the GitHub CLI
//! 2. Scans the `prs` directory for PR directories
//! 3. Removes directories of PRs that are no longer open (closed/merged)
//!
//! If the list of open PRs cannot be trusted nothing is removed.

use gh_pages_maint::{logger, RunContext};
use pr_preview_cleanup::clean_old_pr_directories;
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("Starting cleanup-old-prs");

    let context = RunContext::load();
    let gh = context.gh_cli();

    clean_old_pr_directories(
        Path::new(&context.config.prs_dir),
        &gh,
        context.cleanup_options(),
    )
    .await;

    Ok(())
}
