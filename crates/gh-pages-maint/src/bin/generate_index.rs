//! Generate the gh-pages landing page
//!
//! Scans the current directory (the root of the gh-pages checkout) for the
//! current version, releases and PR previews, and writes `index.html`.

use anyhow::Context;
use gh_pages_maint::{logger, RunContext};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("Starting generate-index");

    let context = RunContext::load();
    let gh = context.gh_cli();
    let today = chrono::Local::now().date_naive();

    docs_index::write_index(
        Path::new("."),
        &context.config,
        &gh,
        context.repository.as_deref(),
        today,
    )
    .await
    .context("Failed to generate index.html")?;

    Ok(())
}
