//! gh-pages landing page
//!
//! Scans the gh-pages root for published documentation trees and writes an
//! `index.html` linking to each of them:
//!
//! ```text
//! <root>/
//! ├── versione-corrente/{it,en}/index.html
//! ├── releases/<tag>/{it,en}/index.html
//! └── prs/pr<N>/{it,en}/index.html
//! ```

pub mod render;
pub mod scan;

pub use render::{escape_html, language_label, render_html};
pub use scan::{scan_directory, CurrentVersion, PrPreview, Release, SiteStructure};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gh_pages_config::AppConfig;
use gh_pr_status::PullRequestSource;
use std::path::{Path, PathBuf};

/// Scan `base`, render the landing page and write it to `base/<index_file>`
///
/// Returns the path of the written file.
pub async fn write_index(
    base: &Path,
    config: &AppConfig,
    source: &dyn PullRequestSource,
    repository: Option<&str>,
    generated_on: NaiveDate,
) -> Result<PathBuf> {
    let structure = scan_directory(base, config, source).await;

    log::info!("Directory structure found:");
    log::info!(
        "{}: exists={} languages={:?}",
        config.current_version_dir,
        structure.current_version.exists,
        structure.current_version.languages
    );
    log::info!("PRs: {} found", structure.prs.len());
    log::info!("Releases: {} found", structure.releases.len());
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{}", serde_json::to_string_pretty(&structure)?);
    }

    let html = render_html(&structure, config, repository, generated_on);

    let index_path = base.join(&config.index_file);
    std::fs::write(&index_path, html)
        .with_context(|| format!("Error writing {}", index_path.display()))?;
    log::info!("Generated index.html successfully at {}", index_path.display());

    Ok(index_path)
}
