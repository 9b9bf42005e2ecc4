//! Application configuration
//!
//! Configuration loaded from .gh-pages-maint.toml. Every field has a default
//! matching the layout the documentation workflow publishes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from .gh-pages-maint.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one preview per pull request (e.g. "prs/pr12")
    #[serde(default = "default_prs_dir")]
    pub prs_dir: String,

    /// Directory holding one tree per release tag
    #[serde(default = "default_releases_dir")]
    pub releases_dir: String,

    /// Directory holding the documentation built from the default branch
    #[serde(default = "default_current_version_dir")]
    pub current_version_dir: String,

    /// Language subdirectories each documentation tree may contain
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Name of the landing page written at the gh-pages root
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// GitHub CLI executable
    #[serde(default = "default_gh_program")]
    pub gh_program: String,

    /// Upper bound for a single `gh` invocation, in seconds
    #[serde(default = "default_gh_timeout_secs")]
    pub gh_timeout_secs: u64,

    /// `--limit` passed to `gh pr list` (gh defaults to 30)
    #[serde(default = "default_pr_list_limit")]
    pub pr_list_limit: u32,

    /// More open PRs than this is treated as an untrustworthy answer
    #[serde(default = "default_max_plausible_open_prs")]
    pub max_plausible_open_prs: usize,

    /// SVG to PDF converter executable (rsvg-convert compatible)
    #[serde(default = "default_svg_converter")]
    pub svg_converter: String,
}

fn default_prs_dir() -> String {
    "prs".to_string()
}

fn default_releases_dir() -> String {
    "releases".to_string()
}

fn default_current_version_dir() -> String {
    "versione-corrente".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["it".to_string(), "en".to_string()]
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_gh_program() -> String {
    "gh".to_string()
}

fn default_gh_timeout_secs() -> u64 {
    60
}

fn default_pr_list_limit() -> u32 {
    1000
}

fn default_max_plausible_open_prs() -> usize {
    1000
}

fn default_svg_converter() -> String {
    "rsvg-convert".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prs_dir: default_prs_dir(),
            releases_dir: default_releases_dir(),
            current_version_dir: default_current_version_dir(),
            languages: default_languages(),
            index_file: default_index_file(),
            gh_program: default_gh_program(),
            gh_timeout_secs: default_gh_timeout_secs(),
            pr_list_limit: default_pr_list_limit(),
            max_plausible_open_prs: default_max_plausible_open_prs(),
            svg_converter: default_svg_converter(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::load_first(&crate::config_candidates())
    }

    /// Load the first config file found among `candidates`, or use defaults
    ///
    /// A file that cannot be read or parsed is reported and the defaults
    /// are used; a broken config never stops a run.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        if let Some(path) = crate::find_config_file(candidates) {
            match Self::load_from(&path) {
                Ok(config) => return config,
                Err(e) => log::warn!("{:#}, using defaults", e),
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn gh_timeout(&self) -> Duration {
        Duration::from_secs(self.gh_timeout_secs)
    }
}
