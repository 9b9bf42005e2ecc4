//! Settings shared by every command
//!
//! Everything that comes from the process environment or the config file is
//! read here, once, and handed to the library crates explicitly.

use gh_pages_config::{github_repository, AppConfig, GITHUB_REPOSITORY_VAR};
use gh_pr_status::GhCli;
use pr_preview_cleanup::CleanupOptions;

/// Configuration and environment of one command run
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: AppConfig,
    /// `owner/repo` from GITHUB_REPOSITORY, if set
    pub repository: Option<String>,
}

impl RunContext {
    /// Load `.env`, the config file and the repository from the environment
    pub fn load() -> Self {
        // Outside of GitHub Actions the repository may come from a .env file
        if std::env::var(GITHUB_REPOSITORY_VAR).is_err() {
            match dotenvy::dotenv() {
                Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
                Err(_) => log::debug!(".env file not found, will rely on environment variables"),
            }
        }

        let context = Self::new(AppConfig::load(), github_repository());
        match &context.repository {
            Some(repo) => log::info!("Using repository {}", repo),
            None => log::info!(
                "{} is not set, gh will use the repository of the current directory",
                GITHUB_REPOSITORY_VAR
            ),
        }
        context
    }

    pub fn new(config: AppConfig, repository: Option<String>) -> Self {
        Self { config, repository }
    }

    /// GitHub CLI source configured for this run
    pub fn gh_cli(&self) -> GhCli {
        GhCli::new(self.repository.clone())
            .with_program(self.config.gh_program.clone())
            .with_timeout(self.config.gh_timeout())
            .with_list_limit(self.config.pr_list_limit)
    }

    pub fn cleanup_options(&self) -> CleanupOptions {
        CleanupOptions {
            max_plausible_open_prs: self.config.max_plausible_open_prs,
            query_timeout: self.config.gh_timeout(),
        }
    }
}
