//! Configuration and directory layout for the gh-pages maintenance tools
//!
//! This crate provides:
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Repository lookup from the CI environment
//! - The gh-pages directory naming convention (`prs/pr<N>/<lang>/index.html`)

pub mod app_config;
pub mod config_file;
pub mod environment;
pub mod layout;

pub use app_config::AppConfig;
pub use config_file::{config_candidates, find_config_file, CONFIG_FILE};
pub use environment::{github_repository, GITHUB_REPOSITORY_VAR};
pub use layout::{extract_pr_number, is_pr_dir_name, PR_DIR_PREFIX};
