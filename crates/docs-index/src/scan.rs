//! Directory scan of the gh-pages root

use gh_pages_config::{extract_pr_number, is_pr_dir_name, AppConfig};
use gh_pr_status::PullRequestSource;
use log::{debug, error, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Everything the landing page links to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteStructure {
    pub current_version: CurrentVersion,
    /// Keyed by directory name (e.g. "pr12")
    pub prs: BTreeMap<String, PrPreview>,
    /// Keyed by directory name (e.g. "v1.2")
    pub releases: BTreeMap<String, Release>,
}

/// Documentation built from the default branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentVersion {
    pub exists: bool,
    /// Languages with an index.html, in configured order
    pub languages: Vec<String>,
}

/// Published preview of one pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrPreview {
    /// None when the directory name carries no PR number
    pub number: Option<u64>,
    pub title: String,
    pub languages: Vec<String>,
}

/// Documentation of one release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub languages: Vec<String>,
}

/// Scan `base` for published documentation trees
///
/// PR titles are looked up through `source`; a failed lookup falls back to
/// `PR #<N>`. A section that cannot be listed is logged and left empty.
pub async fn scan_directory(
    base: &Path,
    config: &AppConfig,
    source: &dyn PullRequestSource,
) -> SiteStructure {
    log::info!("Scanning directory structure at: {}", base.display());

    let mut structure = SiteStructure::default();

    let current = base.join(&config.current_version_dir);
    if current.exists() {
        structure.current_version.exists = true;
        structure.current_version.languages = available_languages(&current, config);
    }

    match list_dirs(&base.join(&config.prs_dir)) {
        Ok(pr_dirs) => {
            for (name, path) in pr_dirs {
                if !is_pr_dir_name(&name) {
                    continue;
                }
                let languages = available_languages(&path, config);
                if languages.is_empty() {
                    debug!("Skipping {}: no language has an index.html", name);
                    continue;
                }
                let number = extract_pr_number(&name);
                let title = pr_title(source, &name, number).await;
                structure.prs.insert(
                    name,
                    PrPreview {
                        number,
                        title,
                        languages,
                    },
                );
            }
        }
        Err(e) => error!("Error scanning PRs: {}", e),
    }

    match list_dirs(&base.join(&config.releases_dir)) {
        Ok(release_dirs) => {
            for (name, path) in release_dirs {
                let languages = available_languages(&path, config);
                if !languages.is_empty() {
                    structure.releases.insert(name, Release { languages });
                }
            }
        }
        Err(e) => error!("Error scanning releases: {}", e),
    }

    structure
}

async fn pr_title(source: &dyn PullRequestSource, name: &str, number: Option<u64>) -> String {
    let Some(number) = number else {
        warn!("Could not extract PR number from directory: {}", name);
        return name.to_string();
    };

    match source.pull_request(number).await {
        Ok(info) if !info.title.trim().is_empty() => info.title,
        Ok(_) => format!("PR #{number}"),
        Err(e) => {
            warn!("Could not get title of PR #{}: {}", number, e);
            format!("PR #{number}")
        }
    }
}

/// Configured languages that have `<dir>/<lang>/index.html`
fn available_languages(dir: &Path, config: &AppConfig) -> Vec<String> {
    config
        .languages
        .iter()
        .filter(|lang| dir.join(lang).join("index.html").is_file())
        .cloned()
        .collect()
}

/// Subdirectories of `dir` sorted by name; a missing `dir` is empty
fn list_dirs(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gh_pr_status::{PrStatusError, PullRequestInfo};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    /// Knows the title of PR 12 only
    struct OneTitle;

    #[async_trait]
    impl PullRequestSource for OneTitle {
        async fn active_pr_numbers(&self) -> Result<BTreeSet<u64>, PrStatusError> {
            Ok(BTreeSet::from([12]))
        }

        async fn pull_request(&self, number: u64) -> Result<PullRequestInfo, PrStatusError> {
            if number == 12 {
                Ok(PullRequestInfo {
                    number,
                    title: "Add glossary".to_string(),
                })
            } else {
                Err(PrStatusError::EmptyOutput {
                    command: format!("gh pr view {number}"),
                })
            }
        }
    }

    fn touch_index(root: &Path, rel: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<html></html>").unwrap();
    }

    #[tokio::test]
    async fn test_scan_full_tree() {
        let root = tempfile::tempdir().unwrap();
        touch_index(root.path(), "versione-corrente/it");
        touch_index(root.path(), "prs/pr12/it");
        touch_index(root.path(), "prs/pr12/en");
        touch_index(root.path(), "prs/pr13/en");
        touch_index(root.path(), "releases/v1.0/en");
        touch_index(root.path(), "releases/v1.0/it");

        let structure = scan_directory(root.path(), &AppConfig::default(), &OneTitle).await;

        assert_eq!(
            structure.current_version,
            CurrentVersion {
                exists: true,
                languages: vec!["it".to_string()],
            }
        );
        assert_eq!(
            structure.prs["pr12"],
            PrPreview {
                number: Some(12),
                title: "Add glossary".to_string(),
                languages: vec!["it".to_string(), "en".to_string()],
            }
        );
        assert_eq!(structure.prs["pr13"].title, "PR #13");
        assert_eq!(
            structure.releases["v1.0"].languages,
            vec!["it".to_string(), "en".to_string()]
        );
    }

    #[tokio::test]
    async fn test_scan_empty_root() {
        let root = tempfile::tempdir().unwrap();

        let structure = scan_directory(root.path(), &AppConfig::default(), &OneTitle).await;

        assert_eq!(structure, SiteStructure::default());
    }

    #[tokio::test]
    async fn test_scan_skips_trees_without_index() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("versione-corrente")).unwrap();
        fs::create_dir_all(root.path().join("prs/pr20/it")).unwrap();
        fs::create_dir_all(root.path().join("releases/v2.0/en")).unwrap();
        touch_index(root.path(), "prs/notes/it");

        let structure = scan_directory(root.path(), &AppConfig::default(), &OneTitle).await;

        assert!(structure.current_version.exists);
        assert!(structure.current_version.languages.is_empty());
        assert!(structure.prs.is_empty());
        assert!(structure.releases.is_empty());
    }

    #[tokio::test]
    async fn test_scan_pr_without_number_uses_dir_name() {
        let root = tempfile::tempdir().unwrap();
        touch_index(root.path(), "prs/pr-archive/en");

        let structure = scan_directory(root.path(), &AppConfig::default(), &OneTitle).await;

        let preview = &structure.prs["pr-archive"];
        assert_eq!(preview.number, None);
        assert_eq!(preview.title, "pr-archive");
    }

    #[tokio::test]
    async fn test_scan_respects_configured_languages() {
        let root = tempfile::tempdir().unwrap();
        touch_index(root.path(), "releases/v1.0/de");
        touch_index(root.path(), "releases/v1.0/it");
        let config = AppConfig {
            languages: vec!["de".to_string()],
            ..AppConfig::default()
        };

        let structure = scan_directory(root.path(), &config, &OneTitle).await;

        assert_eq!(structure.releases["v1.0"].languages, vec!["de".to_string()]);
    }
}
