//! Locating `.gh-pages-maint.toml`
//!
//! The tools run from the root of a gh-pages checkout, so a config file
//! committed there wins over a personal one in `$HOME`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".gh-pages-maint.toml";

/// Places a config file is looked for, in priority order
///
/// The working directory first, then `$HOME` when it is set.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(Path::new(&home).join(CONFIG_FILE));
    }
    candidates
}

/// First candidate that is a regular file
///
/// Missing candidates are skipped quietly. A candidate that exists but
/// cannot be inspected, or is not a file, is skipped with a warning.
pub fn find_config_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    for candidate in candidates {
        match std::fs::metadata(candidate) {
            Ok(meta) if meta.is_file() => {
                log::info!("Using config file {}", candidate.display());
                return Some(candidate.clone());
            }
            Ok(_) => log::warn!(
                "Ignoring {}: not a regular file",
                candidate.display()
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config file at {}", candidate.display())
            }
            Err(e) => log::warn!("Ignoring {}: {}", candidate.display(), e),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_directory_comes_first() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
        assert!(candidates.iter().skip(1).all(|c| c.ends_with(CONFIG_FILE)));
    }

    #[test]
    fn test_first_existing_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "").unwrap();
        std::fs::write(&second, "").unwrap();

        let found = find_config_file(&[missing, first.clone(), second]);
        assert_eq!(found, Some(first));
    }

    #[test]
    fn test_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let as_dir = dir.path().join("checkout").join(CONFIG_FILE);
        std::fs::create_dir_all(&as_dir).unwrap();
        let home = dir.path().join("home.toml");
        std::fs::write(&home, "").unwrap();

        assert_eq!(find_config_file(&[as_dir, home.clone()]), Some(home));
    }

    #[test]
    fn test_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_config_file(&[dir.path().join("a.toml")]), None);
        assert_eq!(find_config_file(&[]), None);
    }
}
