//! Reconcile the PRs root against the active pull request set

use crate::ActivePrs;
use gh_pages_config::{extract_pr_number, is_pr_dir_name};
use log::{debug, error, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Remove every PR preview directory under `root` whose PR is not active
///
/// Returns the number of directories that were confirmed gone afterwards.
/// Nothing is returned as an error: a missing root, an unreadable root or
/// an untrusted active set all end in 0 with the reason logged.
///
/// Only direct subdirectories named `pr<N>...` are touched. Files, symlinks
/// and other directories are left alone, as is any directory whose number
/// cannot be read from its name.
pub fn reconcile(root: &Path, active: &ActivePrs) -> usize {
    if !root.is_dir() {
        info!(
            "The '{}' directory does not exist. Nothing to clean.",
            root.display()
        );
        return 0;
    }

    if !active.is_trusted() {
        info!("Active PR set is unknown, skipping cleanup of {}", root.display());
        return 0;
    }

    let candidates = match list_subdirectories(root) {
        Ok(candidates) => candidates,
        Err(e) => {
            error!("Error accessing {} directory: {}", root.display(), e);
            return 0;
        }
    };

    let mut removed_count = 0;

    for (name, path) in candidates {
        if !is_pr_dir_name(&name) {
            continue;
        }

        let Some(pr_number) = extract_pr_number(&name) else {
            warn!("Could not extract PR number from directory: {}", name);
            continue;
        };

        if active.contains(pr_number) {
            debug!("PR #{} is active, keeping {}", pr_number, path.display());
            continue;
        }

        info!(
            "PR #{} is not active, removing directory {}",
            pr_number,
            path.display()
        );
        if remove_pr_directory(&path) {
            removed_count += 1;
        }
    }

    info!(
        "Removed {} PR directories that were no longer active.",
        removed_count
    );
    removed_count
}

/// Direct subdirectories of `root`, sorted by name
///
/// Symlinks are not followed. The listing is complete before anything is
/// deleted, and any entry error fails the whole listing.
fn list_subdirectories(root: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Delete a preview tree and report whether it is really gone
fn remove_pr_directory(dir: &Path) -> bool {
    // A single undeletable file must not keep the rest of the tree around
    remove_files_best_effort(dir);

    if let Err(e) = fs::remove_dir_all(dir) {
        warn!("Error removing {}: {}", dir.display(), e);
    }

    if fs::symlink_metadata(dir).is_ok() {
        warn!(
            "Directory {} still exists after removal attempt!",
            dir.display()
        );
        false
    } else {
        info!("Successfully removed directory {}", dir.display());
        true
    }
}

/// Remove every non-directory entry below `dir`, logging failures
fn remove_files_best_effort(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => remove_files_best_effort(&path),
            Ok(_) => {
                if let Err(e) = fs::remove_file(&path) {
                    warn!("Could not remove file {}: {}", path.display(), e);
                }
            }
            Err(e) => warn!("Could not inspect {}: {}", path.display(), e),
        }
    }
}
