//! CI environment lookups
//!
//! The binaries read these once at startup and pass the values down
//! explicitly; library code never consults the process environment.

/// Environment variable GitHub Actions sets to `owner/repo`
pub const GITHUB_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// Get the GitHub repository (`owner/repo`) from the environment
///
/// Returns `None` when the variable is unset or blank, in which case `gh`
/// falls back to the repository of the current working directory.
pub fn github_repository() -> Option<String> {
    normalize_repository(std::env::var(GITHUB_REPOSITORY_VAR).ok())
}

fn normalize_repository(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_repository() {
        assert_eq!(
            normalize_repository(Some("octocat/Hello-World".to_string())),
            Some("octocat/Hello-World".to_string())
        );
        assert_eq!(
            normalize_repository(Some("  octocat/docs \n".to_string())),
            Some("octocat/docs".to_string())
        );
    }

    #[test]
    fn test_normalize_blank_repository() {
        assert_eq!(normalize_repository(None), None);
        assert_eq!(normalize_repository(Some(String::new())), None);
        assert_eq!(normalize_repository(Some("   ".to_string())), None);
    }
}
