//! The set of pull requests considered open for one cleanup run

use log::{error, warn};
use std::collections::BTreeSet;
use std::fmt;

/// Open pull request counts above this are not believed
///
/// Two orders of magnitude above what a documentation repository keeps open.
pub const DEFAULT_MAX_PLAUSIBLE_OPEN_PRS: usize = 1000;

/// Pull requests whose previews must be kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivePrs {
    /// A trusted answer from the pull request source
    Known(BTreeSet<u64>),

    /// The answer could not be trusted; every number counts as open
    AssumeAllActive,
}

impl ActivePrs {
    /// Turn a pull request source answer into the set used for cleanup
    ///
    /// Falls back to [`ActivePrs::AssumeAllActive`] when:
    /// - the source failed (network, authentication, malformed output, timeout)
    /// - the source reported no open pull requests at all
    /// - the source reported more than `max_plausible` open pull requests
    pub fn resolve<E: fmt::Display>(
        result: Result<BTreeSet<u64>, E>,
        max_plausible: usize,
    ) -> Self {
        match result {
            Err(e) => {
                error!("Failed to get list of active PRs: {}", e);
                error!("Make sure GitHub CLI is installed and authenticated. No PR directories will be removed.");
                Self::AssumeAllActive
            }
            Ok(numbers) if numbers.is_empty() => {
                warn!("No active PRs reported; treating this as a failed query. No PR directories will be removed.");
                Self::AssumeAllActive
            }
            Ok(numbers) if numbers.len() > max_plausible => {
                warn!(
                    "{} active PRs reported, more than the plausible maximum of {}. No PR directories will be removed.",
                    numbers.len(),
                    max_plausible
                );
                Self::AssumeAllActive
            }
            Ok(numbers) => Self::Known(numbers),
        }
    }

    /// Whether the preview for `number` must be kept
    pub fn contains(&self, number: u64) -> bool {
        match self {
            Self::Known(numbers) => numbers.contains(&number),
            Self::AssumeAllActive => true,
        }
    }

    /// Whether the set came from a trusted answer and cleanup may delete
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for ActivePrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(numbers) => {
                let numbers: Vec<String> = numbers.iter().map(u64::to_string).collect();
                write!(f, "[{}]", numbers.join(", "))
            }
            Self::AssumeAllActive => f.write_str("unknown (assuming every PR is active)"),
        }
    }
}
