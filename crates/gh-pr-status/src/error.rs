//! Errors reported by pull request sources

use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking for pull request state
///
/// Every variant means "the answer is unknown". Callers must not read any
/// of them as "there are no pull requests".
#[derive(Debug, Error)]
pub enum PrStatusError {
    /// The CLI could not be started (not installed, not executable, ...)
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The CLI did not finish within the configured bound
    #[error("`{program}` did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    /// The CLI ran but reported failure
    #[error("`{command}` failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The CLI succeeded but printed nothing
    #[error("`{command}` produced no output")]
    EmptyOutput { command: String },

    /// The CLI output was not valid UTF-8
    #[error("`{command}` produced output that is not valid UTF-8")]
    InvalidUtf8 { command: String },

    /// The list filled the requested limit, so more records may exist
    #[error("Pull request list reached the limit of {limit} entries and may be incomplete")]
    Truncated { limit: u32 },

    /// The CLI output was not the expected JSON
    #[error("Failed to parse JSON output: {source}")]
    MalformedJson {
        #[from]
        source: serde_json::Error,
    },
}
