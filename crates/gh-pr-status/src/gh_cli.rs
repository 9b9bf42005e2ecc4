//! GitHub CLI backed pull request source
//!
//! Shells out to `gh pr list` / `gh pr view` with `--json` output. The
//! repository is passed explicitly (`--repo owner/repo`); when it is `None`
//! `gh` resolves the repository from the current working directory.

use crate::types::PrNumberRecord;
use crate::{PrStatusError, PullRequestInfo, PullRequestSource};
use async_trait::async_trait;
use log::debug;
use std::collections::BTreeSet;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const DEFAULT_PROGRAM: &str = "gh";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// `--limit` passed to `gh pr list` unless configured otherwise
///
/// gh itself stops at 30 open pull requests when no limit is given.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Pull request source that runs the GitHub CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    /// Executable to run (normally `gh`)
    program: String,
    /// Arguments placed before the `pr ...` subcommand
    leading_args: Vec<String>,
    /// Repository in `owner/repo` form
    repository: Option<String>,
    /// Upper bound for one invocation
    timeout: Duration,
    /// `--limit` for `gh pr list`, always passed
    list_limit: u32,
}

impl GhCli {
    /// Create a source for the given repository (`owner/repo`)
    pub fn new(repository: Option<String>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            leading_args: Vec::new(),
            repository,
            timeout: DEFAULT_TIMEOUT,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Use a different executable instead of `gh`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run `program leading_args.. pr ...`, e.g. a wrapper script
    pub fn with_command(
        mut self,
        program: impl Into<String>,
        leading_args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.program = program.into();
        self.leading_args = leading_args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask `gh pr list` for at most `limit` records
    ///
    /// An answer that fills the limit is reported as
    /// [`PrStatusError::Truncated`], since more pull requests may be open.
    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    fn pr_list_args(&self) -> Vec<String> {
        let mut args: Vec<String> = ["pr", "list", "--state", "open", "--json", "number"]
            .into_iter()
            .map(String::from)
            .collect();
        args.push("--limit".to_string());
        args.push(self.list_limit.to_string());
        self.push_repo_args(&mut args);
        args
    }

    fn pr_view_args(&self, number: u64) -> Vec<String> {
        let mut args = vec![
            "pr".to_string(),
            "view".to_string(),
            number.to_string(),
            "--json".to_string(),
            "number,title".to_string(),
        ];
        self.push_repo_args(&mut args);
        args
    }

    fn push_repo_args(&self, args: &mut Vec<String>) {
        if let Some(repo) = &self.repository {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
    }

    fn display_command(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.leading_args.iter().map(String::as_str))
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the CLI and return its trimmed stdout
    async fn run(&self, args: &[String]) -> Result<String, PrStatusError> {
        let command_line = self.display_command(args);
        debug!("Running {}", command_line);

        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .args(args)
            .env("GH_PROMPT_DISABLED", "1")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => {
                return Err(PrStatusError::Timeout {
                    program: self.program.clone(),
                    timeout: self.timeout,
                })
            }
            Ok(Err(source)) => {
                return Err(PrStatusError::Spawn {
                    program: self.program.clone(),
                    source,
                })
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            return Err(PrStatusError::CommandFailed {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| PrStatusError::InvalidUtf8 {
            command: command_line.clone(),
        })?;
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Err(PrStatusError::EmptyOutput {
                command: command_line,
            });
        }

        Ok(stdout.to_string())
    }
}

#[async_trait]
impl PullRequestSource for GhCli {
    async fn active_pr_numbers(&self) -> Result<BTreeSet<u64>, PrStatusError> {
        let output = self.run(&self.pr_list_args()).await?;
        let records = parse_pr_records(&output)?;
        debug!("gh reported {} open pull requests", records.len());

        // gh stops silently at the limit, so a full page may be a partial list
        if records.len() as u64 >= u64::from(self.list_limit) {
            return Err(PrStatusError::Truncated {
                limit: self.list_limit,
            });
        }

        Ok(records.into_iter().map(|pr| pr.number).collect())
    }

    async fn pull_request(&self, number: u64) -> Result<PullRequestInfo, PrStatusError> {
        let output = self.run(&self.pr_view_args(number)).await?;
        parse_pr_info(&output)
    }
}

/// Parse the output of `gh pr list --json number`
///
/// Expects an array of objects each carrying a numeric `number` field.
pub fn parse_pr_numbers(json: &str) -> Result<BTreeSet<u64>, PrStatusError> {
    Ok(parse_pr_records(json)?
        .into_iter()
        .map(|pr| pr.number)
        .collect())
}

fn parse_pr_records(json: &str) -> Result<Vec<PrNumberRecord>, PrStatusError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the output of `gh pr view --json number,title`
pub fn parse_pr_info(json: &str) -> Result<PullRequestInfo, PrStatusError> {
    Ok(serde_json::from_str(json)?)
}
