//! Delegated fetch through an external scraper program.

use std::process::Stdio;

use tokio::process::Command;

use crate::error::ScraperError;
use crate::types::ProfileSummary;

/// Runs an external program that prints a [`ProfileSummary`] as JSON on
/// stdout. The target URL is passed as the final argument.
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: String,
    args: Vec<String>,
}

impl CommandFetcher {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds a fetcher from a program-plus-arguments list such as
    /// `["node", "scrapers/facebook_scraper.js"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::MissingCommand`] if `parts` is empty.
    pub fn from_parts(parts: &[String]) -> Result<Self, ScraperError> {
        let (program, args) = parts.split_first().ok_or(ScraperError::MissingCommand)?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Runs the scraper for `url` and parses its output.
    ///
    /// The child is killed if this future is dropped before it exits.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Spawn`] if the program cannot be started.
    /// - [`ScraperError::ProcessFailed`] on a non-zero exit; stdout is discarded.
    /// - [`ScraperError::InvalidResponse`] if stdout is not a JSON summary.
    pub async fn fetch(&self, url: &str) -> Result<ProfileSummary, ScraperError> {
        tracing::debug!(program = %self.program, url, "running scraper process");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ScraperError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScraperError::ProcessFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice::<ProfileSummary>(&output.stdout)
            .map_err(ScraperError::InvalidResponse)
    }
}
