use pagesure_core::{AppConfig, FetchMode};

use crate::browser::{BrowserFetcher, BrowserSettings};
use crate::command::CommandFetcher;
use crate::error::ScraperError;
use crate::types::ProfileSummary;

/// The single fetch strategy a running service uses.
#[derive(Debug, Clone)]
pub enum ProfileFetcher {
    Browser(BrowserFetcher),
    Command(CommandFetcher),
}

impl ProfileFetcher {
    /// Selects the strategy named by `config.fetch_mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::MissingCommand`] in command mode when no
    /// scraper command is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ScraperError> {
        match config.fetch_mode {
            FetchMode::Browser => Ok(Self::Browser(BrowserFetcher::new(
                BrowserSettings::from_app_config(config),
            ))),
            FetchMode::Command => {
                let parts = config
                    .scraper_command
                    .as_deref()
                    .ok_or(ScraperError::MissingCommand)?;
                Ok(Self::Command(CommandFetcher::from_parts(parts)?))
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> FetchMode {
        match self {
            Self::Browser(_) => FetchMode::Browser,
            Self::Command(_) => FetchMode::Command,
        }
    }

    /// Fetches `url` and returns its summary. `url` is assumed to have
    /// passed [`crate::validate_profile_url`] already.
    ///
    /// # Errors
    ///
    /// Propagates the active strategy's [`ScraperError`].
    pub async fn fetch(&self, url: &str) -> Result<ProfileSummary, ScraperError> {
        match self {
            Self::Browser(fetcher) => fetcher.fetch(url).await,
            Self::Command(fetcher) => fetcher.fetch(url).await,
        }
    }
}
