//! In-process headless Chrome fetch.
//!
//! Each call launches its own browser, renders one page, and shuts the
//! browser down again. Nothing is shared between requests.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use pagesure_core::AppConfig;

use crate::error::ScraperError;
use crate::extract::extract_profile_summary;
use crate::types::ProfileSummary;

/// Launch and timing settings for one headless browser session.
#[derive(Debug, Clone)]
pub struct BrowserSettings {
    pub chrome_path: Option<PathBuf>,
    pub user_agent: String,
    /// Fixed wait after navigation so client-side rendering can finish.
    pub settle_delay: Duration,
    /// Upper bound on each DevTools request, navigation included.
    pub request_timeout: Duration,
}

impl BrowserSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            chrome_path: config.chrome_path.clone(),
            user_agent: config.user_agent.clone(),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            request_timeout: Duration::from_secs(config.nav_timeout_secs),
        }
    }

    fn browser_config(&self) -> Result<BrowserConfig, ScraperError> {
        let mut builder = BrowserConfig::builder()
            .request_timeout(self.request_timeout)
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg(format!("--user-agent={}", self.user_agent));

        if let Some(ref chrome_path) = self.chrome_path {
            builder = builder.chrome_executable(chrome_path);
        }

        builder.build().map_err(ScraperError::BrowserConfig)
    }
}

/// Fetches profile pages by rendering them in headless Chrome.
#[derive(Debug, Clone)]
pub struct BrowserFetcher {
    settings: BrowserSettings,
}

impl BrowserFetcher {
    #[must_use]
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }

    /// Renders `url` and extracts its [`ProfileSummary`].
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the browser cannot be launched or the page
    /// cannot be loaded. Missing page elements are not errors.
    pub async fn fetch(&self, url: &str) -> Result<ProfileSummary, ScraperError> {
        let html = self.render(url).await?;
        Ok(extract_profile_summary(&html))
    }

    /// Returns the fully rendered HTML of `url` after the settle delay.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::BrowserConfig`] for an unusable launch
    /// configuration and [`ScraperError::Browser`] for any DevTools failure.
    pub async fn render(&self, url: &str) -> Result<String, ScraperError> {
        let config = self.settings.browser_config()?;
        let (mut browser, mut handler) = Browser::launch(config).await?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!(error = %e, "browser handler error");
                }
            }
        });

        let result = self.capture(&browser, url).await;

        if let Err(e) = browser.close().await {
            tracing::warn!(error = %e, "failed to close headless browser");
        }
        if let Err(e) = browser.wait().await {
            tracing::warn!(error = %e, "failed to reap headless browser process");
        }
        handler_task.abort();

        result
    }

    async fn capture(&self, browser: &Browser, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "opening page in headless browser");
        let page = browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        tokio::time::sleep(self.settings.settle_delay).await;

        let html = page.content().await?;
        tracing::debug!(url, bytes = html.len(), "captured rendered page");
        Ok(html)
    }
}
