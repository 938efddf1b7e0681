use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid profile URL: {url:?}")]
    InvalidUrl { url: Option<String> },

    #[error("browser configuration rejected: {0}")]
    BrowserConfig(String),

    #[error("headless browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("scraper command is not configured")]
    MissingCommand,

    #[error("failed to spawn scraper process {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("scraper process exited with {status}: {stderr}")]
    ProcessFailed { status: String, stderr: String },

    #[error("scraper process emitted invalid JSON: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}
