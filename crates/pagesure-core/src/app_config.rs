use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the service turns a profile URL into a summary.
///
/// Exactly one mode is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Render the page in an in-process headless Chrome session and extract
    /// fields from the resulting HTML.
    Browser,
    /// Run an external scraper program that prints the summary as JSON.
    Command,
}

impl std::fmt::Display for FetchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchMode::Browser => write!(f, "browser"),
            FetchMode::Command => write!(f, "command"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub allowed_origins: Vec<String>,
    pub fetch_mode: FetchMode,
    /// Program followed by its leading arguments. The target URL is appended
    /// as the final argument at call time.
    pub scraper_command: Option<Vec<String>>,
    pub chrome_path: Option<PathBuf>,
    pub user_agent: String,
    pub settle_delay_ms: u64,
    pub nav_timeout_secs: u64,
    pub max_concurrent_scrapes: usize,
}
