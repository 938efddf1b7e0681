use crate::app_config::{AppConfig, Environment, FetchMode};
use crate::ConfigError;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://pagesure-1.onrender.com";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("PAGESURE_ENV", "development"));

    let bind_addr = or_default("PAGESURE_BIND_ADDR", "0.0.0.0:3001")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PAGESURE_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("PAGESURE_LOG_LEVEL", "info");

    let allowed_origins = split_list(&or_default(
        "PAGESURE_ALLOWED_ORIGINS",
        DEFAULT_ALLOWED_ORIGINS,
    ));

    let fetch_mode = parse_fetch_mode(&or_default("PAGESURE_FETCH_MODE", "browser"))?;

    let scraper_command = lookup("PAGESURE_SCRAPER_COMMAND")
        .ok()
        .map(|raw| {
            raw.split_whitespace()
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>()
        })
        .filter(|parts| !parts.is_empty());
    if fetch_mode == FetchMode::Command && scraper_command.is_none() {
        return Err(ConfigError::MissingEnvVar(
            "PAGESURE_SCRAPER_COMMAND".to_string(),
        ));
    }

    let chrome_path = lookup("PAGESURE_CHROME_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);
    let user_agent = or_default("PAGESURE_USER_AGENT", DEFAULT_USER_AGENT);

    let settle_delay_ms = parse_u64("PAGESURE_SETTLE_DELAY_MS", "3000")?;
    let nav_timeout_secs = parse_u64("PAGESURE_NAV_TIMEOUT_SECS", "30")?;

    let max_concurrent_scrapes = or_default("PAGESURE_MAX_CONCURRENT_SCRAPES", "2")
        .parse::<usize>()
        .map_err(|e| invalid("PAGESURE_MAX_CONCURRENT_SCRAPES", e.to_string()))?;
    if max_concurrent_scrapes == 0 {
        return Err(invalid(
            "PAGESURE_MAX_CONCURRENT_SCRAPES",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        allowed_origins,
        fetch_mode,
        scraper_command,
        chrome_path,
        user_agent,
        settle_delay_ms,
        nav_timeout_secs,
        max_concurrent_scrapes,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_fetch_mode(s: &str) -> Result<FetchMode, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "browser" => Ok(FetchMode::Browser),
        "command" => Ok(FetchMode::Command),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PAGESURE_FETCH_MODE".to_string(),
            reason: format!("expected \"browser\" or \"command\", got \"{other}\""),
        }),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
