use crate::ScraperError;

/// Substring a profile URL must contain to be accepted.
pub const PLATFORM_DOMAIN: &str = "facebook.com";

/// Checks that a profile URL was supplied and points at the platform.
///
/// This is a substring check only; no URL parsing happens here.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] when `url` is missing, blank, or does
/// not contain [`PLATFORM_DOMAIN`].
pub fn validate_profile_url(url: Option<&str>) -> Result<&str, ScraperError> {
    match url.map(str::trim) {
        Some(u) if !u.is_empty() && u.contains(PLATFORM_DOMAIN) => Ok(u),
        other => Err(ScraperError::InvalidUrl {
            url: other.map(ToOwned::to_owned),
        }),
    }
}
