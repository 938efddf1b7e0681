pub mod browser;
pub mod command;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod types;
pub mod validate;

pub use browser::{BrowserFetcher, BrowserSettings};
pub use command::CommandFetcher;
pub use error::ScraperError;
pub use extract::extract_profile_summary;
pub use fetcher::ProfileFetcher;
pub use types::{ProfileSummary, NOT_AVAILABLE};
pub use validate::{validate_profile_url, PLATFORM_DOMAIN};
