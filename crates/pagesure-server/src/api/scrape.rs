//! `POST /api/scrape`: profile URL in, three display fields out.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use pagesure_scraper::{validate_profile_url, ProfileSummary, ScraperError};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ScrapeRequest {
    pub url: Option<String>,
}

pub(super) async fn scrape_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ProfileSummary>, ApiError> {
    // An unreadable body is the same client mistake as a missing URL.
    let requested = match payload {
        Ok(Json(body)) => body.url,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "unreadable scrape body");
            None
        }
    };

    let url = match validate_profile_url(requested.as_deref()) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, error = %e, "rejected scrape request");
            return Err(ApiError::invalid_url());
        }
    };

    tracing::info!(request_id = %req_id.0, url, "scrape requested");

    let Ok(_permit) = state.scrape_permits.acquire().await else {
        tracing::error!(request_id = %req_id.0, "scrape permits closed");
        return Err(ApiError::scrape_failed());
    };

    match state.fetcher.fetch(url).await {
        Ok(summary) => {
            tracing::info!(
                request_id = %req_id.0,
                url,
                page_name = %summary.page_name,
                followers = %summary.followers,
                has_logo = summary.logo_image.is_some(),
                "scrape completed"
            );
            Ok(Json(summary))
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, url, error = %e, "scrape failed");
            Err(map_scraper_error(&e))
        }
    }
}

fn map_scraper_error(error: &ScraperError) -> ApiError {
    match error {
        ScraperError::InvalidUrl { .. } => ApiError::invalid_url(),
        ScraperError::InvalidResponse(_) => ApiError::invalid_response(),
        ScraperError::BrowserConfig(_)
        | ScraperError::Browser(_)
        | ScraperError::MissingCommand
        | ScraperError::Spawn { .. }
        | ScraperError::ProcessFailed { .. } => ApiError::scrape_failed(),
    }
}
