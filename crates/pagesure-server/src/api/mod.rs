mod scrape;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use pagesure_core::FetchMode;
use pagesure_scraper::ProfileFetcher;
use serde::Serialize;
use tokio::sync::Semaphore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::request_id;

pub const INVALID_URL_MESSAGE: &str = "Invalid Facebook URL";
pub const SCRAPE_FAILED_MESSAGE: &str = "Failed to scrape page";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from scraper";

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<ProfileFetcher>,
    /// Caps how many browser sessions or scraper processes run at once.
    pub scrape_permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(fetcher: Arc<ProfileFetcher>, max_concurrent_scrapes: usize) -> Self {
        Self {
            fetcher,
            scrape_permits: Arc::new(Semaphore::new(max_concurrent_scrapes)),
        }
    }
}

/// Error response. Only a fixed, generic message reaches the caller; the
/// underlying cause is logged where the error is produced.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    pub fn invalid_url() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_URL_MESSAGE,
        }
    }

    pub fn scrape_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: SCRAPE_FAILED_MESSAGE,
        }
    }

    pub fn invalid_response() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INVALID_RESPONSE_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    fetch_mode: FetchMode,
}

fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/scrape", post(scrape::scrape_profile))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(allowed_origins))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthData {
            status: "ok",
            fetch_mode: state.fetcher.mode(),
        }),
    )
}
