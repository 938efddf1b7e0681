//! Integration tests for `CommandFetcher`.
//!
//! Each test stands in for the external scraper with a small `sh -c`
//! program, so no browser or Node runtime is needed. The target URL arrives
//! as `$1`.

#![cfg(unix)]

use pagesure_scraper::{CommandFetcher, ProfileSummary, ScraperError, NOT_AVAILABLE};

const PROFILE_URL: &str = "https://www.facebook.com/nike";

/// Builds a fetcher that runs `script` under `sh`, with the URL as `$1`.
fn sh_fetcher(script: &str) -> CommandFetcher {
    CommandFetcher::new(
        "sh",
        vec!["-c".to_string(), script.to_string(), "sh".to_string()],
    )
}

#[tokio::test]
async fn fetch_parses_summary_from_stdout() {
    let fetcher = sh_fetcher(
        r#"printf '{"logo_image":"https://cdn.example.com/logo.jpg","page_name":"Nike","followers":"39M followers"}\n'"#,
    );

    let summary = fetcher.fetch(PROFILE_URL).await.expect("fetch");

    assert_eq!(
        summary,
        ProfileSummary {
            logo_image: Some("https://cdn.example.com/logo.jpg".to_string()),
            page_name: "Nike".to_string(),
            followers: "39M followers".to_string(),
        }
    );
}

#[tokio::test]
async fn fetch_passes_url_as_last_argument() {
    let fetcher = sh_fetcher(r#"printf '{"page_name":"%s"}' "$1""#);

    let summary = fetcher.fetch(PROFILE_URL).await.expect("fetch");

    assert_eq!(summary.page_name, PROFILE_URL);
    assert_eq!(summary.followers, NOT_AVAILABLE);
    assert!(summary.logo_image.is_none());
}

#[tokio::test]
async fn fetch_accepts_legacy_node_shape() {
    let fetcher = sh_fetcher(
        r#"printf '{"pageUrl":"%s","title":"Nike","verified":true,"profilePictureUrl":null,"category":null}' "$1""#,
    );

    let summary = fetcher.fetch(PROFILE_URL).await.expect("fetch");

    assert_eq!(summary.page_name, "Nike");
    assert!(summary.logo_image.is_none());
}

#[tokio::test]
async fn non_zero_exit_is_process_failure_even_with_stdout() {
    let fetcher = sh_fetcher(
        r#"printf '{"page_name":"partial"}'; echo 'Error: net::ERR_NAME_NOT_RESOLVED' >&2; exit 3"#,
    );

    let err = fetcher.fetch(PROFILE_URL).await.unwrap_err();

    match err {
        ScraperError::ProcessFailed { status, stderr } => {
            assert!(status.contains('3'), "unexpected status: {status}");
            assert_eq!(stderr, "Error: net::ERR_NAME_NOT_RESOLVED");
        }
        other => panic!("expected ProcessFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_stdout_is_invalid_response() {
    let fetcher = sh_fetcher("echo 'Scraping finished!'");

    let err = fetcher.fetch(PROFILE_URL).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::InvalidResponse(_)),
        "expected InvalidResponse, got {err:?}"
    );
}

#[tokio::test]
async fn missing_program_is_spawn_error() {
    let fetcher = CommandFetcher::new("/nonexistent/pagesure-scraper-bin", vec![]);

    let err = fetcher.fetch(PROFILE_URL).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::Spawn { .. }),
        "expected Spawn, got {err:?}"
    );
}
