//! Field extraction from a rendered profile page.
//!
//! Every extractor is best-effort: a missing element yields `None` or the
//! [`NOT_AVAILABLE`] sentinel, never an error.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::{ProfileSummary, NOT_AVAILABLE};

/// Platform name stripped out of page titles.
const PLATFORM_NAME: &str = "Facebook";

static SVG_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("svg image").expect("valid selector"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));
static HEAD_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("head > title").expect("valid selector"));

// "12K followers", "1,234 followers", "3.4 M followers"
static FOLLOWERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d[\d.,\s]*[kmb]?\s+followers?$").expect("valid followers regex")
});
static TITLE_DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|-]").expect("valid delimiter regex"));

/// Builds a [`ProfileSummary`] from a fully rendered profile page.
#[must_use]
pub fn extract_profile_summary(html: &str) -> ProfileSummary {
    let document = Html::parse_document(html);

    ProfileSummary {
        logo_image: extract_logo_image(&document),
        page_name: extract_page_name(&document).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        followers: extract_followers(&document).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

/// Image reference of the first `<image>` inside an `<svg>`.
fn extract_logo_image(document: &Html) -> Option<String> {
    let image = document.select(&SVG_IMAGE).next()?;
    image_href(image)
}

// html5ever files `xlink:href` under the xlink namespace with local name
// `href`, so match on the local name rather than the qualified one.
fn image_href(element: ElementRef<'_>) -> Option<String> {
    element
        .value()
        .attrs()
        .find(|(name, _)| *name == "href" || *name == "xlink:href")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Raw text of the first anchor that reads like "<number> followers".
fn extract_followers(document: &Html) -> Option<String> {
    document.select(&ANCHOR).find_map(|anchor| {
        let text = anchor.text().collect::<String>();
        let text = text.trim();
        FOLLOWERS_RE.is_match(text).then(|| text.to_string())
    })
}

fn extract_page_name(document: &Html) -> Option<String> {
    let title = document.select(&HEAD_TITLE).next()?;
    let name = clean_page_name(&title.text().collect::<String>());
    (!name.is_empty()).then_some(name)
}

/// Cuts a page title down to the profile's display name.
///
/// Keeps only the text before the first `|` or `-`, then removes the
/// platform name. Hyphenated names are cut too.
#[must_use]
pub fn clean_page_name(title: &str) -> String {
    let head = TITLE_DELIMITER_RE
        .split(title.trim())
        .next()
        .unwrap_or_default();
    head.trim().replace(PLATFORM_NAME, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_PAGE: &str = r#"<!DOCTYPE html>
        <html>
          <head><title>Nike | Facebook</title></head>
          <body>
            <div role="main">
              <svg viewBox="0 0 168 168">
                <mask id="m"><circle cx="84" cy="84" r="84"></circle></mask>
                <g mask="url(#m)">
                  <image x="0" y="0" height="100%" width="100%"
                         xlink:href="https://scontent.example.com/v/nike-logo.jpg?stp=dst"></image>
                </g>
              </svg>
              <h1>Nike</h1>
              <a href="/nike/likes">38M likes</a>
              <a href="/nike/followers">39M followers</a>
            </div>
          </body>
        </html>"#;

    #[test]
    fn extracts_all_three_fields() {
        let summary = extract_profile_summary(PROFILE_PAGE);
        assert_eq!(
            summary.logo_image.as_deref(),
            Some("https://scontent.example.com/v/nike-logo.jpg?stp=dst")
        );
        assert_eq!(summary.page_name, "Nike");
        assert_eq!(summary.followers, "39M followers");
    }

    #[test]
    fn empty_document_degrades_to_sentinels() {
        let summary = extract_profile_summary("<html><body><p>Log in</p></body></html>");
        assert_eq!(summary, ProfileSummary::default());
    }

    #[test]
    fn plain_href_on_svg_image_is_accepted() {
        let html = r#"<svg><image href="https://cdn.example.com/a.png"></image></svg>"#;
        let summary = extract_profile_summary(html);
        assert_eq!(
            summary.logo_image.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn followers_anchor_with_nested_markup_and_separators() {
        let html = r#"<a href="/x"><strong>1,234</strong> followers</a>"#;
        assert_eq!(extract_profile_summary(html).followers, "1,234 followers");

        let html = r#"<a href="/x">3.4K followers</a>"#;
        assert_eq!(extract_profile_summary(html).followers, "3.4K followers");
    }

    #[test]
    fn followers_text_outside_anchor_is_ignored() {
        let html = r#"<span>12K followers</span><a href="/about">About</a>"#;
        assert_eq!(extract_profile_summary(html).followers, NOT_AVAILABLE);
    }

    #[test]
    fn anchor_without_count_is_ignored() {
        let html = r#"<a href="/f">See all followers</a>"#;
        assert_eq!(extract_profile_summary(html).followers, NOT_AVAILABLE);
    }

    #[test]
    fn page_name_drops_everything_after_pipe() {
        assert_eq!(clean_page_name("Le Petit Bistro | Facebook"), "Le Petit Bistro");
    }

    #[test]
    fn page_name_drops_everything_after_hyphen() {
        assert_eq!(clean_page_name("Acme Corp - Home - Facebook"), "Acme Corp");
        assert_eq!(clean_page_name("Coca-Cola | Facebook"), "Coca");
    }

    #[test]
    fn page_name_strips_platform_token_without_delimiter() {
        assert_eq!(clean_page_name("  Facebook Acme  "), "Acme");
    }

    #[test]
    fn title_that_is_only_the_platform_name_is_not_available() {
        let html = "<html><head><title>Facebook</title></head><body></body></html>";
        assert_eq!(extract_profile_summary(html).page_name, NOT_AVAILABLE);
    }

    #[test]
    fn svg_title_is_not_mistaken_for_page_title() {
        let html = "<html><head></head><body><svg><title>Verified account</title></svg></body></html>";
        assert_eq!(extract_profile_summary(html).page_name, NOT_AVAILABLE);
    }
}
