use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder returned for any field that could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display fields extracted from one profile page.
///
/// Deserialization also accepts the field names emitted by the legacy Node
/// scraper (`profilePictureUrl`, `title`) and falls back to [`NOT_AVAILABLE`]
/// for missing or null text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default, alias = "profilePictureUrl")]
    pub logo_image: Option<String>,
    #[serde(
        default = "not_available",
        alias = "title",
        deserialize_with = "string_or_sentinel"
    )]
    pub page_name: String,
    #[serde(default = "not_available", deserialize_with = "string_or_sentinel")]
    pub followers: String,
}

impl Default for ProfileSummary {
    fn default() -> Self {
        Self {
            logo_image: None,
            page_name: not_available(),
            followers: not_available(),
        }
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

fn string_or_sentinel<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(not_available))
}
