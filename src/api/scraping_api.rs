use serde::{Deserialize, Serialize};

use crate::api::client::{into_json, ApiClient, ApiError};
use crate::domain::SearchHistoryEntry;

/// Normalized wire payload for the scraping job. Empty optional fields are
/// omitted entirely and the entry id is coerced to the string form the job
/// endpoint expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeJobPayload {
    pub category_filter_words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_query: Option<String>,
    pub max_crawled_places_per_search: u32,
    pub search_strings_array: Vec<String>,
    #[serde(rename = "search_history_id")]
    pub search_history_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl From<&SearchHistoryEntry> for ScrapeJobPayload {
    fn from(entry: &SearchHistoryEntry) -> Self {
        ScrapeJobPayload {
            category_filter_words: entry.category_filter_words.clone(),
            location_query: trimmed(entry.location_query.as_deref()),
            max_crawled_places_per_search: entry.max_crawled_places_per_search,
            search_strings_array: entry.search_strings_array.clone(),
            search_history_id: entry.id.to_string(),
            city: trimmed(entry.city.as_deref()),
            country: trimmed(entry.country_code.as_deref()),
        }
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Soft-failure contract: a 200 response still reports success or failure in
/// its own status field.
#[derive(Debug, Deserialize)]
pub struct ScrapeJobResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

pub async fn run_scraping(
    client: &ApiClient,
    entry: &SearchHistoryEntry,
) -> Result<ScrapeJobResponse, ApiError> {
    let payload = ScrapeJobPayload::from(entry);
    log::info!(
        "Starting scraping job for search history {}",
        payload.search_history_id
    );

    let response = client
        .post_long("/api/run-scraping")
        .json(&payload)
        .send()
        .await?;
    into_json(response).await
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::ScrapeJobPayload;
    use crate::domain::SearchHistoryEntry;

    #[test]
    fn payload_omits_blank_optional_fields() {
        let entry = SearchHistoryEntry {
            id: Uuid::new_v4(),
            project_id: 1,
            city: Some("  ".to_string()),
            country_code: Some("DE".to_string()),
            location_query: None,
            max_crawled_places_per_search: 50,
            search_strings_array: vec!["dentist".to_string()],
            category_filter_words: vec![],
            created_at: Utc::now(),
        };

        let payload = ScrapeJobPayload::from(&entry);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["country"], "DE");
        assert_eq!(json["search_history_id"], entry.id.to_string());
        assert!(json.get("city").is_none());
        assert!(json.get("locationQuery").is_none());
    }
}
