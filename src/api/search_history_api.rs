use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::client::{into_json, ApiClient, ApiError};
use crate::domain::{ScrapeScope, SearchHistoryEntry, ValidSearchHistory};

/// Wire shape of an insert/update request. The backend speaks camelCase for
/// this resource.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHistoryBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_query: Option<&'a str>,
    max_crawled_places_per_search: u32,
    search_strings_array: &'a [String],
    category_filter_words: &'a [String],
}

impl<'a> SearchHistoryBody<'a> {
    fn new(id: Option<Uuid>, valid: &'a ValidSearchHistory) -> Self {
        let (city, country_code, location_query) = match &valid.scope {
            ScrapeScope::Country { country_code } => (None, Some(country_code.as_str()), None),
            ScrapeScope::City { city, country_code } => {
                (Some(city.as_str()), Some(country_code.as_str()), None)
            }
            ScrapeScope::LocationQuery { query } => (None, None, Some(query.as_str())),
        };

        SearchHistoryBody {
            id,
            project_id: valid.project_id,
            city,
            country_code,
            location_query,
            max_crawled_places_per_search: valid.max_crawled_places_per_search,
            search_strings_array: &valid.search_strings_array,
            category_filter_words: &valid.category_filter_words,
        }
    }
}

/// The update endpoint answers with only the fields it touched; the store
/// merges them into its local entry by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryPatch {
    pub id: Uuid,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub location_query: Option<String>,
    #[serde(default)]
    pub max_crawled_places_per_search: Option<u32>,
    #[serde(default)]
    pub search_strings_array: Option<Vec<String>>,
    #[serde(default)]
    pub category_filter_words: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ListQuery {
    project_id: i64,
}

#[derive(Serialize)]
struct DeleteQuery {
    id: Uuid,
    project_id: i64,
}

pub async fn fetch_search_history(
    client: &ApiClient,
    project_id: i64,
) -> Result<Vec<SearchHistoryEntry>, ApiError> {
    let response = client
        .get("/api/search-history")
        .query(&ListQuery { project_id })
        .send()
        .await?;
    into_json(response).await
}

pub async fn insert_search_history(
    client: &ApiClient,
    valid: &ValidSearchHistory,
) -> Result<SearchHistoryEntry, ApiError> {
    let response = client
        .post("/api/insert-search-history")
        .json(&SearchHistoryBody::new(None, valid))
        .send()
        .await?;
    into_json(response).await
}

pub async fn update_search_history(
    client: &ApiClient,
    id: Uuid,
    valid: &ValidSearchHistory,
) -> Result<SearchHistoryPatch, ApiError> {
    let response = client
        .post("/api/update-search-history")
        .json(&SearchHistoryBody::new(Some(id), valid))
        .send()
        .await?;
    into_json(response).await
}

/// Delete answers with the full refreshed list for the project, not just an
/// acknowledgement.
pub async fn delete_search_history(
    client: &ApiClient,
    id: Uuid,
    project_id: i64,
) -> Result<Vec<SearchHistoryEntry>, ApiError> {
    let response = client
        .delete("/api/delete-search-history")
        .query(&DeleteQuery { id, project_id })
        .send()
        .await?;
    into_json(response).await
}
