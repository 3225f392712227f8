use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One saved scraping configuration, scoped to a project. The id and
/// timestamp are assigned server-side on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    pub id: Uuid,
    pub project_id: i64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub location_query: Option<String>,
    pub max_crawled_places_per_search: u32,
    #[serde(default)]
    pub search_strings_array: Vec<String>,
    #[serde(default)]
    pub category_filter_words: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The mutually exclusive geographic targeting mode of an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeScope {
    Country { country_code: String },
    City { city: String, country_code: String },
    LocationQuery { query: String },
}

/// Raw form input for the add/edit scraping-config form. Nothing here is
/// trusted; `parse` is the only way to turn it into something a store will
/// send over the wire.
#[derive(Debug, Clone, Default)]
pub struct SearchHistoryDraft {
    pub project_id: i64,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub location_query: Option<String>,
    pub max_crawled_places_per_search: i64,
    pub search_strings_array: Vec<String>,
    pub category_filter_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Select a scrape scope: country, city and country, or a location query.")]
    MissingScope,
    #[error("Only one scrape scope may be set at a time.")]
    AmbiguousScope,
    #[error("A city requires a country code.")]
    CityWithoutCountry,
    #[error("Max crawled places must be a positive number.")]
    InvalidMaxResults,
}

/// A validated scraping configuration ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSearchHistory {
    pub project_id: i64,
    pub scope: ScrapeScope,
    pub max_crawled_places_per_search: u32,
    pub search_strings_array: Vec<String>,
    pub category_filter_words: Vec<String>,
}

impl SearchHistoryDraft {
    pub fn parse(self) -> Result<ValidSearchHistory, DraftError> {
        let city = non_empty(self.city);
        let country_code = non_empty(self.country_code);
        let location_query = non_empty(self.location_query);

        let scope = match (city, country_code, location_query) {
            (None, None, None) => return Err(DraftError::MissingScope),
            (Some(_), _, Some(_)) | (None, Some(_), Some(_)) => {
                return Err(DraftError::AmbiguousScope)
            }
            (Some(_), None, None) => return Err(DraftError::CityWithoutCountry),
            (None, Some(country_code), None) => ScrapeScope::Country { country_code },
            (Some(city), Some(country_code), None) => ScrapeScope::City { city, country_code },
            (None, None, Some(query)) => ScrapeScope::LocationQuery { query },
        };

        if self.max_crawled_places_per_search <= 0 {
            return Err(DraftError::InvalidMaxResults);
        }
        let max_crawled = u32::try_from(self.max_crawled_places_per_search)
            .map_err(|_| DraftError::InvalidMaxResults)?;

        Ok(ValidSearchHistory {
            project_id: self.project_id,
            scope,
            max_crawled_places_per_search: max_crawled,
            search_strings_array: self.search_strings_array,
            category_filter_words: self.category_filter_words,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
