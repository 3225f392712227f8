use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scraped business record, produced entirely server-side. The website
/// string is the de-dup key within a result set and the key the selection
/// set tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyLead {
    pub website: String,
    #[serde(default)]
    pub keywords_found: Vec<String>,
    #[serde(default)]
    pub context_data: String,
    #[serde(default)]
    pub is_qualified: bool,
    pub search_history_id: Uuid,
    #[serde(default)]
    pub generated_email: String,
    #[serde(default)]
    pub email: Vec<String>,
}
