use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::client::{into_json, into_unit, ApiClient, ApiError};
use crate::domain::CompanyLead;

/// Server pagination envelope. `total_pages` is recomputed locally by the
/// companies store; `page` and `page_size` are authoritative as returned.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedCompanies {
    pub items: Vec<CompanyLead>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Serialize)]
struct CompaniesQuery {
    search_history_id: Uuid,
    page: u32,
    page_size: u32,
}

pub async fn fetch_companies(
    client: &ApiClient,
    search_history_id: Uuid,
    page: u32,
    page_size: u32,
) -> Result<PaginatedCompanies, ApiError> {
    let response = client
        .get("/api/companies")
        .query(&CompaniesQuery {
            search_history_id,
            page,
            page_size,
        })
        .send()
        .await?;
    into_json(response).await
}

/// Forwards the selected leads to the outbound webhook for bulk sending.
pub async fn send_webhook(client: &ApiClient, companies: &[CompanyLead]) -> Result<(), ApiError> {
    let response = client
        .post("/api/send-webhook")
        .json(&companies)
        .send()
        .await?;
    into_unit(response).await
}
