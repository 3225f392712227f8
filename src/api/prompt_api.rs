use crate::api::client::{into_json, into_unit, ApiClient, ApiError};
use crate::domain::PromptConfig;

/// A null body means no config exists for the project yet.
pub async fn fetch_prompt(
    client: &ApiClient,
    project_id: i64,
) -> Result<Option<PromptConfig>, ApiError> {
    let response = client
        .get(&format!("/api/get-prompt/{project_id}"))
        .send()
        .await?;
    into_json(response).await
}

/// Create-if-absent-else-update, keyed by project id on the backend.
pub async fn upsert_prompt(client: &ApiClient, prompt: &PromptConfig) -> Result<(), ApiError> {
    let response = client
        .post("/api/upsert-prompt")
        .json(prompt)
        .send()
        .await?;
    into_unit(response).await
}
