use serde::Serialize;

use crate::api::client::{into_json, into_unit, ApiClient, ApiError};
use crate::domain::{NewProject, Project};

pub async fn fetch_projects(client: &ApiClient) -> Result<Vec<Project>, ApiError> {
    let response = client.get("/api/get-projects").send().await?;
    into_json(response).await
}

pub async fn create_project(client: &ApiClient, project: &NewProject) -> Result<Project, ApiError> {
    let response = client.post("/api/new-project").json(project).send().await?;
    into_json(response).await
}

#[derive(Serialize)]
struct DeleteProjectQuery {
    project_id: i64,
}

pub async fn delete_project(client: &ApiClient, project_id: i64) -> Result<(), ApiError> {
    let response = client
        .delete("/api/delete-project")
        .query(&DeleteProjectQuery { project_id })
        .send()
        .await?;
    into_unit(response).await
}
