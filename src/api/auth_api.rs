use serde::{Deserialize, Serialize};

use crate::api::client::{into_json, into_unit, ApiClient, ApiError};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub email: String,
}

pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<(), ApiError> {
    let response = client
        .post("/auth/login")
        .json(&Credentials { email, password })
        .send()
        .await?;
    into_unit(response).await
}

pub async fn register(client: &ApiClient, email: &str, password: &str) -> Result<(), ApiError> {
    let response = client
        .post("/auth/register")
        .json(&Credentials { email, password })
        .send()
        .await?;
    into_unit(response).await
}

pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let response = client.post("/auth/logout").send().await?;
    into_unit(response).await
}

pub async fn get_profile(client: &ApiClient) -> Result<ProfileResponse, ApiError> {
    let response = client.get("/auth/profile").send().await?;
    into_json(response).await
}
