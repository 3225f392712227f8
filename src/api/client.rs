use std::time::Duration;

use itertools::Itertools;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::configuration::BackendSettings;

/// Single point of contact with the backend. The cookie store carries the
/// HttpOnly session cookie across calls, so every request is authenticated
/// once login has succeeded. No retries, no queueing: failures propagate to
/// the calling store as-is.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    long_job_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not authenticated: {0}")]
    Unauthorized(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&settings.base_url)?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            long_job_timeout: Duration::from_secs(settings.long_job_timeout_secs),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    /// Like `post`, but for the scraping job which runs for minutes.
    pub(crate) fn post_long(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path)).timeout(self.long_job_timeout)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }
}

/// Decodes a response body into an explicit schema. A 401 from any endpoint
/// maps to `Unauthorized` uniformly; other non-success statuses carry the
/// human-readable message extracted from the error body.
pub(crate) async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized(extract_detail(&body)));
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_detail(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// For endpoints whose success body is irrelevant (logout, deletes, webhook
/// forwarding): only the status matters.
pub(crate) async fn into_unit(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized(extract_detail(&body)));
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_detail(&body),
        });
    }

    Ok(())
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

/// The backend reports failures either as a single string or as a list of
/// field-validation errors.
#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Deserialize)]
struct FieldError {
    msg: String,
}

fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Detail::Message(message),
        }) => message,
        Ok(ErrorBody {
            detail: Detail::Fields(fields),
        }) => fields.into_iter().map(|f| f.msg).join("; "),
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "The backend returned an unexpected error.".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extract_detail;

    #[test]
    fn extract_detail_single_message() {
        let body = r#"{"detail": "Invalid credentials"}"#;
        assert_eq!(extract_detail(body), "Invalid credentials");
    }

    #[test]
    fn extract_detail_field_errors_are_joined() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}, {"loc": ["body", "password"], "msg": "field required"}]}"#;
        assert_eq!(
            extract_detail(body),
            "value is not a valid email address; field required"
        );
    }

    #[test]
    fn extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn extract_detail_empty_body() {
        assert_eq!(
            extract_detail("  "),
            "The backend returned an unexpected error."
        );
    }
}
