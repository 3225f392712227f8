use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{auth_api, ApiClient, ApiError};
use crate::stores::observable::Observable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<String>,
    pub error: Option<String>,
}

pub struct AuthStore {
    state: Observable<AuthState>,
    client: Arc<ApiClient>,
}

impl AuthStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        AuthStore {
            state: Observable::default(),
            client,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Probes the profile endpoint. A 401 here is not a failure, just "not
    /// logged in yet", so nothing is surfaced to the user.
    pub async fn check_auth_status(&self) -> bool {
        match auth_api::get_profile(&self.client).await {
            Ok(profile) => {
                self.state.update(|s| {
                    s.is_authenticated = true;
                    s.user = Some(profile.email);
                });
                true
            }
            Err(e) => {
                if !matches!(e, ApiError::Unauthorized(_)) {
                    log::warn!("Auth status probe failed: {e}");
                }
                self.state.update(|s| {
                    s.is_authenticated = false;
                    s.user = None;
                });
                false
            }
        }
    }

    /// The login response body is not trusted on its own; the session is
    /// confirmed by re-probing the profile endpoint.
    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<()> {
        self.state.update(|s| s.error = None);

        match auth_api::login(&self.client, email, password).await {
            Ok(()) => {
                self.check_auth_status().await;
                Ok(())
            }
            Err(e) => {
                let message = login_error_message(&e, "Login failed.");
                log::error!("Login failed: {e}");
                self.state.update(|s| {
                    s.is_authenticated = false;
                    s.error = Some(message);
                });
                Err(e.into())
            }
        }
    }

    /// Same contract as `login`, but registration does not establish a
    /// session.
    pub async fn register(&self, email: &str, password: &str) -> anyhow::Result<()> {
        self.state.update(|s| s.error = None);

        match auth_api::register(&self.client, email, password).await {
            Ok(()) => Ok(()),
            Err(e) => {
                let message = login_error_message(&e, "Registration failed.");
                log::error!("Registration failed: {e}");
                self.state.update(|s| s.error = Some(message));
                Err(e.into())
            }
        }
    }

    /// Local state resets no matter what the logout call itself did; the
    /// re-probe confirms whether the server actually dropped the session.
    pub async fn logout(&self) {
        if let Err(e) = auth_api::logout(&self.client).await {
            log::warn!("Logout call failed, clearing local session anyway: {e}");
        }

        self.check_auth_status().await;

        self.state.update(|s| {
            s.is_authenticated = false;
            s.user = None;
            s.error = None;
        });
    }
}

fn login_error_message(error: &ApiError, fallback: &str) -> String {
    let message = match error {
        ApiError::Unauthorized(message) => message.clone(),
        ApiError::Status { message, .. } => message.clone(),
        other => other.to_string(),
    };
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
