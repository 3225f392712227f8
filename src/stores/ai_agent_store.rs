use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::watch;

use crate::api::{prompt_api, ApiClient};
use crate::domain::PromptConfig;
use crate::stores::observable::Observable;

#[derive(Debug, Clone)]
pub struct AiAgentState {
    pub prompt: PromptConfig,
    pub is_generating: bool,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

impl Default for AiAgentState {
    fn default() -> Self {
        AiAgentState {
            prompt: PromptConfig::empty(0),
            is_generating: false,
            error: None,
            success_message: None,
        }
    }
}

/// Holds the one prompt configuration for whichever project was last
/// fetched. Field setters back the controlled inputs of the AI-agent form.
pub struct AiAgentStore {
    state: Observable<AiAgentState>,
    client: Arc<ApiClient>,
}

impl AiAgentStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        AiAgentStore {
            state: Observable::default(),
            client,
        }
    }

    pub fn state(&self) -> AiAgentState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<AiAgentState> {
        self.state.subscribe()
    }

    /// A null response means no config exists yet for the project; that is
    /// an empty config stamped with the project id, not a failure.
    pub async fn fetch_prompt(&self, project_id: i64) {
        self.state.update(|s| s.error = None);

        match prompt_api::fetch_prompt(&self.client, project_id).await {
            Ok(Some(prompt)) => self.state.update(|s| s.prompt = prompt),
            Ok(None) => self
                .state
                .update(|s| s.prompt = PromptConfig::empty(project_id)),
            Err(e) => {
                log::error!("Failed to fetch prompt for project {project_id}: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to fetch prompt. Please try again later.".to_string());
                });
            }
        }
    }

    /// Upserts the full current config; the backend disambiguates insert vs
    /// update by project id. Refuses to call the network without one.
    pub async fn save_prompt(&self) -> anyhow::Result<()> {
        let prompt = self.state.get().prompt;
        if prompt.project_id == 0 {
            self.state
                .update(|s| s.error = Some("Project ID is required.".to_string()));
            return Err(anyhow!("cannot save a prompt without a project id"));
        }

        self.state.update(|s| {
            s.is_generating = true;
            s.error = None;
            s.success_message = None;
        });

        match prompt_api::upsert_prompt(&self.client, &prompt).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.is_generating = false;
                    s.success_message = Some("Prompt configuration saved.".to_string());
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save prompt: {e}");
                self.state.update(|s| {
                    s.is_generating = false;
                    s.error = Some("Failed to save prompt. Please try again later.".to_string());
                });
                Err(e.into())
            }
        }
    }

    pub fn set_email_prompt(&self, text: String) {
        self.state.update(|s| s.prompt.email_prompt = text);
    }

    pub fn set_qualification_prompt(&self, text: String) {
        self.state.update(|s| s.prompt.qualification_prompt = text);
    }

    pub fn set_personalization(&self, enabled: bool) {
        self.state
            .update(|s| s.prompt.personalization_enabled = enabled);
    }
}
