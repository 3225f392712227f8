use serde::{Deserialize, Serialize};

/// Per-project AI prompt configuration, upserted as a unit and keyed by
/// project id on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub project_id: i64,
    #[serde(default)]
    pub email_prompt: String,
    #[serde(default)]
    pub qualification_prompt: String,
    #[serde(default)]
    pub personalization_enabled: bool,
}

impl PromptConfig {
    /// "No config yet" state for a project. Not an error.
    pub fn empty(project_id: i64) -> Self {
        PromptConfig {
            project_id,
            email_prompt: String::new(),
            qualification_prompt: String::new(),
            personalization_enabled: false,
        }
    }
}
