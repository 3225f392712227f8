use std::sync::Arc;

use crate::api::ApiClient;
use crate::cache::SelectionCache;
use crate::configuration::Settings;
use crate::stores::{
    AiAgentStore, AuthStore, CompaniesStore, ProjectStore, ScraperStore, SearchHistoryStore,
};

/// Process-wide application context, built once at startup and handed to the
/// view tree by reference. All stores share one `ApiClient` so the session
/// cookie from login covers every call.
pub struct RootStore {
    pub auth: AuthStore,
    pub projects: ProjectStore,
    pub search_history: SearchHistoryStore,
    pub companies: CompaniesStore,
    pub scraper: ScraperStore,
    pub ai_agent: AiAgentStore,
}

impl RootStore {
    pub fn build(settings: &Settings) -> anyhow::Result<Self> {
        let client = Arc::new(ApiClient::new(&settings.backend)?);
        let cache = Arc::new(SelectionCache::new(settings.cache.path.clone()));

        Ok(RootStore {
            auth: AuthStore::new(client.clone()),
            projects: ProjectStore::new(client.clone(), cache),
            search_history: SearchHistoryStore::new(client.clone()),
            companies: CompaniesStore::new(client.clone()),
            scraper: ScraperStore::new(client.clone()),
            ai_agent: AiAgentStore::new(client),
        })
    }
}
