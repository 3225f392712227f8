use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::api::search_history_api::{self, SearchHistoryPatch};
use crate::api::ApiClient;
use crate::domain::{SearchHistoryEntry, ValidSearchHistory};
use crate::stores::observable::Observable;

/// Form state machine for the add/edit scraping-config modal. Closing the
/// modal keeps `row_clicked`, so the companies view stays anchored to the
/// same entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Add,
    Edit,
}

#[derive(Debug, Clone, Default)]
pub struct SearchHistoryState {
    pub entries: Vec<SearchHistoryEntry>,
    pub row_clicked: Option<SearchHistoryEntry>,
    pub modal: ModalState,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct SearchHistoryStore {
    state: Observable<SearchHistoryState>,
    client: Arc<ApiClient>,
}

impl SearchHistoryStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        SearchHistoryStore {
            state: Observable::default(),
            client,
        }
    }

    pub fn state(&self) -> SearchHistoryState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchHistoryState> {
        self.state.subscribe()
    }

    /// Load path: never fails to the caller. `None` signals the list could
    /// not be fetched and was left empty.
    pub async fn load_search_history(&self, project_id: i64) -> Option<Vec<SearchHistoryEntry>> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match search_history_api::fetch_search_history(&self.client, project_id).await {
            Ok(entries) => {
                self.state.update(|s| {
                    s.entries = entries.clone();
                    s.loading = false;
                });
                Some(entries)
            }
            Err(e) => {
                log::error!("Failed to load search history for project {project_id}: {e}");
                self.state.update(|s| {
                    s.entries.clear();
                    s.error = Some("Failed to load search history.".to_string());
                    s.loading = false;
                });
                None
            }
        }
    }

    /// Takes a form-validated configuration and appends the server-assigned
    /// record (id, timestamp) to the local list.
    pub async fn insert_search_history(
        &self,
        valid: &ValidSearchHistory,
    ) -> anyhow::Result<SearchHistoryEntry> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match search_history_api::insert_search_history(&self.client, valid).await {
            Ok(created) => {
                self.state.update(|s| {
                    s.entries.push(created.clone());
                    s.loading = false;
                });
                Ok(created)
            }
            Err(e) => {
                log::error!("Failed to insert search history: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to insert search history.".to_string());
                    s.loading = false;
                });
                Err(e.into())
            }
        }
    }

    /// Partial-overwrite semantics: only the fields the server returned are
    /// merged into the matching local entry.
    pub async fn update_search_history(
        &self,
        id: Uuid,
        valid: &ValidSearchHistory,
    ) -> anyhow::Result<()> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match search_history_api::update_search_history(&self.client, id, valid).await {
            Ok(patch) => {
                self.state.update(|s| {
                    if let Some(entry) = s.entries.iter_mut().find(|e| e.id == patch.id) {
                        apply_patch(entry, &patch);
                    }
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to update search history {id}: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to update search history.".to_string());
                    s.loading = false;
                });
                Err(e.into())
            }
        }
    }

    /// The delete endpoint answers with the full refreshed list, which
    /// replaces the local one. Callers always get the store's settled list
    /// back, unchanged when the call failed.
    pub async fn delete_search_history(
        &self,
        id: Uuid,
        project_id: i64,
    ) -> Vec<SearchHistoryEntry> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match search_history_api::delete_search_history(&self.client, id, project_id).await {
            Ok(refreshed) => {
                self.state.update(|s| {
                    s.entries = refreshed;
                    s.loading = false;
                });
            }
            Err(e) => {
                log::error!("Failed to delete search history {id}: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to delete search history.".to_string());
                    s.loading = false;
                });
            }
        }

        self.state.get().entries
    }

    /// The clicked row drives the companies view and the scrape trigger.
    pub fn set_row_clicked(&self, entry: Option<SearchHistoryEntry>) {
        self.state.update(|s| s.row_clicked = entry);
    }

    pub fn open_add_modal(&self) {
        self.state.update(|s| s.modal = ModalState::Add);
    }

    pub fn open_edit_modal(&self, entry: SearchHistoryEntry) {
        self.state.update(|s| {
            s.row_clicked = Some(entry);
            s.modal = ModalState::Edit;
        });
    }

    pub fn close_modal(&self) {
        self.state.update(|s| s.modal = ModalState::Closed);
    }
}

fn apply_patch(entry: &mut SearchHistoryEntry, patch: &SearchHistoryPatch) {
    if patch.city.is_some() {
        entry.city = patch.city.clone();
    }
    if patch.country_code.is_some() {
        entry.country_code = patch.country_code.clone();
    }
    if patch.location_query.is_some() {
        entry.location_query = patch.location_query.clone();
    }
    if let Some(max) = patch.max_crawled_places_per_search {
        entry.max_crawled_places_per_search = max;
    }
    if let Some(searches) = &patch.search_strings_array {
        entry.search_strings_array = searches.clone();
    }
    if let Some(filters) = &patch.category_filter_words {
        entry.category_filter_words = filters.clone();
    }
}
