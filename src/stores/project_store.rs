use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{project_api, ApiClient};
use crate::cache::SelectionCache;
use crate::domain::{NewProject, Project};
use crate::stores::observable::Observable;

#[derive(Debug, Clone, Default)]
pub struct ProjectState {
    pub projects: Vec<Project>,
    pub selected_project: Option<Project>,
    pub loading: bool,
    pub delete_loading: bool,
    pub error: Option<String>,
}

/// Owns the project list and the single "selected project" the rest of the
/// dashboard hangs off. The selection survives restarts through the
/// `SelectionCache`; the cached copy is only a warm start and is overwritten
/// by the next successful load.
pub struct ProjectStore {
    state: Observable<ProjectState>,
    client: Arc<ApiClient>,
    cache: Arc<SelectionCache>,
}

impl ProjectStore {
    pub fn new(client: Arc<ApiClient>, cache: Arc<SelectionCache>) -> Self {
        let mut initial = ProjectState::default();
        if let Some(cached) = cache.load() {
            initial.projects = cached.projects;
            initial.selected_project = cached.selected_project;
        }

        ProjectStore {
            state: Observable::new(initial),
            client,
            cache,
        }
    }

    pub fn state(&self) -> ProjectState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProjectState> {
        self.state.subscribe()
    }

    /// Replaces the list with the server's. With nothing selected, the last
    /// list element becomes the selection (list-tail convention). A cached
    /// selection that no longer exists server-side is dropped the same way.
    pub async fn load_projects(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match project_api::fetch_projects(&self.client).await {
            Ok(projects) => {
                self.state.update(|s| {
                    s.projects = projects;
                    let selection_still_exists = s
                        .selected_project
                        .as_ref()
                        .is_some_and(|sel| s.projects.iter().any(|p| p.id == sel.id));
                    if !selection_still_exists {
                        s.selected_project = s.projects.last().cloned();
                    }
                    s.loading = false;
                });
            }
            Err(e) => {
                log::error!("Failed to load projects: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to load projects.".to_string());
                    s.loading = false;
                });
            }
        }
    }

    /// Pure state assignment, persisted opportunistically. Selecting `None`
    /// clears the dependent views.
    pub fn select_project(&self, project: Option<Project>) {
        self.state.update(|s| s.selected_project = project);

        let snapshot = self.state.get();
        self.cache
            .store(&snapshot.projects, snapshot.selected_project.as_ref());
    }

    pub async fn create_new_project(&self, project: NewProject) -> anyhow::Result<Project> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match project_api::create_project(&self.client, &project).await {
            Ok(created) => {
                self.state.update(|s| {
                    s.projects.push(created.clone());
                    s.selected_project = Some(created.clone());
                    s.loading = false;
                });
                Ok(created)
            }
            Err(e) => {
                log::error!("Failed to create project: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to create project.".to_string());
                    s.loading = false;
                });
                Err(e.into())
            }
        }
    }

    /// Removes the project locally on success. If it was the selected one,
    /// the list's new last element (or nothing) takes its place.
    pub async fn delete_project(&self, project_id: i64) -> anyhow::Result<()> {
        self.state.update(|s| {
            s.delete_loading = true;
            s.error = None;
        });

        match project_api::delete_project(&self.client, project_id).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.projects.retain(|p| p.id != project_id);
                    if s.selected_project
                        .as_ref()
                        .is_some_and(|sel| sel.id == project_id)
                    {
                        s.selected_project = s.projects.last().cloned();
                    }
                    s.delete_loading = false;
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to delete project {project_id}: {e}");
                self.state.update(|s| {
                    s.error = Some("Failed to delete project.".to_string());
                    s.delete_loading = false;
                });
                Err(e.into())
            }
        }
    }
}
