use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Project;

/// Durable, best-effort mirror of the project list and last selection.
/// Read once at store construction, written opportunistically when the
/// selection changes. The next successful `load_projects` supersedes it
/// unconditionally, so corruption or staleness is never an error.
pub struct SelectionCache {
    path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CachedSelection {
    pub projects: Vec<Project>,
    pub selected_project: Option<Project>,
}

impl SelectionCache {
    pub fn new(path: PathBuf) -> Self {
        SelectionCache { path }
    }

    pub fn load(&self) -> Option<CachedSelection> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(e) => {
                log::warn!("Discarding unreadable selection cache: {e}");
                None
            }
        }
    }

    pub fn store(&self, projects: &[Project], selected_project: Option<&Project>) {
        let cached = CachedSelection {
            projects: projects.to_vec(),
            selected_project: selected_project.cloned(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    log::warn!("Failed to create selection cache directory: {e}");
                    return;
                }
            }
        }

        match serde_json::to_string(&cached) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::warn!("Failed to write selection cache: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize selection cache: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionCache;
    use crate::domain::Project;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SelectionCache::new(dir.path().join("selection.json"));

        assert!(cache.load().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(SelectionCache::new(path).load().is_none());
    }

    #[test]
    fn store_then_load_round_trips_selection() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SelectionCache::new(dir.path().join("nested/selection.json"));
        let project = Project {
            id: 7,
            project_name: "Dental leads".to_string(),
            description: "DACH region".to_string(),
        };

        cache.store(&[project.clone()], Some(&project));
        let cached = cache.load().unwrap();

        assert_eq!(cached.projects, vec![project.clone()]);
        assert_eq!(cached.selected_project, Some(project));
    }
}
