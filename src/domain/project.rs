use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub project_name: String,
    pub description: String,
}
