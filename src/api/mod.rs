pub mod auth_api;
pub mod client;
pub mod companies_api;
pub mod project_api;
pub mod prompt_api;
pub mod scraping_api;
pub mod search_history_api;

pub use client::{ApiClient, ApiError};
