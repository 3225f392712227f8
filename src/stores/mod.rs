pub mod ai_agent_store;
pub mod auth_store;
pub mod companies_store;
pub mod observable;
pub mod project_store;
pub mod scraper_store;
pub mod search_history_store;

pub use ai_agent_store::*;
pub use auth_store::*;
pub use companies_store::*;
pub use observable::*;
pub use project_store::*;
pub use scraper_store::*;
pub use search_history_store::*;
