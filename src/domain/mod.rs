pub mod company;
pub mod project;
pub mod prompt;
pub mod search_history;

pub use company::*;
pub use project::*;
pub use prompt::*;
pub use search_history::*;
