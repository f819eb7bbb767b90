pub mod config;
pub mod entities;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::SearchConfig;
pub use entities::search_criteria::{SearchCriteria, SortOrder};
pub use entities::search_result::{SearchResultRow, SearchResults};
pub use error::{CriteriaError, Result, SearchError};
pub use services::SearchService;
