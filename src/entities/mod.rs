pub mod file;
pub mod photo;
pub mod search_criteria;
pub mod search_result;
