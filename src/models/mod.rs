pub mod page_window;
#[cfg(feature = "postgres")]
pub mod search_query_sql_adapter;
pub mod search_predicate;
