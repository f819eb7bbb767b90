#[cfg(feature = "postgres")]
pub mod postgres_search_repo;
pub mod search_repo;

#[cfg(feature = "postgres")]
pub use postgres_search_repo::PostgresSearchRepository;
pub use search_repo::SearchRepository;
