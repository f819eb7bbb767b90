use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::file::File;
use crate::entities::photo::Photo;
use crate::entities::search_criteria::SearchCriteria;
use crate::entities::search_result::SearchResults;
use crate::error::Result;

#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResults>;
    async fn list_files(&self, limit: i64, offset: i64) -> Result<Vec<File>>;
    async fn get_file_by_id(&self, id: Uuid) -> Result<File>;
    async fn get_file_by_hash(&self, hash: &str) -> Result<File>;
    async fn get_photo_by_id(&self, id: Uuid) -> Result<Photo>;
}
