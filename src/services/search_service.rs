use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::entities::file::File;
use crate::entities::photo::Photo;
use crate::entities::search_criteria::SearchCriteria;
use crate::entities::search_result::SearchResults;
use crate::error::Result;
use crate::repositories::search_repo::SearchRepository;

/// Entry point for photo searches and point lookups.
pub struct SearchService {
    repository: Arc<dyn SearchRepository>,
}

impl SearchService {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }

    /// Rejects invalid criteria before any repository sees them.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResults> {
        criteria.validate().inspect_err(|err| {
            log::debug!("rejected search criteria {:?}: {}", criteria, err);
        })?;

        let started = Instant::now();
        let result = self.repository.search(criteria).await;

        match &result {
            Ok(results) => log::debug!(
                "search for {:?} returned {} of {} matches in {:?}",
                criteria,
                results.rows.len(),
                results.total,
                started.elapsed()
            ),
            Err(err) => log::warn!("search for {:?} failed: {}", criteria, err),
        }

        result
    }

    pub async fn list_files(&self, limit: i64, offset: i64) -> Result<Vec<File>> {
        self.repository.list_files(limit, offset).await
    }

    pub async fn get_file_by_id(&self, id: Uuid) -> Result<File> {
        self.repository.get_file_by_id(id).await.inspect_err(|err| {
            if err.is_not_found() {
                log::debug!("no file with id {}", id);
            }
        })
    }

    pub async fn get_file_by_hash(&self, hash: &str) -> Result<File> {
        self.repository.get_file_by_hash(hash).await.inspect_err(|err| {
            if err.is_not_found() {
                log::debug!("no file with hash {}", hash);
            }
        })
    }

    pub async fn get_photo_by_id(&self, id: Uuid) -> Result<Photo> {
        self.repository.get_photo_by_id(id).await.inspect_err(|err| {
            if err.is_not_found() {
                log::debug!("no photo with id {}", id);
            }
        })
    }
}
