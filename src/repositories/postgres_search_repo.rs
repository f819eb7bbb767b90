use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::search_repo::SearchRepository;
use crate::config::SearchConfig;
use crate::entities::file::File;
use crate::entities::photo::Photo;
use crate::entities::search_criteria::SearchCriteria;
use crate::entities::search_result::{SearchResultRow, SearchResults};
use crate::error::{Result, SearchError};
use crate::models::search_query_sql_adapter::{SearchQueryOptions, SearchQuerySqlAdapter};
use crate::services::predicate_composer::PredicateComposer;
use crate::services::tag_aggregation::{TagAggregation, aggregate_tags};

pub struct PostgresSearchRepository {
    pool: PgPool,
    composer: PredicateComposer,
    options: SearchQueryOptions,
}

impl PostgresSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_options(pool, PredicateComposer::default(), SearchQueryOptions::default())
    }

    pub fn with_options(
        pool: PgPool,
        composer: PredicateComposer,
        options: SearchQueryOptions,
    ) -> Self {
        Self {
            pool,
            composer,
            options,
        }
    }

    pub async fn from_config(config: &SearchConfig) -> anyhow::Result<Self> {
        let pool = config.connect().await?;
        Ok(Self::with_options(
            pool,
            config.composer(),
            config.query_options(),
        ))
    }

    async fn load_tag_labels(&self, rows: &mut [SearchResultRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let photo_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let label_rows = sqlx::query(
            r#"
            SELECT pt.photo_id, t.tag_label
            FROM photo_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.photo_id = ANY($1)
            "#,
        )
        .bind(&photo_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut labels = Vec::with_capacity(label_rows.len());
        for row in label_rows {
            let photo_id: Uuid = row.try_get("photo_id")?;
            let label: String = row.try_get("tag_label")?;
            labels.push((photo_id, label));
        }

        aggregate_tags(rows, labels, &self.options.tag_delimiter);
        Ok(())
    }

    async fn find_photo(&self, id: Uuid) -> Result<Option<Photo>> {
        let sql = format!("SELECT {} FROM photos WHERE photos.id = $1", Photo::COLUMNS);
        let photo = sqlx::query_as::<_, Photo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(photo)
    }

    async fn attach_photo(&self, file: File) -> Result<File> {
        match self.find_photo(file.photo_id).await? {
            Some(photo) => Ok(file.with_photo(photo)),
            None => {
                log::warn!("file {} references missing photo {}", file.id, file.photo_id);
                Ok(file)
            }
        }
    }
}

#[async_trait]
impl SearchRepository for PostgresSearchRepository {
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResults> {
        criteria.validate()?;

        let predicates = self.composer.compose(criteria);
        let window = criteria.page_window();
        let adapter = SearchQuerySqlAdapter::new(&predicates, &self.options);
        log::debug!(
            "search with {} predicates, order {:?}, limit {} offset {}",
            predicates.len(),
            criteria.order,
            window.limit,
            window.offset
        );

        let mut select = adapter.select_query(criteria.order, window);
        let mut rows = select
            .build_query_as::<SearchResultRow>()
            .fetch_all(&self.pool)
            .await?;

        let mut count = adapter.count_query();
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        if self.options.tag_aggregation == TagAggregation::Application {
            self.load_tag_labels(&mut rows).await?;
        }

        Ok(SearchResults::new(rows, total))
    }

    async fn list_files(&self, limit: i64, offset: i64) -> Result<Vec<File>> {
        let sql = format!(
            "SELECT {} FROM files ORDER BY files.id LIMIT $1 OFFSET $2",
            File::COLUMNS
        );
        let files = sqlx::query_as::<_, File>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(files)
    }

    async fn get_file_by_id(&self, id: Uuid) -> Result<File> {
        let sql = format!("SELECT {} FROM files WHERE files.id = $1", File::COLUMNS);
        let file = sqlx::query_as::<_, File>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| SearchError::not_found("file", id))?;

        self.attach_photo(file).await
    }

    async fn get_file_by_hash(&self, hash: &str) -> Result<File> {
        let sql = format!(
            "SELECT {} FROM files WHERE files.file_hash = $1 ORDER BY files.id LIMIT 1",
            File::COLUMNS
        );
        let file = sqlx::query_as::<_, File>(&sql)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| SearchError::not_found("file", hash))?;

        self.attach_photo(file).await
    }

    async fn get_photo_by_id(&self, id: Uuid) -> Result<Photo> {
        self.find_photo(id)
            .await?
            .ok_or_else(|| SearchError::not_found("photo", id))
    }
}
