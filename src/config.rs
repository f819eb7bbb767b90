use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::services::geo_radius_filter::GeoRadiusFilter;
use crate::services::predicate_composer::PredicateComposer;
use crate::services::tag_aggregation::TagAggregation;

#[cfg(feature = "postgres")]
use crate::models::search_query_sql_adapter::SearchQueryOptions;
#[cfg(feature = "postgres")]
use sqlx::{PgPool, postgres::PgPoolOptions};

pub const CONFIG_FILE_NAME: &str = "search.config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub tag_aggregation: TagAggregation,
    pub tag_delimiter: String,
    pub degrees_per_km: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            tag_aggregation: TagAggregation::Store,
            tag_delimiter: ",".to_string(),
            degrees_per_km: GeoRadiusFilter::DEGREES_PER_KM,
        }
    }
}

impl SearchConfig {
    /// Reads `path` when it exists, then applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Self::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))?
        } else {
            log::debug!("{} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.ensure_valid()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Overrides fields from `DATABASE_URL`, `SEARCH_MAX_CONNECTIONS`,
    /// `SEARCH_TAG_AGGREGATION` and `SEARCH_TAG_DELIMITER`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database_url = Some(url);
        }

        if let Some(value) = lookup("SEARCH_MAX_CONNECTIONS") {
            self.max_connections = value
                .trim()
                .parse()
                .with_context(|| format!("SEARCH_MAX_CONNECTIONS is not a number: {value}"))?;
        }

        if let Some(value) = lookup("SEARCH_TAG_AGGREGATION") {
            self.tag_aggregation = TagAggregation::parse(&value)
                .ok_or_else(|| anyhow!("unknown SEARCH_TAG_AGGREGATION value: {value}"))?;
        }

        if let Some(value) = lookup("SEARCH_TAG_DELIMITER") {
            self.tag_delimiter = value;
        }

        Ok(())
    }

    pub fn ensure_valid(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(anyhow!("maxConnections must be at least 1"));
        }
        if self.tag_delimiter.is_empty() {
            return Err(anyhow!("tagDelimiter must not be empty"));
        }
        if !self.degrees_per_km.is_finite() || self.degrees_per_km <= 0.0 {
            return Err(anyhow!(
                "degreesPerKm must be a positive number, got {}",
                self.degrees_per_km
            ));
        }
        Ok(())
    }

    pub fn composer(&self) -> PredicateComposer {
        PredicateComposer::new(GeoRadiusFilter::new(self.degrees_per_km))
    }

    #[cfg(feature = "postgres")]
    pub fn query_options(&self) -> SearchQueryOptions {
        SearchQueryOptions {
            tag_aggregation: self.tag_aggregation,
            tag_delimiter: self.tag_delimiter.clone(),
        }
    }

    #[cfg(feature = "postgres")]
    pub async fn connect(&self) -> Result<PgPool> {
        let url = self
            .database_url
            .as_deref()
            .ok_or_else(|| anyhow!("database url not configured"))?;

        log::info!(
            "connecting to search database with {} connections",
            self.max_connections
        );
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(url)
            .await
            .context("failed to connect to search database")?;
        Ok(pool)
    }
}
