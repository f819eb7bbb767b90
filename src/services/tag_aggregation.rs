use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::search_result::SearchResultRow;

/// Where tag labels are joined into the per-photo `tags` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAggregation {
    /// The store aggregates with `STRING_AGG` inside the grouped query.
    #[default]
    Store,
    /// The page is fetched without tags and labels are joined in memory.
    Application,
}

impl TagAggregation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "store" => Some(Self::Store),
            "application" | "app" => Some(Self::Application),
            _ => None,
        }
    }
}

/// Fills each row's `tags` with the sorted, de-duplicated labels belonging
/// to its photo. Rows are never added or removed.
pub fn aggregate_tags<I>(rows: &mut [SearchResultRow], labels: I, delimiter: &str)
where
    I: IntoIterator<Item = (Uuid, String)>,
{
    let mut by_photo: HashMap<Uuid, Vec<String>> = HashMap::new();
    for (photo_id, label) in labels {
        by_photo.entry(photo_id).or_default().push(label);
    }

    for row in rows.iter_mut() {
        row.tags = match by_photo.get_mut(&row.id) {
            Some(labels) => {
                labels.sort();
                labels.dedup();
                labels.join(delimiter)
            }
            None => String::new(),
        };
    }
}
