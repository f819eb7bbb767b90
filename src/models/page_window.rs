use crate::entities::search_criteria::SortOrder;

/// The LIMIT/OFFSET window applied after ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;

    /// A requested size outside `(0, MAX_LIMIT]` resets both size and offset.
    pub fn from_request(count: i64, offset: i64) -> Self {
        if Self::honors(count) {
            Self {
                limit: count,
                offset,
            }
        } else {
            Self::default()
        }
    }

    pub fn honors(count: i64) -> bool {
        count > 0 && count <= Self::MAX_LIMIT
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

pub struct SortOrderSqlAdapter;

impl SortOrderSqlAdapter {
    /// Photo id breaks ties so equal timestamps page deterministically.
    pub fn order_clause(order: SortOrder) -> &'static str {
        match order {
            SortOrder::Newest => "photos.taken_at DESC, photos.id DESC",
            SortOrder::Oldest => "photos.taken_at ASC, photos.id ASC",
            SortOrder::Imported => "photos.created_at DESC, photos.id DESC",
        }
    }
}
