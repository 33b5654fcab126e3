use flowboard_types::{SortColumn, SortDirection, Tag};
use serde::Serialize;

/// One page of `flowboard list`
#[derive(Debug, Clone, Serialize)]
pub struct ListViewModel {
    pub query: String,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub total_pages: usize,
    /// Records matching the query, across all pages
    pub total_items: usize,
    pub rows: Vec<ListRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRowViewModel {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub tags: Vec<Tag>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: i64,
    /// Relative age label as shown in the dashboard
    pub updated_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashedUserIdViewModel {
    pub user_id: String,
    pub hashed_user_id: String,
}
