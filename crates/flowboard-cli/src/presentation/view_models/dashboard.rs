use flowboard_engine::CheckState;
use flowboard_types::{ModalContent, SortColumn, SortDirection};

/// Snapshot of everything the dashboard draws in one frame
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub search: SearchBarViewModel,
    pub body: BodyViewModel,
    pub status_bar: StatusBarViewModel,
    pub modal: Option<ModalViewModel>,
}

#[derive(Debug, Clone)]
pub struct SearchBarViewModel {
    pub input: String,
    pub editing: bool,
    /// Typed text not yet applied to the table
    pub pending: bool,
}

#[derive(Debug, Clone)]
pub enum BodyViewModel {
    Loading { source: String },
    Error { message: String },
    Empty,
    Table(TableViewModel),
}

#[derive(Debug, Clone)]
pub struct TableViewModel {
    pub header: HeaderViewModel,
    pub rows: Vec<RowViewModel>,
    /// Row cursor within the page
    pub cursor: Option<usize>,
    pub pagination: Option<PaginationViewModel>,
}

#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    pub check_state: CheckState,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowActions {
    EditDelete,
    /// Shown on selected rows while more than one row is selected
    DeleteAll,
    None,
}

#[derive(Debug, Clone)]
pub struct RowViewModel {
    pub id: i64,
    pub selected: bool,
    pub kind: String,
    pub name: String,
    pub placeholder_name: bool,
    pub tags: TagsBadgeViewModel,
    pub updated_label: String,
    pub actions: RowActions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsBadgeViewModel {
    pub label: String,
    pub colors: Vec<String>,
    pub is_empty: bool,
}

#[derive(Debug, Clone)]
pub struct PaginationViewModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub total_items: usize,
    pub matching_items: usize,
    pub selected_count: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ModalViewModel {
    Edit(EditModalViewModel),
    Delete(DeleteModalViewModel),
}

#[derive(Debug, Clone)]
pub struct EditModalViewModel {
    pub title: Option<String>,
    pub content: ModalContent,
    pub kind: String,
    pub name: String,
    pub tags: Vec<TagFieldViewModel>,
    pub focus: FocusViewModel,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusViewModel {
    Kind,
    Name,
    TagName(usize),
    TagColor(usize),
}

#[derive(Debug, Clone)]
pub struct TagFieldViewModel {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct DeleteModalViewModel {
    pub title: String,
    pub message: String,
}
