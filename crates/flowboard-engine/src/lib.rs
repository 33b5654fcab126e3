// Engine module - session-local workflow list logic
// This layer sits between the canonical records (types) and CLI presentation.
// Everything here is synchronous and infallible once a payload is normalized.

pub mod debounce;
pub mod draft;
pub mod filter;
pub mod modal;
pub mod normalize;
pub mod pagination;
pub mod selection;
pub mod store;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use draft::{AGENT_KIND, DraftField, WORKFLOW_KIND, WorkflowDraft, capitalize, normalize_kind};
pub use filter::{FilteredRow, filter_and_sort, matches_query, next_sort, sortable_name};
pub use modal::{DeleteRequest, EditTarget, ModalState};
pub use normalize::{normalize_item, normalize_payload, unwrap_envelope};
pub use pagination::{PAGE_SIZE, Pagination};
pub use selection::{CheckState, Selection};
pub use store::WorkflowStore;

use flowboard_types::{SortColumn, SortDirection, WorkflowItem};

// Façade API - stable entry points for the CLI layer

/// Filter, sort and cut one page out of `items` in a single call
pub fn visible_page<'a>(
    items: &'a [WorkflowItem],
    query: &str,
    sort_column: Option<SortColumn>,
    direction: SortDirection,
    pagination: &Pagination,
) -> Vec<FilteredRow<'a>> {
    let rows = filter_and_sort(items, query, sort_column, direction);
    pagination.slice(&rows).to_vec()
}
