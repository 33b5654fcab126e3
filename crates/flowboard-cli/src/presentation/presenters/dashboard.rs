use chrono::{DateTime, TimeZone};
use flowboard_engine::{
    DeleteRequest, DraftField, FilteredRow, Pagination, Selection, WorkflowDraft, capitalize,
};
use flowboard_types::{ModalContent, SortColumn, SortDirection, Tag, WorkflowItem};

use crate::presentation::formatters::format_date_relative;
use crate::presentation::view_models::{
    DeleteModalViewModel, EditModalViewModel, FocusViewModel, HeaderViewModel,
    PaginationViewModel, RowActions, RowViewModel, StatusBarViewModel, TableViewModel,
    TagFieldViewModel, TagsBadgeViewModel,
};

pub fn present_tags_badge(tags: &[Tag]) -> TagsBadgeViewModel {
    let label = match tags {
        [] => "+ Add Tag".to_string(),
        [only] => capitalize(&only.name),
        _ => format!("{} Tags", tags.len()),
    };

    TagsBadgeViewModel {
        label,
        colors: tags.iter().map(|t| t.color.clone()).collect(),
        is_empty: tags.is_empty(),
    }
}

pub fn present_row<Tz: TimeZone>(
    row: &WorkflowItem,
    selected: bool,
    selected_count: usize,
    now: &DateTime<Tz>,
) -> RowViewModel {
    let actions = match (selected_count > 1, selected) {
        (true, true) => RowActions::DeleteAll,
        (true, false) => RowActions::None,
        (false, _) => RowActions::EditDelete,
    };

    RowViewModel {
        id: row.id,
        selected,
        kind: row.kind.clone(),
        name: row.display_name().to_string(),
        placeholder_name: !row.has_name(),
        tags: present_tags_badge(&row.tags),
        updated_label: format_date_relative(row.last_updated, now),
        actions,
    }
}

pub fn present_header(
    page_ids: &[i64],
    selection: &Selection,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
) -> HeaderViewModel {
    HeaderViewModel {
        check_state: selection.check_state(page_ids),
        sort_column,
        sort_direction,
    }
}

/// Pagination control; `None` while everything fits on one page
pub fn present_pagination(pagination: &Pagination, matching: usize) -> Option<PaginationViewModel> {
    if !Pagination::is_visible(matching) {
        return None;
    }
    Some(PaginationViewModel {
        current_page: pagination.current_page(),
        total_pages: Pagination::total_pages(matching),
        summary: pagination.summary(matching),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn present_table<Tz: TimeZone>(
    page: &[FilteredRow<'_>],
    matching: usize,
    selection: &Selection,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    pagination: &Pagination,
    cursor: usize,
    now: &DateTime<Tz>,
) -> TableViewModel {
    let page_ids: Vec<i64> = page.iter().map(|r| r.row.id).collect();
    let selected_count = selection.count();

    let rows = page
        .iter()
        .map(|r| present_row(r.row, selection.contains(r.row.id), selected_count, now))
        .collect::<Vec<_>>();

    TableViewModel {
        header: present_header(&page_ids, selection, sort_column, sort_direction),
        cursor: (!rows.is_empty()).then(|| cursor.min(rows.len() - 1)),
        rows,
        pagination: present_pagination(pagination, matching),
    }
}

pub fn present_edit_modal(draft: &WorkflowDraft) -> EditModalViewModel {
    let content = draft.content();
    let title = match content {
        ModalContent::Tags => None,
        ModalContent::Menu if draft.is_new() => Some("New Workflow".to_string()),
        ModalContent::Menu => Some("Edit Workflow".to_string()),
    };

    let focus = match draft.focus() {
        DraftField::Kind => FocusViewModel::Kind,
        DraftField::Name => FocusViewModel::Name,
        DraftField::TagName(i) => FocusViewModel::TagName(i),
        DraftField::TagColor(i) => FocusViewModel::TagColor(i),
    };

    EditModalViewModel {
        title,
        content,
        kind: draft.kind.clone(),
        name: draft.name.clone(),
        tags: draft
            .tags
            .iter()
            .map(|t| TagFieldViewModel {
                name: t.name.clone(),
                color: t.color.clone(),
            })
            .collect(),
        focus,
        submit_label: if draft.is_new() { "Create" } else { "Save" },
    }
}

pub fn present_delete_modal(request: &DeleteRequest) -> DeleteModalViewModel {
    DeleteModalViewModel {
        title: request.title(),
        message: request.message(),
    }
}

pub fn present_status_bar(
    total_items: usize,
    matching_items: usize,
    selection: &Selection,
    message: Option<&str>,
) -> StatusBarViewModel {
    StatusBarViewModel {
        total_items,
        matching_items,
        selected_count: selection.count(),
        message: message.map(str::to_string),
    }
}
