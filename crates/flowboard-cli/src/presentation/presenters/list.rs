use chrono::{DateTime, TimeZone};
use flowboard_engine::{Pagination, filter_and_sort};
use flowboard_types::{SortColumn, SortDirection, WorkflowItem};

use crate::presentation::formatters::format_date_relative;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, HashedUserIdViewModel, ListRowViewModel, ListViewModel,
    StatusBadge,
};

/// One page of the filtered, sorted list for console output.
///
/// Out-of-range page numbers are clamped to the last page.
pub fn present_list<Tz: TimeZone>(
    items: &[WorkflowItem],
    query: &str,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    page: usize,
    now: &DateTime<Tz>,
) -> CommandResultViewModel<ListViewModel> {
    let rows = filter_and_sort(items, query, sort_column, sort_direction);
    let mut pagination = Pagination::new();
    pagination.go_to(page, rows.len());

    let page_rows = pagination
        .slice(&rows)
        .iter()
        .map(|r| ListRowViewModel {
            id: r.row.id,
            kind: r.row.kind.clone(),
            name: r.row.display_name().to_string(),
            tags: r.row.tags.clone(),
            last_updated: r.row.last_updated,
            updated_label: format_date_relative(r.row.last_updated, now),
        })
        .collect();

    let total_pages = Pagination::total_pages(rows.len());
    let content = ListViewModel {
        query: query.trim().to_string(),
        sort_column,
        sort_direction,
        page: pagination.current_page(),
        total_pages,
        total_items: rows.len(),
        rows: page_rows,
    };
    let current = content.page;

    let mut result = CommandResultViewModel::new(content);

    if items.is_empty() {
        result = result
            .with_badge(StatusBadge::info("No Workflows Found"))
            .with_suggestion(
                Guidance::new("Create a new workflow to get started")
                    .with_command("flowboard dashboard"),
            );
    } else if rows.is_empty() {
        result = result.with_badge(StatusBadge::info(format!(
            "No workflows match '{}'",
            query.trim()
        )));
    } else if current < total_pages {
        result = result.with_suggestion(
            Guidance::new("Next page").with_command(format!("flowboard list --page {}", current + 1)),
        );
    }

    result
}

pub fn present_hashed_user_id(
    user_id: String,
    hashed_user_id: String,
) -> CommandResultViewModel<HashedUserIdViewModel> {
    CommandResultViewModel::new(HashedUserIdViewModel {
        user_id,
        hashed_user_id,
    })
    .with_badge(StatusBadge::success("Hashed user id derived"))
    .with_suggestion(
        Guidance::new("Add it to your environment or .env file")
            .with_command("AIROPS_HASHED_USER_ID=<value>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn items(n: i64) -> Vec<WorkflowItem> {
        (1..=n)
            .map(|i| WorkflowItem {
                kind: "Workflow".to_string(),
                name: format!("Flow {:02}", i),
                tags: vec![],
                last_updated: 1_700_000_000 + i,
                id: i,
            })
            .collect()
    }

    #[test]
    fn test_list_clamps_page_and_counts_matches() {
        let now = Utc::now();
        let result = present_list(&items(25), "", Some(SortColumn::Name), SortDirection::Asc, 9, &now);

        assert_eq!(result.content.page, 3);
        assert_eq!(result.content.total_pages, 3);
        assert_eq!(result.content.total_items, 25);
        assert_eq!(result.content.rows.len(), 5);
        assert_eq!(result.content.rows[0].name, "Flow 21");
        assert!(result.badge.is_none());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_list_suggests_next_page() {
        let now = Utc::now();
        let result = present_list(&items(15), "", None, SortDirection::Asc, 1, &now);

        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("flowboard list --page 2")
        );
    }

    #[test]
    fn test_list_empty_states() {
        let now = Utc::now();
        let empty = present_list(&[], "", None, SortDirection::Asc, 1, &now);
        assert_eq!(empty.badge.map(|b| b.label).as_deref(), Some("No Workflows Found"));

        let no_match = present_list(&items(3), " zzz ", None, SortDirection::Asc, 1, &now);
        assert_eq!(
            no_match.badge.map(|b| b.label).as_deref(),
            Some("No workflows match 'zzz'")
        );
        assert_eq!(no_match.content.total_pages, 0);
        assert_eq!(no_match.content.page, 1);
    }
}
