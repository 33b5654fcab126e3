//! Search filtering and column sorting over the session's records.

use std::cmp::Ordering;

use flowboard_types::{SortColumn, SortDirection, WorkflowItem};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// A record that survived filtering, paired with its index in the unfiltered list.
///
/// Edit and delete target `original_index`, so it must stay valid after the
/// view has been filtered and reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredRow<'a> {
    pub row: &'a WorkflowItem,
    pub original_index: usize,
}

pub fn filter_and_sort<'a>(
    items: &'a [WorkflowItem],
    query: &str,
    sort_column: Option<SortColumn>,
    direction: SortDirection,
) -> Vec<FilteredRow<'a>> {
    let query = query.trim().to_lowercase();

    let mut rows: Vec<FilteredRow<'a>> = items
        .iter()
        .enumerate()
        .filter(|(_, row)| matches_query(row, &query))
        .map(|(original_index, row)| FilteredRow {
            row,
            original_index,
        })
        .collect();

    if let Some(column) = sort_column {
        // sort_by is stable: equal keys keep their relative order
        rows.sort_by(|a, b| {
            let ordering = compare(column, a.row, b.row);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    rows
}

/// Case-insensitive substring match on type, name or any tag name.
///
/// `query` must already be trimmed and lower-cased; an empty query matches everything.
pub fn matches_query(row: &WorkflowItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    row.kind.to_lowercase().contains(query)
        || row.name.to_lowercase().contains(query)
        || row
            .tags
            .iter()
            .any(|tag| tag.name.to_lowercase().contains(query))
}

/// Base comparator for a column, before the direction is applied.
///
/// `LastUpdated` is deliberately newest-first in its base order, so "ascending"
/// on that column lists the most recent record at the top.
fn compare(column: SortColumn, a: &WorkflowItem, b: &WorkflowItem) -> Ordering {
    match column {
        SortColumn::Name => name_key(&a.name).cmp(&name_key(&b.name)),
        SortColumn::Type => a.kind.to_lowercase().cmp(&b.kind.to_lowercase()),
        SortColumn::LastUpdated => b.last_updated.cmp(&a.last_updated),
    }
}

/// Sort key for names: drop one leading symbol (emoji, `#`, `[`...), then fold case.
pub fn sortable_name(name: &str) -> String {
    let mut chars = name.chars();
    let stripped = match chars.next() {
        Some(first) if !first.is_alphanumeric() && !first.is_whitespace() => chars.as_str(),
        _ => name,
    };
    stripped.to_lowercase().trim().to_string()
}

/// Accent-folded name first, so "Émile" sits beside "Emile"; the unfolded
/// lower-case name breaks ties between them.
fn name_key(name: &str) -> (String, String) {
    let sortable = sortable_name(name);
    (fold_diacritics(&sortable), sortable)
}

fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Sort state after a header click: same column flips direction, another column starts ascending
pub fn next_sort(
    current: Option<SortColumn>,
    direction: SortDirection,
    clicked: SortColumn,
) -> (Option<SortColumn>, SortDirection) {
    if current == Some(clicked) {
        (current, direction.toggled())
    } else {
        (Some(clicked), SortDirection::Asc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowboard_types::Tag;

    fn item(id: i64, kind: &str, name: &str, tags: &[&str], last_updated: i64) -> WorkflowItem {
        WorkflowItem {
            kind: kind.to_string(),
            name: name.to_string(),
            tags: tags.iter().map(|t| Tag::new(*t, "#123456")).collect(),
            last_updated,
            id,
        }
    }

    fn ids(rows: &[FilteredRow<'_>]) -> Vec<i64> {
        rows.iter().map(|r| r.row.id).collect()
    }

    fn sample() -> Vec<WorkflowItem> {
        vec![
            item(1, "Workflow", "Blog Writer", &["content"], 300),
            item(2, "Agent", "🚀 Launch Helper", &["Marketing"], 100),
            item(3, "Workflow", "alpha Report", &[], 200),
            item(4, "agent", "[Draft] Zeta", &["seo", "content"], 400),
        ]
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let items = sample();
        assert_eq!(
            ids(&filter_and_sort(&items, "   ", None, SortDirection::Asc)),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_query_matches_type_name_or_tag() {
        let items = sample();

        assert_eq!(
            ids(&filter_and_sort(&items, "AGENT", None, SortDirection::Asc)),
            vec![2, 4]
        );
        assert_eq!(
            ids(&filter_and_sort(&items, " report ", None, SortDirection::Asc)),
            vec![3]
        );
        assert_eq!(
            ids(&filter_and_sort(&items, "market", None, SortDirection::Asc)),
            vec![2]
        );
        assert_eq!(
            ids(&filter_and_sort(&items, "Content", None, SortDirection::Asc)),
            vec![1, 4]
        );
        assert!(filter_and_sort(&items, "nothing", None, SortDirection::Asc).is_empty());
    }

    #[test]
    fn test_original_index_survives_filter_and_sort() {
        let items = sample();
        let rows = filter_and_sort(&items, "agent", Some(SortColumn::Name), SortDirection::Desc);

        for row in &rows {
            assert_eq!(items[row.original_index].id, row.row.id);
        }
    }

    #[test]
    fn test_sortable_name_strips_exactly_one_symbol() {
        assert_eq!(sortable_name("🚀 Launch"), "launch");
        assert_eq!(sortable_name("[Draft] Zeta"), "draft] zeta");
        assert_eq!(sortable_name("##Tag"), "#tag");
        assert_eq!(sortable_name("Plain"), "plain");
        assert_eq!(sortable_name("9 lives"), "9 lives");
        assert_eq!(sortable_name(" spaced"), "spaced");
        assert_eq!(sortable_name(""), "");
    }

    #[test]
    fn test_sort_by_name() {
        let items = sample();
        let asc = filter_and_sort(&items, "", Some(SortColumn::Name), SortDirection::Asc);
        assert_eq!(ids(&asc), vec![3, 1, 4, 2]);

        let desc = filter_and_sort(&items, "", Some(SortColumn::Name), SortDirection::Desc);
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_by_name_folds_accents() {
        let items = vec![
            item(1, "Workflow", "Zeta", &[], 1),
            item(2, "Workflow", "Émile", &[], 2),
            item(3, "Workflow", "ebony", &[], 3),
            item(4, "Workflow", "Emile", &[], 4),
            item(5, "Workflow", "Ångström", &[], 5),
        ];

        let asc = filter_and_sort(&items, "", Some(SortColumn::Name), SortDirection::Asc);
        assert_eq!(ids(&asc), vec![5, 3, 4, 2, 1]);

        let desc = filter_and_sort(&items, "", Some(SortColumn::Name), SortDirection::Desc);
        assert_eq!(ids(&desc), vec![1, 2, 4, 3, 5]);
    }

    #[test]
    fn test_sort_by_name_is_stable_when_reapplied() {
        let items = vec![
            item(1, "Workflow", "same", &[], 1),
            item(2, "Workflow", "Same", &[], 2),
            item(3, "Workflow", "#same", &[], 3),
            item(4, "Workflow", "other", &[], 4),
        ];

        let first = filter_and_sort(&items, "", Some(SortColumn::Name), SortDirection::Asc);
        assert_eq!(ids(&first), vec![4, 1, 2, 3]);

        let reordered: Vec<WorkflowItem> = first.iter().map(|r| r.row.clone()).collect();
        let second = filter_and_sort(&reordered, "", Some(SortColumn::Name), SortDirection::Asc);
        assert_eq!(ids(&second), ids(&first));
    }

    #[test]
    fn test_sort_by_type_ignores_case() {
        let items = sample();
        let rows = filter_and_sort(&items, "", Some(SortColumn::Type), SortDirection::Asc);
        assert_eq!(ids(&rows), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_last_updated_ascending_is_newest_first() {
        let items = sample();

        let asc = filter_and_sort(&items, "", Some(SortColumn::LastUpdated), SortDirection::Asc);
        assert_eq!(ids(&asc), vec![4, 1, 3, 2]);

        let desc = filter_and_sort(&items, "", Some(SortColumn::LastUpdated), SortDirection::Desc);
        assert_eq!(ids(&desc), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_next_sort() {
        assert_eq!(
            next_sort(None, SortDirection::Asc, SortColumn::Name),
            (Some(SortColumn::Name), SortDirection::Asc)
        );
        assert_eq!(
            next_sort(Some(SortColumn::Name), SortDirection::Asc, SortColumn::Name),
            (Some(SortColumn::Name), SortDirection::Desc)
        );
        assert_eq!(
            next_sort(Some(SortColumn::Name), SortDirection::Desc, SortColumn::Type),
            (Some(SortColumn::Type), SortDirection::Asc)
        );
    }
}
