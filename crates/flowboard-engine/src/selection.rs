use std::collections::BTreeSet;

/// Tri-state of the header checkbox for the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Ids of selected workflows.
///
/// The set outlives page changes, but select-all only ever touches the ids of
/// the page it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Header checkbox: add or remove every id of the current page
    pub fn set_page(&mut self, page_ids: &[i64], checked: bool) {
        if checked {
            self.ids.extend(page_ids.iter().copied());
        } else {
            for id in page_ids {
                self.ids.remove(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }

    pub fn is_all_selected(&self, page_ids: &[i64]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn is_some_selected(&self, page_ids: &[i64]) -> bool {
        page_ids.iter().any(|id| self.ids.contains(id))
    }

    pub fn check_state(&self, page_ids: &[i64]) -> CheckState {
        if self.is_all_selected(page_ids) {
            CheckState::Checked
        } else if self.is_some_selected(page_ids) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Drop ids that no longer belong to any record
    pub fn retain_existing(&mut self, existing: impl IntoIterator<Item = i64>) {
        let existing: BTreeSet<i64> = existing.into_iter().collect();
        self.ids.retain(|id| existing.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        selection.toggle(3);
        assert!(selection.contains(3));
        selection.toggle(3);
        assert!(!selection.contains(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let page_one: Vec<i64> = (1..=10).collect();
        let page_two: Vec<i64> = (11..=15).collect();

        let mut selection = Selection::new();
        selection.toggle(2);
        selection.toggle(5);

        selection.set_page(&page_two, true);
        assert_eq!(selection.count(), 7);
        assert!(selection.is_all_selected(&page_two));
        assert!(selection.contains(2) && selection.contains(5));
        assert!(!selection.contains(1));

        selection.set_page(&page_two, false);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(selection.check_state(&page_one), CheckState::Indeterminate);
    }

    #[test]
    fn test_check_state() {
        let page = [1, 2, 3];
        let mut selection = Selection::new();
        assert_eq!(selection.check_state(&page), CheckState::Unchecked);

        selection.toggle(1);
        assert_eq!(selection.check_state(&page), CheckState::Indeterminate);

        selection.set_page(&page, true);
        assert_eq!(selection.check_state(&page), CheckState::Checked);
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        let mut selection = Selection::new();
        selection.toggle(1);
        assert!(!selection.is_all_selected(&[]));
        assert!(!selection.is_some_selected(&[]));
    }

    #[test]
    fn test_retain_existing() {
        let mut selection = Selection::new();
        selection.set_page(&[1, 2, 3], true);
        selection.retain_existing([2, 3, 4]);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![2, 3]);
    }
}
