//! Session-local copy of the fetched records.
//!
//! Every mutation happens here and nowhere else; nothing is written back to
//! the API.

use flowboard_types::WorkflowItem;

use crate::modal::DeleteRequest;
use crate::selection::Selection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStore {
    items: Vec<WorkflowItem>,
}

impl WorkflowStore {
    pub fn new(items: Vec<WorkflowItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[WorkflowItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, original_index: usize) -> Option<&WorkflowItem> {
        self.items.get(original_index)
    }

    /// Replace everything, e.g. when the fetch completes
    pub fn replace_all(&mut self, items: Vec<WorkflowItem>) {
        self.items = items;
    }

    /// Save from the edit dialog: in place for an existing record, prepended otherwise.
    ///
    /// An index that no longer exists falls back to prepending so the edit is not lost.
    pub fn save(&mut self, original_index: Option<usize>, item: WorkflowItem) {
        match original_index.and_then(|i| self.items.get_mut(i)) {
            Some(slot) => *slot = item,
            None => self.items.insert(0, item),
        }
    }

    pub fn delete_at(&mut self, original_index: usize) -> Option<WorkflowItem> {
        (original_index < self.items.len()).then(|| self.items.remove(original_index))
    }

    /// Remove every selected record and clear the selection; returns how many went
    pub fn delete_selected(&mut self, selection: &mut Selection) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !selection.contains(item.id));
        selection.clear();
        before - self.items.len()
    }

    /// Apply a confirmed delete dialog
    pub fn confirm_delete(&mut self, request: &DeleteRequest, selection: &mut Selection) -> usize {
        match request {
            DeleteRequest::Single { original_index, .. } => {
                let removed = self.delete_at(*original_index);
                selection.retain_existing(self.items.iter().map(|item| item.id));
                usize::from(removed.is_some())
            }
            DeleteRequest::Bulk { .. } => self.delete_selected(selection),
        }
    }
}
