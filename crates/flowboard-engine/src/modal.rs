//! Which dialog is open and what it targets.
//!
//! ```text
//! Closed --new--------> Open { Menu, None }
//! Closed --edit(row)--> Open { Menu, Some(row) }
//! Closed --tags(row)--> Open { Tags, Some(row) }
//! Open   --close/save-> Closed
//! ```

use flowboard_types::{ModalContent, WorkflowItem};

/// Record being edited plus where it lives in the unfiltered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub item: WorkflowItem,
    pub original_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        content: ModalContent,
        target: Option<EditTarget>,
    },
}

impl ModalState {
    pub fn open_new(&mut self) {
        *self = ModalState::Open {
            content: ModalContent::Menu,
            target: None,
        };
    }

    pub fn open_edit(&mut self, item: WorkflowItem, original_index: usize) {
        *self = ModalState::Open {
            content: ModalContent::Menu,
            target: Some(EditTarget {
                item,
                original_index,
            }),
        };
    }

    pub fn open_tags(&mut self, item: WorkflowItem, original_index: usize) {
        *self = ModalState::Open {
            content: ModalContent::Tags,
            target: Some(EditTarget {
                item,
                original_index,
            }),
        };
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn content(&self) -> Option<ModalContent> {
        match self {
            ModalState::Open { content, .. } => Some(*content),
            ModalState::Closed => None,
        }
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            ModalState::Open { target, .. } => target.as_ref(),
            ModalState::Closed => None,
        }
    }
}

/// A pending delete awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    Single { original_index: usize, name: String },
    Bulk { count: usize },
}

impl DeleteRequest {
    pub fn title(&self) -> String {
        match self {
            DeleteRequest::Single { name, .. } => format!("Delete {}", name),
            DeleteRequest::Bulk { count: 1 } => "Delete 1 Workflow".to_string(),
            DeleteRequest::Bulk { count } => format!("Delete {} Workflows", count),
        }
    }

    pub fn message(&self) -> String {
        match self {
            DeleteRequest::Bulk { count } if *count > 1 => format!(
                "Are you sure you want to delete {} workflows? This action cannot be undone.",
                count
            ),
            _ => "Are you sure you want to delete this workflow? This action cannot be undone."
                .to_string(),
        }
    }
}
