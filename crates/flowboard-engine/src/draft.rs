//! Form state behind the edit/create dialog and the rules applied on save.

use chrono::{DateTime, Utc};
use flowboard_types::{ModalContent, NO_NAME, Tag, WorkflowItem};

pub const WORKFLOW_KIND: &str = "Workflow";
pub const AGENT_KIND: &str = "Agent";

/// Focusable input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Kind,
    Name,
    TagName(usize),
    TagColor(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDraft {
    pub kind: String,
    pub name: String,
    pub tags: Vec<Tag>,
    content: ModalContent,
    focus: DraftField,
    existing_id: Option<i64>,
}

impl WorkflowDraft {
    /// Seed the form from the record being edited, or blank for a new one.
    ///
    /// Tags mode on an untagged record starts with one empty row focused.
    pub fn new(existing: Option<&WorkflowItem>, content: ModalContent) -> Self {
        let Some(item) = existing else {
            return Self {
                kind: WORKFLOW_KIND.to_string(),
                name: String::new(),
                tags: Vec::new(),
                content,
                focus: match content {
                    ModalContent::Menu => DraftField::Kind,
                    ModalContent::Tags => DraftField::TagName(0),
                },
                existing_id: None,
            };
        };

        let mut tags = item.tags.clone();
        let focus = match content {
            ModalContent::Tags => {
                if tags.is_empty() {
                    tags.push(Tag::blank());
                }
                DraftField::TagName(0)
            }
            ModalContent::Menu => DraftField::Kind,
        };

        Self {
            kind: normalize_kind(&item.kind),
            name: item.name.clone(),
            tags,
            content,
            focus,
            existing_id: Some(item.id),
        }
    }

    pub fn content(&self) -> ModalContent {
        self.content
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn is_new(&self) -> bool {
        self.existing_id.is_none()
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    /// Radio toggle between the two known kinds
    pub fn cycle_kind(&mut self) {
        self.kind = if self.kind == WORKFLOW_KIND {
            AGENT_KIND.to_string()
        } else {
            WORKFLOW_KIND.to_string()
        };
    }

    pub fn add_tag(&mut self) {
        self.tags.push(Tag::blank());
        self.focus = DraftField::TagName(self.tags.len() - 1);
    }

    pub fn remove_tag(&mut self, index: usize) {
        if index >= self.tags.len() {
            return;
        }
        self.tags.remove(index);
        self.focus = self.clamp_focus(self.focus);
    }

    /// Remove the tag row that currently has focus, if any
    pub fn remove_focused_tag(&mut self) {
        if let DraftField::TagName(i) | DraftField::TagColor(i) = self.focus {
            self.remove_tag(i);
        }
    }

    pub fn fields(&self) -> Vec<DraftField> {
        let mut fields = Vec::new();
        if self.content == ModalContent::Menu {
            fields.push(DraftField::Kind);
            fields.push(DraftField::Name);
        }
        for i in 0..self.tags.len() {
            fields.push(DraftField::TagName(i));
            fields.push(DraftField::TagColor(i));
        }
        fields
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let fields = self.fields();
        if fields.is_empty() {
            return;
        }
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    fn clamp_focus(&self, focus: DraftField) -> DraftField {
        let fields = self.fields();
        if fields.contains(&focus) {
            return focus;
        }
        match focus {
            DraftField::TagName(i) | DraftField::TagColor(i) if i > 0 => {
                self.clamp_focus(DraftField::TagName(i - 1))
            }
            _ => fields.first().copied().unwrap_or(DraftField::Name),
        }
    }

    /// Text of the focused input; `None` for the kind radio
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            DraftField::Kind => None,
            DraftField::Name => Some(&mut self.name),
            DraftField::TagName(i) => self.tags.get_mut(i).map(|t| &mut t.name),
            DraftField::TagColor(i) => self.tags.get_mut(i).map(|t| &mut t.color),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Build the record to store.
    ///
    /// Blank names become "No Name", names are capitalized, blank tags are
    /// dropped, and the timestamp is restamped. New records take the current
    /// time in milliseconds as their id.
    pub fn finish(&self, now: DateTime<Utc>) -> WorkflowItem {
        let trimmed = self.name.trim();
        let name = capitalize(if trimmed.is_empty() { NO_NAME } else { trimmed });

        WorkflowItem {
            kind: self.kind.clone(),
            name,
            tags: self.tags.iter().filter(|t| !t.is_blank()).cloned().collect(),
            last_updated: now.timestamp(),
            id: self.existing_id.unwrap_or_else(|| now.timestamp_millis()),
        }
    }
}

/// Map free-text types onto the two radio options when they clearly match one
pub fn normalize_kind(kind: &str) -> String {
    let lower = kind.to_lowercase();
    if lower.contains("workflow") {
        WORKFLOW_KIND.to_string()
    } else if lower.contains("agent") {
        AGENT_KIND.to_string()
    } else {
        kind.to_string()
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap()
    }

    fn existing() -> WorkflowItem {
        WorkflowItem {
            kind: "ai agent".to_string(),
            name: "summarizer".to_string(),
            tags: vec![],
            last_updated: 10,
            id: 99,
        }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = WorkflowDraft::new(None, ModalContent::Menu);
        assert_eq!(draft.kind, WORKFLOW_KIND);
        assert!(draft.name.is_empty());
        assert!(draft.tags.is_empty());
        assert!(draft.is_new());
        assert_eq!(draft.focus(), DraftField::Kind);
    }

    #[test]
    fn test_tags_mode_seeds_one_blank_row() {
        let draft = WorkflowDraft::new(Some(&existing()), ModalContent::Tags);
        assert_eq!(draft.tags, vec![Tag::blank()]);
        assert_eq!(draft.focus(), DraftField::TagName(0));

        let menu = WorkflowDraft::new(Some(&existing()), ModalContent::Menu);
        assert!(menu.tags.is_empty());
    }

    #[test]
    fn test_kind_normalization() {
        assert_eq!(normalize_kind("My WORKFLOW"), "Workflow");
        assert_eq!(normalize_kind("ai agent"), "Agent");
        assert_eq!(normalize_kind("Pipeline"), "Pipeline");
        assert_eq!(WorkflowDraft::new(Some(&existing()), ModalContent::Menu).kind, "Agent");
    }

    #[test]
    fn test_finish_blank_name_becomes_no_name() {
        let mut draft = WorkflowDraft::new(Some(&existing()), ModalContent::Menu);
        draft.name = " ".to_string();

        let saved = draft.finish(now());
        assert_eq!(saved.name, NO_NAME);
        assert_eq!(saved.id, 99);
        assert_eq!(saved.last_updated, now().timestamp());
    }

    #[test]
    fn test_finish_trims_capitalizes_and_drops_blank_tags() {
        let mut draft = WorkflowDraft::new(None, ModalContent::Menu);
        draft.name = "  weekly digest ".to_string();
        draft.add_tag();
        draft.insert_char('s');
        draft.insert_char('e');
        draft.insert_char('o');
        draft.add_tag();

        let saved = draft.finish(now());
        assert_eq!(saved.name, "Weekly digest");
        assert_eq!(saved.tags, vec![Tag::new("seo", "#000000")]);
        assert_eq!(saved.id, now().timestamp_millis());
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut draft = WorkflowDraft::new(None, ModalContent::Menu);
        draft.add_tag();
        draft.focus_next();
        assert_eq!(draft.focus(), DraftField::TagColor(0));
        draft.focus_next();
        assert_eq!(draft.focus(), DraftField::Kind);
        draft.focus_previous();
        assert_eq!(draft.focus(), DraftField::TagColor(0));
    }

    #[test]
    fn test_remove_focused_tag_moves_focus_back() {
        let mut draft = WorkflowDraft::new(Some(&existing()), ModalContent::Tags);
        draft.add_tag();
        assert_eq!(draft.focus(), DraftField::TagName(1));

        draft.remove_focused_tag();
        assert_eq!(draft.tags.len(), 1);
        assert_eq!(draft.focus(), DraftField::TagName(0));
    }

    #[test]
    fn test_cycle_kind_and_editing_name() {
        let mut draft = WorkflowDraft::new(None, ModalContent::Menu);
        draft.insert_char('x');
        assert!(draft.name.is_empty());

        draft.cycle_kind();
        assert_eq!(draft.kind, AGENT_KIND);
        draft.cycle_kind();
        assert_eq!(draft.kind, WORKFLOW_KIND);

        draft.focus_next();
        draft.insert_char('a');
        draft.insert_char('b');
        draft.delete_char();
        assert_eq!(draft.name, "a");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("No Name"), "No Name");
    }
}
