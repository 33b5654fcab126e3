use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flowboard_engine::{AGENT_KIND, DraftField, WORKFLOW_KIND, WorkflowDraft};
use flowboard_types::{ModalContent, WorkflowItem};

use crate::presentation::presenters::present_edit_modal;
use crate::presentation::view_models::EditModalViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Cancel,
}

/// Keyboard driver for the edit/create/tags dialog
pub struct EditFormComponent {
    draft: WorkflowDraft,
}

impl EditFormComponent {
    pub fn new(existing: Option<&WorkflowItem>, content: ModalContent) -> Self {
        Self {
            draft: WorkflowDraft::new(existing, content),
        }
    }

    pub fn draft(&self) -> &WorkflowDraft {
        &self.draft
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FormAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Some(FormAction::Cancel),
            KeyCode::Enter => return Some(FormAction::Save),
            KeyCode::Tab | KeyCode::Down => self.draft.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.draft.focus_previous(),
            KeyCode::Char('n') if ctrl => self.draft.add_tag(),
            KeyCode::Char('d') if ctrl => self.draft.remove_focused_tag(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.draft.focus() == DraftField::Kind =>
            {
                self.draft.cycle_kind()
            }
            KeyCode::Char('w') if self.draft.focus() == DraftField::Kind => {
                self.draft.set_kind(WORKFLOW_KIND)
            }
            KeyCode::Char('a') if self.draft.focus() == DraftField::Kind => {
                self.draft.set_kind(AGENT_KIND)
            }
            KeyCode::Char(c) if !ctrl => self.draft.insert_char(c),
            KeyCode::Backspace => self.draft.delete_char(),
            _ => {}
        }
        None
    }

    pub fn finish(&self, now: DateTime<Utc>) -> WorkflowItem {
        self.draft.finish(now)
    }

    pub fn view_model(&self) -> EditModalViewModel {
        present_edit_modal(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut EditFormComponent, text: &str) {
        for c in text.chars() {
            form.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_new_record_flow() {
        let mut form = EditFormComponent::new(None, ModalContent::Menu);

        form.handle_input(key(KeyCode::Right));
        assert_eq!(form.draft().kind, "Agent");

        form.handle_input(key(KeyCode::Tab));
        type_text(&mut form, "lead scorer");
        form.handle_input(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        type_text(&mut form, "sales");

        assert_eq!(form.handle_input(key(KeyCode::Enter)), Some(FormAction::Save));

        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let item = form.finish(now);
        assert_eq!(item.kind, "Agent");
        assert_eq!(item.name, "Lead scorer");
        assert_eq!(item.tags.len(), 1);
        assert_eq!(item.tags[0].name, "sales");
        assert_eq!(item.id, now.timestamp_millis());
    }

    #[test]
    fn test_space_on_name_is_text() {
        let mut form = EditFormComponent::new(None, ModalContent::Menu);
        form.handle_input(key(KeyCode::Tab));
        type_text(&mut form, "a b");
        assert_eq!(form.draft().name, "a b");
        assert_eq!(form.draft().kind, "Workflow");
    }

    #[test]
    fn test_kind_shortcuts_pick_a_type() {
        let mut form = EditFormComponent::new(None, ModalContent::Menu);
        form.handle_input(key(KeyCode::Char('a')));
        assert_eq!(form.draft().kind, "Agent");
        form.handle_input(key(KeyCode::Char('a')));
        assert_eq!(form.draft().kind, "Agent");
        form.handle_input(key(KeyCode::Char('w')));
        assert_eq!(form.draft().kind, "Workflow");
        assert_eq!(form.draft().name, "");
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = EditFormComponent::new(None, ModalContent::Tags);
        assert_eq!(form.handle_input(key(KeyCode::Esc)), Some(FormAction::Cancel));
    }
}
