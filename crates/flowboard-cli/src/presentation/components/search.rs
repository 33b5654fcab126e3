use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flowboard_engine::{Debouncer, SEARCH_DEBOUNCE};

use crate::presentation::view_models::SearchBarViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Input focus left the search bar
    Blur,
}

/// Search box text plus the debounced query the table filters on
pub struct SearchComponent {
    input: String,
    editing: bool,
    debouncer: Debouncer<String>,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            editing: false,
            debouncer: Debouncer::new(String::new(), SEARCH_DEBOUNCE),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focus(&mut self) {
        self.editing = true;
    }

    /// Query currently applied to the table
    pub fn query(&self) -> &str {
        self.debouncer.settled()
    }

    pub fn handle_input(&mut self, key: KeyEvent, now: Instant) -> Option<SearchAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editing = false;
                return Some(SearchAction::Blur);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => return None,
        }
        self.debouncer.set(self.input.clone(), now);
        None
    }

    /// Newly settled query, once typing has paused long enough
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now).cloned()
    }

    pub fn view_model(&self) -> SearchBarViewModel {
        SearchBarViewModel {
            input: self.input.clone(),
            editing: self.editing,
            pending: self.debouncer.is_pending(),
        }
    }
}

impl Default for SearchComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_query_settles_after_pause() {
        let start = Instant::now();
        let mut search = SearchComponent::new();
        search.focus();

        search.handle_input(key(KeyCode::Char('i')), start);
        search.handle_input(key(KeyCode::Char('n')), start + Duration::from_millis(100));
        assert_eq!(search.tick(start + Duration::from_millis(200)), None);
        assert_eq!(search.query(), "");

        assert_eq!(
            search.tick(start + Duration::from_millis(400)),
            Some("in".to_string())
        );
        assert_eq!(search.query(), "in");
        assert!(!search.view_model().pending);
    }

    #[test]
    fn test_enter_blurs_without_clearing() {
        let now = Instant::now();
        let mut search = SearchComponent::new();
        search.focus();
        search.handle_input(key(KeyCode::Char('x')), now);

        assert_eq!(search.handle_input(key(KeyCode::Enter), now), Some(SearchAction::Blur));
        assert!(!search.is_editing());
        assert_eq!(search.view_model().input, "x");
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let now = Instant::now();
        let mut search = SearchComponent::new();
        search.handle_input(key(KeyCode::Char('a')), now);
        search.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), now);
        assert_eq!(search.view_model().input, "");
    }
}
