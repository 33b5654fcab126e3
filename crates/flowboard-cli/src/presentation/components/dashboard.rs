//! Dashboard Component (Page-level)
//!
//! Owns the session copy of the records and every piece of list state:
//! query, sort, page, selection, the open dialog and the row cursor.

use std::time::Instant;

use chrono::{DateTime, Local, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use flowboard_engine::{
    DeleteRequest, FilteredRow, ModalState, Pagination, Selection, WorkflowStore,
    filter_and_sort, next_sort,
};
use flowboard_runtime::FetchState;
use flowboard_types::{ModalContent, SortColumn, SortDirection};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::TableState,
};

use crate::presentation::presenters::{present_delete_modal, present_status_bar, present_table};
use crate::presentation::view_models::{
    BodyViewModel, DashboardViewModel, ModalViewModel, RowActions,
};
use crate::presentation::views::tui::{
    DeleteModalView, EditModalView, PaginationView, PanelView, SearchBarView, SidebarView,
    StatusBarView, TableView,
};

use super::edit_form::{EditFormComponent, FormAction};
use super::search::{SearchAction, SearchComponent};

/// Actions the dashboard emits to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadPhase {
    Loading,
    Failed(String),
    Ready,
}

pub struct DashboardComponent {
    source: String,
    phase: LoadPhase,
    store: WorkflowStore,
    search: SearchComponent,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    pagination: Pagination,
    selection: Selection,
    modal: ModalState,
    form: Option<EditFormComponent>,
    delete: Option<DeleteRequest>,
    cursor: usize,
    table_state: TableState,
    message: Option<String>,
}

impl DashboardComponent {
    /// `source` names where records come from, for the loading panel
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            phase: LoadPhase::Loading,
            store: WorkflowStore::default(),
            search: SearchComponent::new(),
            sort_column: None,
            sort_direction: SortDirection::Asc,
            pagination: Pagination::new(),
            selection: Selection::new(),
            modal: ModalState::default(),
            form: None,
            delete: None,
            cursor: 0,
            table_state: TableState::default(),
            message: None,
        }
    }

    pub fn apply_fetch(&mut self, state: FetchState) {
        match state {
            FetchState::Loading => self.phase = LoadPhase::Loading,
            FetchState::Failed(message) => self.phase = LoadPhase::Failed(message),
            FetchState::Loaded(items) => {
                tracing::debug!(count = items.len(), "dashboard received workflows");
                self.store.replace_all(items);
                self.phase = LoadPhase::Ready;
            }
        }
    }

    pub fn store(&self) -> &WorkflowStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn sort(&self) -> (Option<SortColumn>, SortDirection) {
        (self.sort_column, self.sort_direction)
    }

    pub fn delete_request(&self) -> Option<&DeleteRequest> {
        self.delete.as_ref()
    }

    pub fn form(&self) -> Option<&EditFormComponent> {
        self.form.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn rows(&self) -> Vec<FilteredRow<'_>> {
        filter_and_sort(
            self.store.items(),
            self.search.query(),
            self.sort_column,
            self.sort_direction,
        )
    }

    pub fn matching_len(&self) -> usize {
        self.rows().len()
    }

    /// Rows of the current page, in display order
    pub fn page_rows(&self) -> Vec<FilteredRow<'_>> {
        let rows = self.rows();
        self.pagination.slice(&rows).to_vec()
    }

    pub fn page_ids(&self) -> Vec<i64> {
        self.page_rows().iter().map(|r| r.row.id).collect()
    }

    fn current_row(&self) -> Option<FilteredRow<'_>> {
        self.page_rows().get(self.cursor).copied()
    }

    /// Re-fit page and cursor after the row set changed underneath them
    fn settle(&mut self) {
        let matching = self.matching_len();
        self.pagination.clamp(matching);
        let page_len = self.page_rows().len();
        self.cursor = self.cursor.min(page_len.saturating_sub(1));
    }

    fn reset_page(&mut self) {
        self.pagination.reset();
        self.cursor = 0;
    }

    // --------------------------------------------------------
    // Intents
    // --------------------------------------------------------

    pub fn sort_by(&mut self, column: SortColumn) {
        let (sort_column, sort_direction) =
            next_sort(self.sort_column, self.sort_direction, column);
        self.sort_column = sort_column;
        self.sort_direction = sort_direction;
        tracing::debug!(%column, direction = %sort_direction, "sort changed");
        self.reset_page();
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.matching_len());
        self.cursor = 0;
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.page_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn toggle_current(&mut self) {
        if let Some(id) = self.current_row().map(|r| r.row.id) {
            self.selection.toggle(id);
        }
    }

    /// Header checkbox: select the whole page, or clear it when already full
    pub fn toggle_page(&mut self) {
        let ids = self.page_ids();
        let checked = !self.selection.is_all_selected(&ids);
        self.selection.set_page(&ids, checked);
    }

    pub fn open_new(&mut self) {
        self.modal.open_new();
        self.form = Some(EditFormComponent::new(None, ModalContent::Menu));
    }

    fn current_actions(&self) -> Option<RowActions> {
        let row = self.current_row()?;
        let selected = self.selection.contains(row.row.id);
        Some(match (self.selection.count() > 1, selected) {
            (true, true) => RowActions::DeleteAll,
            (true, false) => RowActions::None,
            (false, _) => RowActions::EditDelete,
        })
    }

    pub fn open_edit_current(&mut self) {
        if self.current_actions() != Some(RowActions::EditDelete) {
            return;
        }
        if let Some(row) = self.current_row() {
            let (item, index) = (row.row.clone(), row.original_index);
            self.form = Some(EditFormComponent::new(Some(&item), ModalContent::Menu));
            self.modal.open_edit(item, index);
        }
    }

    /// The tags badge stays clickable whatever the selection
    pub fn open_tags_current(&mut self) {
        if let Some(row) = self.current_row() {
            let (item, index) = (row.row.clone(), row.original_index);
            self.form = Some(EditFormComponent::new(Some(&item), ModalContent::Tags));
            self.modal.open_tags(item, index);
        }
    }

    pub fn request_delete_current(&mut self) {
        let request = match (self.current_actions(), self.current_row()) {
            (Some(RowActions::EditDelete), Some(row)) => DeleteRequest::Single {
                original_index: row.original_index,
                name: row.row.display_name().to_string(),
            },
            (Some(RowActions::DeleteAll), _) => DeleteRequest::Bulk {
                count: self.selection.count(),
            },
            _ => return,
        };
        self.delete = Some(request);
    }

    pub fn confirm_delete(&mut self) {
        let Some(request) = self.delete.take() else {
            return;
        };
        let removed = self.store.confirm_delete(&request, &mut self.selection);
        tracing::debug!(removed, "workflows deleted");
        self.message = Some(match removed {
            1 => "Deleted 1 workflow".to_string(),
            n => format!("Deleted {} workflows", n),
        });
        self.settle();
    }

    pub fn cancel_delete(&mut self) {
        self.delete = None;
    }

    pub fn save_form(&mut self, now: DateTime<Utc>) {
        let Some(form) = self.form.take() else {
            return;
        };
        let item = form.finish(now);
        let index = self.modal.target().map(|t| t.original_index);
        tracing::debug!(id = item.id, ?index, "workflow saved");

        self.message = Some(format!("Saved {}", item.name));
        self.store.save(index, item);
        self.modal.close();
        self.settle();
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.modal.close();
    }

    pub fn focus_search(&mut self) {
        self.search.focus();
    }

    // --------------------------------------------------------
    // Event routing
    // --------------------------------------------------------

    pub fn handle_input(&mut self, key: KeyEvent, now: Instant) -> Option<DashboardAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if self.delete.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => self.cancel_delete(),
                _ => {}
            }
            return None;
        }

        if let Some(form) = self.form.as_mut() {
            match form.handle_input(key) {
                Some(FormAction::Save) => self.save_form(Utc::now()),
                Some(FormAction::Cancel) => self.cancel_form(),
                None => {}
            }
            return None;
        }

        if self.search.is_editing() {
            if let Some(SearchAction::Blur) = self.search.handle_input(key, now) {
                // back to the table at its first row
                self.cursor = 0;
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(DashboardAction::Quit),
            _ if self.phase != LoadPhase::Ready => {}
            KeyCode::Char('n') => self.open_new(),
            KeyCode::Char('/') => self.focus_search(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Char('a') => self.toggle_page(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_current(),
            KeyCode::Char('t') => self.open_tags_current(),
            KeyCode::Char('d') => self.request_delete_current(),
            KeyCode::Char('1') => self.sort_by(SortColumn::Type),
            KeyCode::Char('2') => self.sort_by(SortColumn::Name),
            KeyCode::Char('3') => self.sort_by(SortColumn::LastUpdated),
            KeyCode::Right | KeyCode::Char(']') => self.next_page(),
            KeyCode::Left | KeyCode::Char('[') => self.previous_page(),
            _ => {}
        }
        None
    }

    /// Periodic work driven by the event loop: applies the debounced query
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.search.tick(now) {
            tracing::debug!(%query, "search query applied");
            self.reset_page();
        }
    }

    // --------------------------------------------------------
    // Rendering
    // --------------------------------------------------------

    pub fn view_model(&self, now: &DateTime<Local>) -> DashboardViewModel {
        let body = match &self.phase {
            LoadPhase::Loading => BodyViewModel::Loading {
                source: self.source.clone(),
            },
            LoadPhase::Failed(message) => BodyViewModel::Error {
                message: message.clone(),
            },
            LoadPhase::Ready if self.store.is_empty() => BodyViewModel::Empty,
            LoadPhase::Ready => {
                let rows = self.rows();
                let page = self.pagination.slice(&rows);
                BodyViewModel::Table(present_table(
                    page,
                    rows.len(),
                    &self.selection,
                    self.sort_column,
                    self.sort_direction,
                    &self.pagination,
                    self.cursor,
                    now,
                ))
            }
        };

        let modal = if let Some(request) = &self.delete {
            Some(ModalViewModel::Delete(present_delete_modal(request)))
        } else {
            self.form
                .as_ref()
                .map(|form| ModalViewModel::Edit(form.view_model()))
        };

        DashboardViewModel {
            search: self.search.view_model(),
            body,
            status_bar: present_status_bar(
                self.store.len(),
                self.matching_len(),
                &self.selection,
                self.message.as_deref(),
            ),
            modal,
        }
    }

    /// Layout: [Sidebar | Search + Table + Pagination] over the status bar
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let vm = self.view_model(&Local::now());

        let outer = Layout::vertical([Constraint::Min(8), Constraint::Length(3)]).split(area);
        let columns =
            Layout::horizontal([Constraint::Length(20), Constraint::Min(40)]).split(outer[0]);
        let main = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(columns[1]);

        f.render_widget(SidebarView, columns[0]);
        f.render_widget(SearchBarView::new(&vm.search), main[0]);

        match &vm.body {
            BodyViewModel::Table(table) => {
                self.table_state.select(table.cursor);
                f.render_stateful_widget(
                    TableView::new(table).build_table(),
                    main[1],
                    &mut self.table_state,
                );
                if let Some(pagination) = &table.pagination {
                    f.render_widget(PaginationView::new(pagination), main[2]);
                }
            }
            body => f.render_widget(PanelView::new(body), main[1]),
        }

        f.render_widget(StatusBarView::new(&vm.status_bar), outer[1]);

        match &vm.modal {
            Some(ModalViewModel::Edit(edit)) => f.render_widget(EditModalView::new(edit), area),
            Some(ModalViewModel::Delete(delete)) => {
                f.render_widget(DeleteModalView::new(delete), area)
            }
            None => {}
        }
    }
}
