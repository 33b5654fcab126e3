//! Workflow table and its pagination footer.

use flowboard_engine::CheckState;
use flowboard_types::{SortColumn, SortDirection};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::view_models::{
    HeaderViewModel, PaginationViewModel, RowActions, RowViewModel, TableViewModel,
    TagsBadgeViewModel,
};

use super::tag_color;

const WIDTHS: [Constraint; 6] = [
    Constraint::Length(3),
    Constraint::Length(10),
    Constraint::Min(16),
    Constraint::Length(20),
    Constraint::Length(14),
    Constraint::Length(12),
];

fn checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
        CheckState::Unchecked => "[ ]",
    }
}

fn sort_marker(header: &HeaderViewModel, column: SortColumn) -> &'static str {
    match (header.sort_column, header.sort_direction) {
        (Some(c), SortDirection::Asc) if c == column => " ▲",
        (Some(c), SortDirection::Desc) if c == column => " ▼",
        _ => "",
    }
}

fn header_row(header: &HeaderViewModel) -> Row<'static> {
    let style = Style::default().add_modifier(Modifier::BOLD);
    let column = |key: &str, col: SortColumn| {
        Cell::from(Line::from(vec![
            Span::styled(format!("{} ", key), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}{}", col.label(), sort_marker(header, col)), style),
        ]))
    };

    Row::new(vec![
        Cell::from(checkbox(header.check_state)),
        column("1", SortColumn::Type),
        column("2", SortColumn::Name),
        Cell::from(Span::styled("Tags", style)),
        column("3", SortColumn::LastUpdated),
        Cell::from(Span::styled("Actions", style)),
    ])
    .bottom_margin(1)
}

fn tags_cell(badge: &TagsBadgeViewModel) -> Cell<'static> {
    if badge.is_empty {
        return Cell::from(Span::styled(
            badge.label.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut spans: Vec<Span<'static>> = badge
        .colors
        .iter()
        .take(3)
        .map(|c| Span::styled("●", Style::default().fg(tag_color(c))))
        .collect();
    spans.push(Span::raw(format!(" {}", badge.label)));
    Cell::from(Line::from(spans))
}

fn actions_cell(actions: &RowActions) -> Cell<'static> {
    match actions {
        RowActions::EditDelete => Cell::from(Line::from(vec![
            Span::styled("e", Style::default().fg(Color::Yellow)),
            Span::raw(" ✎  "),
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::raw(" 🗑"),
        ])),
        RowActions::DeleteAll => Cell::from(Span::styled(
            "Delete All",
            Style::default().fg(Color::White).bg(Color::Red),
        )),
        RowActions::None => Cell::from(""),
    }
}

fn body_row(row: &RowViewModel) -> Row<'static> {
    let name_style = if row.placeholder_name {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    Row::new(vec![
        Cell::from(if row.selected { "[x]" } else { "[ ]" }),
        Cell::from(Span::styled(row.kind.clone(), Style::default().fg(Color::Gray))),
        Cell::from(Span::styled(row.name.clone(), name_style)),
        tags_cell(&row.tags),
        Cell::from(Span::styled(
            row.updated_label.clone(),
            Style::default().fg(Color::Gray),
        )),
        actions_cell(&row.actions),
    ])
}

pub struct TableView<'a> {
    model: &'a TableViewModel,
}

impl<'a> TableView<'a> {
    pub fn new(model: &'a TableViewModel) -> Self {
        Self { model }
    }

    /// Table widget for stateful rendering with the component's cursor
    pub fn build_table(self) -> Table<'static> {
        let rows = self.model.rows.iter().map(body_row).collect::<Vec<_>>();

        Table::new(rows, WIDTHS)
            .header(header_row(&self.model.header))
            .block(Block::default().borders(Borders::ALL))
            .column_spacing(2)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}

impl<'a> Widget for TableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(self.build_table(), area, buf);
    }
}

pub struct PaginationView<'a> {
    model: &'a PaginationViewModel,
}

impl<'a> PaginationView<'a> {
    pub fn new(model: &'a PaginationViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PaginationView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::raw(self.model.summary.clone()),
            Span::raw("   "),
            Span::styled("[←]", Style::default().fg(Color::Yellow)),
            Span::raw(" "),
        ];
        for page in 1..=self.model.total_pages {
            let style = if page == self.model.current_page {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} ", page), style));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled("[→]", Style::default().fg(Color::Yellow)));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
