//! Bottom status bar with record counts and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{StatusBarViewModel, StatusLevel};

use super::status_level_to_color;

const HELP: &[(&str, &str)] = &[
    ("[q]", "uit "),
    ("[/]", "search "),
    ("[space]", "select "),
    ("[e]", "dit "),
    ("[t]", "ags "),
    ("[d]", "elete "),
    ("[1-3]", "sort "),
    ("[←/→]", "page"),
];

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        let mut status = vec![
            Span::raw(format!("Workflows: {} ", self.model.total_items)),
            Span::raw("| "),
            Span::raw(format!("Matching: {} ", self.model.matching_items)),
            Span::raw("| "),
            Span::raw(format!("Selected: {} ", self.model.selected_count)),
        ];
        if let Some(message) = &self.model.message {
            status.push(Span::raw("| "));
            status.push(Span::styled(
                message.as_str(),
                Style::default().fg(status_level_to_color(StatusLevel::Success)),
            ));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help = HELP
            .iter()
            .flat_map(|(key, rest)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::raw(*rest),
                ]
            })
            .collect::<Vec<_>>();
        Paragraph::new(Line::from(help)).render(chunks[1], buf);
    }
}
