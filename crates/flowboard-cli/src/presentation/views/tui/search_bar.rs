use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::SearchBarViewModel;

pub const PLACEHOLDER: &str = "Search by name, tags, or type";

pub struct SearchBarView<'a> {
    model: &'a SearchBarViewModel,
}

impl<'a> SearchBarView<'a> {
    pub fn new(model: &'a SearchBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.model.editing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title("Workflows")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border);

        let mut spans = vec![Span::raw("🔍 ")];
        if self.model.input.is_empty() && !self.model.editing {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled("  [/]", Style::default().fg(Color::Yellow)));
        } else {
            spans.push(Span::raw(self.model.input.as_str()));
            if self.model.editing {
                spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
            }
            if self.model.pending {
                spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
            }
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
