//! Dialogs drawn over the table.

use flowboard_types::ModalContent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{
    DeleteModalViewModel, EditModalViewModel, FocusViewModel,
};

use super::{centered, tag_color};

const KINDS: [&str; 2] = ["Workflow", "Agent"];

fn focused(style: Style, on: bool) -> Style {
    if on {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub struct EditModalView<'a> {
    model: &'a EditModalViewModel,
}

impl<'a> EditModalView<'a> {
    pub fn new(model: &'a EditModalViewModel) -> Self {
        Self { model }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let m = self.model;
        let label = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        if m.content == ModalContent::Menu {
            lines.push(Line::styled("Type", label));
            let mut radios = Vec::new();
            for kind in KINDS {
                let mark = if m.kind == kind { "(•)" } else { "( )" };
                radios.push(Span::styled(
                    format!("{} {}", mark, kind),
                    focused(Style::default(), m.focus == FocusViewModel::Kind && m.kind == kind),
                ));
                radios.push(Span::raw("   "));
            }
            lines.push(Line::from(radios));
            lines.push(Line::default());

            lines.push(Line::styled("Name", label));
            lines.push(Line::from(Span::styled(
                format!("[{:<30}]", m.name),
                focused(Style::default(), m.focus == FocusViewModel::Name),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::styled("Tags", label));
        for (i, tag) in m.tags.iter().enumerate() {
            let name = if tag.name.is_empty() && m.focus != FocusViewModel::TagName(i) {
                Span::styled(format!("[{:<18}]", "Tag name"), Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    format!("[{:<18}]", tag.name),
                    focused(Style::default(), m.focus == FocusViewModel::TagName(i)),
                )
            };
            lines.push(Line::from(vec![
                name,
                Span::raw(" "),
                Span::styled("●", Style::default().fg(tag_color(&tag.color))),
                Span::raw(" "),
                Span::styled(
                    format!("[{:<7}]", tag.color),
                    focused(Style::default(), m.focus == FocusViewModel::TagColor(i)),
                ),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("[^n]", Style::default().fg(Color::Yellow)),
            Span::raw(" Add Tag +  "),
            Span::styled("[^d]", Style::default().fg(Color::Yellow)),
            Span::raw(" remove tag"),
        ]));
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel   "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {}", m.submit_label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" next field"),
        ]));
        lines
    }
}

impl<'a> Widget for EditModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let rect = centered(area, 60, height);

        let mut block = Block::default().borders(Borders::ALL);
        if let Some(title) = &self.model.title {
            block = block.title(Span::styled(
                title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        Clear.render(rect, buf);
        Paragraph::new(lines).block(block).render(rect, buf);
    }
}

pub struct DeleteModalView<'a> {
    model: &'a DeleteModalViewModel,
}

impl<'a> DeleteModalView<'a> {
    pub fn new(model: &'a DeleteModalViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DeleteModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered(area, 56, 8);

        let lines = vec![
            Line::raw(self.model.message.as_str()),
            Line::default(),
            Line::from(vec![
                Span::styled("[n/Esc]", Style::default().fg(Color::Yellow)),
                Span::raw(" Cancel   "),
                Span::styled("[y/Enter]", Style::default().fg(Color::Yellow)),
                Span::styled(" Delete", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        Clear.render(rect, buf);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(rect, buf);
    }
}
