use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{BodyViewModel, StatusLevel};

use super::status_level_to_color;

const SKELETON_ROWS: usize = 5;

/// Loading, error and empty states that replace the table
pub struct PanelView<'a> {
    model: &'a BodyViewModel,
}

impl<'a> PanelView<'a> {
    pub fn new(model: &'a BodyViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);

        let (title, lines) = match self.model {
            BodyViewModel::Loading { source } => {
                let mut lines = vec![
                    Line::styled(format!("Fetching workflows from {}...", source), dim),
                    Line::default(),
                ];
                for _ in 0..SKELETON_ROWS {
                    lines.push(Line::styled("░░░  ░░░░░░░░  ░░░░░░░░░░░░░░░░  ░░░░░░  ░░░░░", dim));
                }
                ("Loading", lines)
            }
            BodyViewModel::Error { message } => {
                let color = status_level_to_color(StatusLevel::Error);
                (
                    "Error",
                    vec![
                        Line::styled(
                            "Failed to load workflows",
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Line::default(),
                        Line::from(Span::styled(message.as_str(), Style::default().fg(color))),
                    ],
                )
            }
            BodyViewModel::Empty => (
                "Workflows",
                vec![
                    Line::styled(
                        "No Workflows Found",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                    Line::raw("There are no workflows available at the moment."),
                    Line::styled("Create a new workflow to get started.", dim),
                ],
            ),
            BodyViewModel::Table(_) => return,
        };

        let alignment = match self.model {
            BodyViewModel::Empty => Alignment::Center,
            _ => Alignment::Left,
        };

        Paragraph::new(lines)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(area, buf);
    }
}
