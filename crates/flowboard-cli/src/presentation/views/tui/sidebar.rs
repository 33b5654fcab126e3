use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Left rail: app title, the New action and static navigation
pub struct SidebarView;

impl Widget for SidebarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::RIGHT);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::Rgb(0xAD, 0xAB, 0xFF))),
                Span::styled("AirOps", Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("[n]", Style::default().fg(Color::Yellow)),
                Span::styled(" New +", Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::default(),
            Line::styled("  Data Name", Style::default().fg(Color::DarkGray)),
            Line::styled("  Monitoring", Style::default().fg(Color::DarkGray)),
            Line::styled("  Settings", Style::default().fg(Color::DarkGray)),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
