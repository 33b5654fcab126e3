//! TUI View Components
//!
//! Ratatui widgets for the workflow dashboard. Each view is a thin wrapper
//! around a view model; state that survives between frames (table cursor,
//! open dialogs) lives in the components.

pub mod modal;
pub mod panel;
pub mod search_bar;
pub mod sidebar;
pub mod status_bar;
pub mod table;

pub use modal::{DeleteModalView, EditModalView};
pub use panel::PanelView;
pub use search_bar::SearchBarView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;
pub use table::{PaginationView, TableView};

use std::str::FromStr;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Tag colors are `#rrggbb`; anything unparseable renders white
pub(crate) fn tag_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::White)
}

/// Rect of at most `width` x `height` centered in `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_color_parses_hex() {
        assert_eq!(tag_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(tag_color("not-a-color"), Color::White);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
