use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{HashedUserIdViewModel, ListViewModel};

const NAME_WIDTH: usize = 32;
const TAGS_WIDTH: usize = 24;

// --------------------------------------------------------
// Workflow List View
// --------------------------------------------------------

pub struct ListView<'a> {
    data: &'a ListViewModel,
}

impl<'a> ListView<'a> {
    pub fn new(data: &'a ListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{}",
            format!(
                "{:<10} {:<name_w$} {:<tags_w$} {:<12} {}",
                "TYPE",
                "NAME",
                "TAGS",
                "UPDATED",
                "ID",
                name_w = NAME_WIDTH,
                tags_w = TAGS_WIDTH
            )
            .bold()
        )?;

        for row in &self.data.rows {
            let tags = row
                .tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            writeln!(
                f,
                "{:<10} {:<name_w$} {} {:<12} {}",
                truncate(&row.kind, 10),
                truncate(&row.name, NAME_WIDTH),
                format!("{:<tags_w$}", truncate(&tags, TAGS_WIDTH), tags_w = TAGS_WIDTH).cyan(),
                row.updated_label,
                row.id.bright_black(),
                name_w = NAME_WIDTH
            )?;
        }

        writeln!(
            f,
            "\nPage {} of {} ({} matching)",
            self.data.page,
            self.data.total_pages.max(1),
            self.data.total_items
        )
    }
}

impl fmt::Display for ListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ListView::new(self))
    }
}

// --------------------------------------------------------
// Hashed User Id View
// --------------------------------------------------------

pub struct HashedUserIdView<'a> {
    data: &'a HashedUserIdViewModel,
}

impl<'a> HashedUserIdView<'a> {
    pub fn new(data: &'a HashedUserIdViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for HashedUserIdView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "User id:        {}", self.data.user_id)?;
        writeln!(f, "Hashed user id: {}", self.data.hashed_user_id.green())
    }
}

impl fmt::Display for HashedUserIdViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", HashedUserIdView::new(self))
    }
}
