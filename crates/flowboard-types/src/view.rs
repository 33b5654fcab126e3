use serde::{Deserialize, Serialize};
use std::fmt;

/// Column the table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Name,
    Type,
    LastUpdated,
}

impl SortColumn {
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Type => "Type",
            SortColumn::LastUpdated => "Last Updated",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::Name => write!(f, "name"),
            SortColumn::Type => write!(f, "type"),
            SortColumn::LastUpdated => write!(f, "last-updated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// What the edit modal shows: the full form or just the tag rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalContent {
    #[default]
    Menu,
    Tags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_cli_spelling() {
        assert_eq!(SortColumn::LastUpdated.to_string(), "last-updated");
        assert_eq!(SortColumn::Name.label(), "Name");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }
}
