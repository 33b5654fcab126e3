use serde::{Deserialize, Serialize};

/// Display name used when a record is saved without one
pub const NO_NAME: &str = "No Name";

/// Color given to freshly added tag rows and to tags arriving without one
pub const DEFAULT_TAG_COLOR: &str = "#000000";

/// A short colored label attached to a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// An empty row as seeded by the tag editor
    pub fn blank() -> Self {
        Self::new("", DEFAULT_TAG_COLOR)
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Canonical workflow record as held in the session store.
///
/// Field names serialize with the external API's spelling (`type`,
/// `lastUpdated`) so JSON output can be fed back in as a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowItem {
    /// Free-text category, usually "Workflow" or "Agent"
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Unix timestamp in seconds
    #[serde(rename = "lastUpdated")]
    pub last_updated: i64,

    /// Session-unique key; client-generated records use epoch milliseconds
    pub id: i64,
}

impl WorkflowItem {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty() && self.name != NO_NAME
    }

    /// Name as shown in the table, falling back to the placeholder for blanks
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            NO_NAME
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_api_field_names() {
        let item = WorkflowItem {
            kind: "Agent".to_string(),
            name: "Scraper".to_string(),
            tags: vec![Tag::new("seo", "#ff0000")],
            last_updated: 1_700_000_000,
            id: 7,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Agent");
        assert_eq!(json["lastUpdated"], 1_700_000_000);
        assert_eq!(json["tags"][0]["color"], "#ff0000");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_display_name_falls_back_for_blank() {
        let mut item = WorkflowItem {
            kind: String::new(),
            name: "   ".to_string(),
            tags: vec![],
            last_updated: 0,
            id: 1,
        };
        assert_eq!(item.display_name(), NO_NAME);
        assert!(!item.has_name());

        item.name = "Crawler".to_string();
        assert_eq!(item.display_name(), "Crawler");
        assert!(item.has_name());
    }

    #[test]
    fn test_blank_tag() {
        assert!(Tag::blank().is_blank());
        assert_eq!(Tag::blank().color, DEFAULT_TAG_COLOR);
        assert!(Tag::new("  ", "#fff").is_blank());
        assert!(!Tag::new("x", "#fff").is_blank());
    }
}
