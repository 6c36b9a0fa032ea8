//! Electronic resource directory entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon shown next to an e-resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ResourceIcon {
    FileText,
    Book,
    Globe,
    #[default]
    Database,
}

impl ResourceIcon {
    /// Map an icon name from the sheet; unknown names render as `Database`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "FileText" => Self::FileText,
            "Book" => Self::Book,
            "Globe" => Self::Globe,
            _ => Self::Database,
        }
    }

    /// Pick an icon from the resource's category, description and access type.
    pub fn guess(category: &str, description: &str, access_type: &str) -> Self {
        let c = category.to_lowercase();
        let d = description.to_lowercase();
        let a = access_type.to_lowercase();

        if c.contains("journal")
            || d.contains("journal")
            || c.contains("research")
            || a.contains("research")
        {
            return Self::FileText;
        }
        if c.contains("course")
            || c.contains("learning")
            || d.contains("course")
            || d.contains("learn")
        {
            return Self::Book;
        }
        if c.contains("web") || c.contains("site") || c.contains("portal") {
            return Self::Globe;
        }
        Self::Database
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileText => "FileText",
            Self::Book => "Book",
            Self::Globe => "Globe",
            Self::Database => "Database",
        }
    }
}

impl fmt::Display for ResourceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A digital resource (journal portal, database, course site).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EResource {
    pub title: String,
    pub description: String,
    pub category: String,
    pub icon: ResourceIcon,
    /// Link target; `#` when the sheet has none
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
