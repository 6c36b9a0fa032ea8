//! CMS content types loaded from the `content/` JSON files.

use serde::{Deserialize, Serialize};

/// Kinds of content stored under the content root, one directory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Staff,
    Announcements,
    Pages,
    Settings,
}

impl ContentKind {
    /// Directory name under the content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Announcements => "announcements",
            Self::Pages => "pages",
            Self::Settings => "settings",
        }
    }
}

/// A library staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StaffMember {
    pub name: String,
    pub position: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A static page section (heading plus body paragraphs).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PageContent {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl PageContent {
    pub fn new(heading: &str, paragraphs: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A news item on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// A home page shortcut to one of the portal sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickLink {
    pub title: String,
    pub description: String,
    pub path: String,
}

/// Library contact details (`settings/contact.json`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub library_phone: String,
    pub email: String,
    pub library_email: String,
}

impl ContactInfo {
    /// Fill blank groups from `fallback`.
    ///
    /// The address stands alone; phone numbers and e-mail addresses are
    /// replaced as a pair when the main value is blank.
    pub fn or_fallback(mut self, fallback: &ContactInfo) -> Self {
        if self.address.trim().is_empty() {
            self.address = fallback.address.clone();
        }
        if self.phone.trim().is_empty() {
            self.phone = fallback.phone.clone();
            self.library_phone = fallback.library_phone.clone();
        }
        if self.email.trim().is_empty() {
            self.email = fallback.email.clone();
            self.library_email = fallback.library_email.clone();
        }
        self
    }
}

/// Weekday opening hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WeekdayHours {
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SaturdayHours {
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SundayHours {
    pub status: String,
}

/// Library opening hours (`settings/hours.json`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HoursInfo {
    pub weekday: WeekdayHours,
    pub saturday: SaturdayHours,
    pub sunday: SundayHours,
}

impl HoursInfo {
    /// Fill each blank field from `fallback`.
    pub fn or_fallback(mut self, fallback: &HoursInfo) -> Self {
        fill(&mut self.weekday.days, &fallback.weekday.days);
        fill(&mut self.weekday.hours, &fallback.weekday.hours);
        fill(&mut self.saturday.hours, &fallback.saturday.hours);
        fill(&mut self.sunday.status, &fallback.sunday.status);
        self
    }
}

fn fill(value: &mut String, fallback: &str) {
    if value.trim().is_empty() {
        *value = fallback.to_string();
    }
}
