// src/models/mod.rs

//! Domain models for the library portal.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod book;
mod config;
mod content;
mod eresource;
mod question_paper;

// Re-export all public types
pub use book::{Book, UNKNOWN_TITLE, language_name};
pub use config::{
    Config, ContentConfig, Fallbacks, HttpConfig, LoggingConfig, SearchConfig, SourcesConfig,
};
pub use content::{
    Announcement, ContactInfo, ContentKind, HoursInfo, PageContent, QuickLink, SaturdayHours,
    StaffMember, SundayHours, WeekdayHours,
};
pub use eresource::{EResource, ResourceIcon};
pub use question_paper::QuestionPaper;
