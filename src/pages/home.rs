//! Home page: quick links, announcements and the visit counter.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::models::{Announcement, ContentKind, Fallbacks, QuickLink};
use crate::pages::Section;
use crate::services::ContentRepository;
use crate::services::content::list_typed;
use crate::utils::console;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%d/%m/%Y"];

/// Parse an announcement date in one of the accepted formats.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Sort newest first. Undated entries keep their relative order at the end.
pub fn sort_announcements(announcements: &mut [Announcement]) {
    announcements.sort_by_key(|a| match parse_date(&a.date) {
        Some(date) => (false, Reverse(Some(date))),
        None => (true, Reverse(None)),
    });
}

#[derive(Debug, Clone)]
pub struct HomePage {
    pub quick_links: Vec<QuickLink>,
    pub announcements: Section<Vec<Announcement>>,
    pub visits: Option<u64>,
}

impl HomePage {
    pub async fn load(
        repo: &dyn ContentRepository,
        fallbacks: &Fallbacks,
        visits: Option<u64>,
    ) -> Self {
        let mut announcements: Vec<Announcement> =
            match list_typed(repo, ContentKind::Announcements).await {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Error loading announcements: {}", e);
                    Vec::new()
                }
            };

        let announcements = if announcements.is_empty() {
            log::info!("No announcements in content, using fallback list");
            Section::fallback(fallbacks.announcements.clone())
        } else {
            sort_announcements(&mut announcements);
            Section::loaded(announcements)
        };

        Self {
            quick_links: fallbacks.quick_links.clone(),
            announcements,
            visits,
        }
    }

    pub fn render(&self) {
        console::header("MVGSC Library");
        console::line("Your gateway to knowledge, research, and academic excellence.");

        console::section("Quick Links");
        for link in &self.quick_links {
            console::sub_item(&format!("{} ({})", link.title, link.path));
            console::line(&format!("      {}", link.description));
        }

        console::section("Latest Announcements");
        for item in &self.announcements.content {
            if item.date.is_empty() {
                console::sub_item(&item.title);
            } else {
                console::sub_item(&format!("{} [{}]", item.title, item.date));
            }
            if !item.description.is_empty() {
                console::line(&format!("      {}", item.description));
            }
        }

        if let Some(visits) = self.visits {
            console::separator();
            console::line(&format!("Visitors: {visits}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ManifestRepository;
    use serde_json::json;

    fn announcement(title: &str, date: &str) -> Announcement {
        Announcement {
            title: title.into(),
            date: date.into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15"), expected);
        assert_eq!(parse_date("March 15, 2024"), expected);
        assert_eq!(parse_date("15/03/2024"), expected);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_sort_newest_first_undated_last() {
        let mut items = vec![
            announcement("undated", ""),
            announcement("old", "2023-01-01"),
            announcement("new", "March 10, 2024"),
        ];
        sort_announcements(&mut items);
        let titles: Vec<_> = items.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old", "undated"]);
    }

    #[tokio::test]
    async fn test_empty_content_uses_fallback_announcements() {
        let repo = ManifestRepository::new();
        let fallbacks = Fallbacks::default();
        let page = HomePage::load(&repo, &fallbacks, None).await;

        assert!(page.announcements.is_fallback());
        assert_eq!(page.announcements.content.len(), 3);
        assert_eq!(page.announcements.content[0].title, "New Books Added");
        assert_eq!(page.quick_links.len(), 4);
    }

    #[tokio::test]
    async fn test_loaded_announcements_sorted() {
        let repo = ManifestRepository::new()
            .with_entry(
                ContentKind::Announcements,
                "a-fest",
                json!({"title": "Book Fest", "date": "2024-01-05"}),
            )
            .with_entry(
                ContentKind::Announcements,
                "b-closure",
                json!({"title": "Holiday", "date": "2024-02-20"}),
            );
        let page = HomePage::load(&repo, &Fallbacks::default(), Some(42)).await;

        assert!(!page.announcements.is_fallback());
        assert_eq!(page.announcements.content[0].title, "Holiday");
        assert_eq!(page.visits, Some(42));
    }
}
