//! Contact page: address, phone, e-mail and opening hours.

use crate::models::{ContactInfo, ContentKind, Fallbacks, HoursInfo};
use crate::pages::{Section, load_section};
use crate::services::ContentRepository;
use crate::utils::{console, mailto_href, tel_href};

#[derive(Debug, Clone)]
pub struct ContactPage {
    pub contact: Section<ContactInfo>,
    pub hours: Section<HoursInfo>,
    /// The e-mail group shows fallback addresses
    pub email_fallback: bool,
}

impl ContactPage {
    /// Load `settings/contact.json` and `settings/hours.json`.
    ///
    /// Loaded files with blank fields are completed from the fallbacks.
    pub async fn load(repo: &dyn ContentRepository, fallbacks: &Fallbacks) -> Self {
        let (contact, hours) = futures::join!(
            load_section(repo, ContentKind::Settings, "contact", &fallbacks.contact),
            load_section(repo, ContentKind::Settings, "hours", &fallbacks.hours),
        );

        let email_fallback = contact.is_fallback() || contact.content.email.trim().is_empty();

        Self {
            email_fallback,
            contact: Section {
                content: contact.content.or_fallback(&fallbacks.contact),
                source: contact.source,
            },
            hours: Section {
                content: hours.content.or_fallback(&fallbacks.hours),
                source: hours.source,
            },
        }
    }

    pub fn render(&self) {
        let contact = &self.contact.content;
        console::header("Contact Us");

        console::section("Visit Us");
        for line in contact.address.lines() {
            console::line(line);
        }

        console::section("Call Us");
        if !contact.phone.is_empty() {
            console::line(&format!("Main: {} ({})", contact.phone, tel_href(&contact.phone)));
        }
        if !contact.library_phone.is_empty() {
            console::line(&format!(
                "Library: {} ({})",
                contact.library_phone,
                tel_href(&contact.library_phone)
            ));
        }
        console::line("Mon - Fri: 10 AM - 4 PM");

        console::section("Email Us");
        console::line(&format!("General: {} ({})", contact.email, mailto_href(&contact.email)));
        if !contact.library_email.is_empty() {
            console::line(&format!("Library: {}", contact.library_email));
        }
        if self.email_fallback {
            console::line("We reply within 24 hours");
        }

        let hours = &self.hours.content;
        console::section("Library Hours");
        console::sub_item(&format!("{}: {}", hours.weekday.days, hours.weekday.hours));
        console::sub_item(&format!("Saturday: {}", hours.saturday.hours));
        console::sub_item(&format!("Sunday: {}", hours.sunday.status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ManifestRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_contact_sections_fall_back_independently() {
        let repo = ManifestRepository::new().with_entry(
            ContentKind::Settings,
            "hours",
            json!({"weekday": {"days": "Mon - Sat", "hours": "9 AM - 6 PM"}}),
        );
        let page = ContactPage::load(&repo, &Fallbacks::default()).await;

        assert!(page.contact.is_fallback());
        assert!(page.email_fallback);
        assert_eq!(page.contact.content.library_phone, "+917892468482");
        assert_eq!(page.contact.content.email, "info@mvgsc.edu");

        assert!(!page.hours.is_fallback());
        assert_eq!(page.hours.content.weekday.days, "Mon - Sat");
        assert_eq!(page.hours.content.saturday.hours, "10:00 AM - 2:00 PM");
        assert_eq!(page.hours.content.sunday.status, "Closed");
    }

    #[tokio::test]
    async fn test_loaded_contact_kept() {
        let repo = ManifestRepository::new().with_entry(
            ContentKind::Settings,
            "contact",
            json!({
                "address": "MVGSC, Bhadravathi",
                "phone": "08282-123456",
                "email": "principal@mvgsc.edu"
            }),
        );
        let page = ContactPage::load(&repo, &Fallbacks::default()).await;
        assert!(!page.contact.is_fallback());
        assert_eq!(page.contact.content.address, "MVGSC, Bhadravathi");
        assert_eq!(page.contact.content.library_phone, "");
        assert!(!page.email_fallback);
    }

    #[tokio::test]
    async fn test_blank_email_marks_email_fallback() {
        let repo = ManifestRepository::new().with_entry(
            ContentKind::Settings,
            "contact",
            json!({"address": "MVGSC, Bhadravathi", "phone": "08282-123456", "email": " "}),
        );
        let page = ContactPage::load(&repo, &Fallbacks::default()).await;
        assert!(!page.contact.is_fallback());
        assert!(page.email_fallback);
        assert_eq!(page.contact.content.email, "info@mvgsc.edu");
        assert_eq!(page.contact.content.library_email, "library@mvgsc.edu");
        assert_eq!(page.contact.content.phone, "08282-123456");
    }
}
