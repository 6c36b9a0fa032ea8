//! About page: the college and the library.

use crate::models::{ContentKind, Fallbacks, PageContent};
use crate::pages::{Section, load_section};
use crate::services::ContentRepository;
use crate::utils::console;

pub const ABOUT_COLLEGE: &str = "about-college";
pub const ABOUT_LIBRARY: &str = "about-library";

#[derive(Debug, Clone)]
pub struct AboutPage {
    pub college: Section<PageContent>,
    pub library: Section<PageContent>,
}

impl AboutPage {
    pub async fn load(repo: &dyn ContentRepository, fallbacks: &Fallbacks) -> Self {
        let (college, library) = futures::join!(
            load_section(repo, ContentKind::Pages, ABOUT_COLLEGE, &fallbacks.about_college),
            load_section(repo, ContentKind::Pages, ABOUT_LIBRARY, &fallbacks.about_library),
        );
        Self { college, library }
    }

    pub fn render(&self) {
        console::header("About");
        for section in [&self.college, &self.library] {
            console::section(&section.content.heading);
            for paragraph in &section.content.paragraphs {
                console::line(paragraph);
                console::line("");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ManifestRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_about_college_uses_fallback_verbatim() {
        let repo = ManifestRepository::new().with_entry(
            ContentKind::Pages,
            ABOUT_LIBRARY,
            json!({"heading": "The Reading Room", "paragraphs": ["Quiet space."]}),
        );
        let fallbacks = Fallbacks::default();

        let page = AboutPage::load(&repo, &fallbacks).await;

        assert!(page.college.is_fallback());
        assert_eq!(page.college.content.heading, "About the College");
        assert_eq!(
            page.college.content.paragraphs,
            vec![
                "Sir M. Visvesvaraya Government Science College stands as a testament to academic excellence and innovation in higher education. Established with a vision to nurture scientific temperament and foster research, our institution has been at the forefront of quality education for decades.",
                "Named after the legendary engineer and statesman Sir M. Visvesvaraya, our college embodies his principles of precision, dedication, and service to society. We offer comprehensive programs across various scientific disciplines including Physics, Chemistry, Mathematics, Computer Science, and Life Sciences.",
                "With state-of-the-art laboratories, experienced faculty, and a commitment to holistic development, we prepare students to become leaders and innovators in their chosen fields.",
            ]
        );

        assert!(!page.library.is_fallback());
        assert_eq!(page.library.content.heading, "The Reading Room");
    }
}
