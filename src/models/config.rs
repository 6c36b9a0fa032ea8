//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Announcement, ContactInfo, HoursInfo, PageContent, QuickLink};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Published spreadsheet endpoints
    #[serde(default)]
    pub sources: SourcesConfig,

    /// OPAC search behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// CMS content location
    #[serde(default)]
    pub content: ContentConfig,

    /// Literals shown when CMS content is missing
    #[serde(default)]
    pub fallbacks: Fallbacks,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load a configuration file and validate it, without falling back.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::load(path).map_err(|e| {
            AppError::config(format!("cannot load {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.search.page_size == 0 {
            return Err(AppError::validation("search.page_size must be > 0"));
        }
        for (name, value) in self.sources.sheets() {
            url::Url::parse(value)
                .map_err(|e| AppError::validation(format!("sources.{name} is not a URL: {e}")))?;
        }
        if self.fallbacks.about_college.heading.trim().is_empty() {
            return Err(AppError::validation(
                "fallbacks.about_college.heading is empty",
            ));
        }
        Ok(())
    }

    /// Content root resolved against a base directory.
    pub fn content_root(&self, base: &Path) -> PathBuf {
        base.join(&self.content.root)
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Published spreadsheet CSV exports and other remote endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Book catalog sheet
    #[serde(default = "defaults::books_url")]
    pub books: String,

    /// Question paper archive sheet
    #[serde(default = "defaults::question_papers_url")]
    pub question_papers: String,

    /// Primary e-resources sheet
    #[serde(default = "defaults::eresources_url")]
    pub eresources: String,

    /// Sheet tried when the primary e-resources sheet fails or is empty
    #[serde(default = "defaults::eresources_fallback_url")]
    pub eresources_fallback: String,

    /// Visitor counter endpoint
    #[serde(default = "defaults::visitor_counter_url")]
    pub visitor_counter: String,
}

impl SourcesConfig {
    /// Named spreadsheet URLs, for validation and reporting.
    pub fn sheets(&self) -> [(&'static str, &str); 4] {
        [
            ("books", &self.books),
            ("question_papers", &self.question_papers),
            ("eresources", &self.eresources),
            ("eresources_fallback", &self.eresources_fallback),
        ]
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            books: defaults::books_url(),
            question_papers: defaults::question_papers_url(),
            eresources: defaults::eresources_url(),
            eresources_fallback: defaults::eresources_fallback_url(),
            visitor_counter: defaults::visitor_counter_url(),
        }
    }
}

/// OPAC search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results per page
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Quiet period before a typed query is committed
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            debounce_ms: defaults::debounce_ms(),
        }
    }
}

/// CMS content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `staff/`, `announcements/`, `pages/`, `settings/`
    #[serde(default = "defaults::content_root")]
    pub root: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: defaults::content_root(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Hardcoded content shown when a CMS section cannot be loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fallbacks {
    #[serde(default = "defaults::about_college")]
    pub about_college: PageContent,

    #[serde(default = "defaults::about_library")]
    pub about_library: PageContent,

    #[serde(default = "defaults::contact")]
    pub contact: ContactInfo,

    #[serde(default = "defaults::hours")]
    pub hours: HoursInfo,

    #[serde(default = "defaults::announcements")]
    pub announcements: Vec<Announcement>,

    #[serde(default = "defaults::quick_links")]
    pub quick_links: Vec<QuickLink>,

    /// Inline message shown when the catalog cannot be fetched
    #[serde(default = "defaults::catalog_error")]
    pub catalog_error: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            about_college: defaults::about_college(),
            about_library: defaults::about_library(),
            contact: defaults::contact(),
            hours: defaults::hours(),
            announcements: defaults::announcements(),
            quick_links: defaults::quick_links(),
            catalog_error: defaults::catalog_error(),
        }
    }
}

mod defaults {
    use crate::models::{
        Announcement, ContactInfo, HoursInfo, PageContent, QuickLink, SaturdayHours,
        SundayHours, WeekdayHours,
    };

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; CollegeLibrary/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Source defaults
    pub fn books_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vTwYoiETHqEVR5ZOXsKXk1WNQ46XlvHpje-lbxXekdnrOA9U2IMTpVFoNmOi9KuX8saKYO7vr_lWatM/pub?gid=1315133597&single=true&output=csv".into()
    }
    pub fn question_papers_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vRtjRMgUQ55lAJxPqb4XKCV2ftLhnbccWwy-Oe3gs8Px9CQKou4ZNbTcTITFQAzr9bnbbtPZMXUclU2/pub?gid=716050975&single=true&output=csv".into()
    }
    pub fn eresources_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vRVREeHICWFF3ghlAsqHmNQqxxEl27jIZUQPI-wI3KLz0eGp6_RTd8xKWvy65PPp8l7GEuQRjTZrPQ2/pub?gid=870322603&single=true&output=csv".into()
    }
    pub fn eresources_fallback_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vT4mW-MDPQPuGF_Rlm7x4awB4FbkIt1XrQn52aPd8lCh4YMnntncmyRW3GA7G03-HNfClB622a9L8AC/pub?gid=1444317974&single=true&output=csv".into()
    }
    pub fn visitor_counter_url() -> String {
        "https://api.countapi.xyz/update/sir-mv-library/unique-visits?amount=1".into()
    }

    // Search defaults
    pub fn page_size() -> usize {
        20
    }
    pub fn debounce_ms() -> u64 {
        350
    }

    pub fn content_root() -> String {
        "content".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }

    // Fallback content
    pub fn about_college() -> PageContent {
        PageContent::new(
            "About the College",
            &[
                "Sir M. Visvesvaraya Government Science College stands as a testament to academic excellence and innovation in higher education. Established with a vision to nurture scientific temperament and foster research, our institution has been at the forefront of quality education for decades.",
                "Named after the legendary engineer and statesman Sir M. Visvesvaraya, our college embodies his principles of precision, dedication, and service to society. We offer comprehensive programs across various scientific disciplines including Physics, Chemistry, Mathematics, Computer Science, and Life Sciences.",
                "With state-of-the-art laboratories, experienced faculty, and a commitment to holistic development, we prepare students to become leaders and innovators in their chosen fields.",
            ],
        )
    }
    pub fn about_library() -> PageContent {
        PageContent::new(
            "About the Library",
            &[
                "The MVGSC Library serves as the intellectual hub of our institution, housing an extensive collection of over 50,000 books, journals, and digital resources. Our library is designed to support both academic excellence and personal intellectual growth.",
                "With dedicated reading halls, digital resource centers, and collaborative study spaces, we provide an environment conducive to learning and research. Our collection spans across all scientific disciplines, complemented by access to international journals and databases.",
                "The library is staffed by experienced professionals who are committed to assisting students and faculty in their academic pursuits. We continuously update our collection and services to meet the evolving needs of our academic community.",
            ],
        )
    }
    pub fn contact() -> ContactInfo {
        ContactInfo {
            address: "Sir M. Visvesvaraya Government Science College\nLibrary Building\n[City, State - Pincode]".into(),
            phone: String::new(),
            library_phone: "+917892468482".into(),
            email: "info@mvgsc.edu".into(),
            library_email: "library@mvgsc.edu".into(),
        }
    }
    pub fn hours() -> HoursInfo {
        HoursInfo {
            weekday: WeekdayHours {
                days: "Monday - Friday".into(),
                hours: "10:00 AM - 4:00 PM".into(),
            },
            saturday: SaturdayHours {
                hours: "10:00 AM - 2:00 PM".into(),
            },
            sunday: SundayHours {
                status: "Closed".into(),
            },
        }
    }
    pub fn announcements() -> Vec<Announcement> {
        vec![
            Announcement {
                title: "New Books Added".into(),
                date: "March 15, 2024".into(),
                description: "150+ new titles across various departments now available.".into(),
            },
            Announcement {
                title: "Extended Hours".into(),
                date: "March 10, 2024".into(),
                description: "Library now open until 8 PM on weekdays.".into(),
            },
            Announcement {
                title: "Digital Resources".into(),
                date: "March 5, 2024".into(),
                description: "New e-journal subscriptions activated for all students.".into(),
            },
        ]
    }
    pub fn quick_links() -> Vec<QuickLink> {
        let link = |title: &str, description: &str, path: &str| QuickLink {
            title: title.into(),
            description: description.into(),
            path: path.into(),
        };
        vec![
            link(
                "OPAC Search",
                "Search our comprehensive catalog of books and resources",
                "/opac",
            ),
            link(
                "E-Resources",
                "Access digital journals, databases, and online materials",
                "/e-resources",
            ),
            link(
                "Question Papers",
                "Browse previous year question papers by department",
                "/question-papers",
            ),
            link(
                "Staff Directory",
                "Meet our dedicated library staff and faculty",
                "/staff",
            ),
        ]
    }
    pub fn catalog_error() -> String {
        "Failed to load books. Please try again later.".into()
    }
}
