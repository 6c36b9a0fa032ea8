// src/services/question_papers.rs

//! Question paper archive service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::models::QuestionPaper;
use crate::parser::parse_question_papers;
use crate::services::SheetSource;

/// Label of the "no filter" option in the department and year pickers.
pub const ALL: &str = "All";

/// Fetches the question paper sheet.
#[derive(Clone)]
pub struct QuestionPaperService {
    source: Arc<dyn SheetSource>,
    url: String,
}

impl QuestionPaperService {
    pub fn new(source: Arc<dyn SheetSource>, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    /// Fetch and parse the archive.
    pub async fn fetch_papers(&self) -> Result<PaperArchive> {
        log::info!("Fetching question papers...");
        let csv = self.source.fetch_csv(&self.url).await?;
        let papers = parse_question_papers(&csv);
        log::info!("Loaded {} question papers", papers.len());
        Ok(PaperArchive::new(papers))
    }

    /// Fetch the archive, logging failures and returning an empty archive.
    pub async fn fetch_or_empty(&self) -> PaperArchive {
        self.fetch_papers().await.unwrap_or_else(|e| {
            log::error!("Failed to load question papers: {}", e);
            PaperArchive::default()
        })
    }
}

/// A loaded set of question papers with picker helpers.
#[derive(Debug, Clone, Default)]
pub struct PaperArchive {
    papers: Vec<QuestionPaper>,
}

impl PaperArchive {
    pub fn new(papers: Vec<QuestionPaper>) -> Self {
        Self { papers }
    }

    pub fn papers(&self) -> &[QuestionPaper] {
        &self.papers
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// `All` followed by each department in first-seen order.
    pub fn departments(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(ALL.to_string())
            .chain(
                self.papers
                    .iter()
                    .filter(|p| seen.insert(p.department.as_str()))
                    .map(|p| p.department.clone()),
            )
            .collect()
    }

    /// `All` followed by each distinct year, newest first.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .papers
            .iter()
            .map(|p| p.year.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_by(|a, b| b.cmp(a));
        std::iter::once(ALL.to_string()).chain(years).collect()
    }

    /// Papers matching both pickers; `all` (any case) disables a picker.
    pub fn filter(&self, department: &str, year: &str) -> Vec<&QuestionPaper> {
        let any = |value: &str| value.eq_ignore_ascii_case(ALL);
        self.papers
            .iter()
            .filter(|p| any(department) || p.department == department)
            .filter(|p| any(year) || p.year == year)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::StaticSheetSource;

    const URL: &str = "https://sheets.example/papers.csv";
    const CSV: &str = "title,department,semester,year,type,file\n\
                       Algebra,Mathematics,I,2022,Theory,https://f/a.pdf\n\
                       Optics,Physics,III,2023,Theory,https://f/o.pdf\n\
                       Calculus,Mathematics,II,2023,Theory,https://f/c.pdf\n\
                       Mechanics,Physics,I,2021,Practical,https://f/m.pdf\n";

    fn archive() -> PaperArchive {
        PaperArchive::new(parse_question_papers(CSV))
    }

    #[test]
    fn test_departments_first_seen_order() {
        assert_eq!(archive().departments(), vec!["All", "Mathematics", "Physics"]);
    }

    #[test]
    fn test_years_descending() {
        assert_eq!(archive().years(), vec!["All", "2023", "2022", "2021"]);
    }

    #[test]
    fn test_filter() {
        let archive = archive();
        assert_eq!(archive.filter("all", "all").len(), 4);
        let titles: Vec<_> = archive
            .filter("Mathematics", "2023")
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Calculus"]);
        assert_eq!(archive.filter("Physics", "All").len(), 2);
        assert!(archive.filter("Chemistry", "all").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_archive() {
        let service = QuestionPaperService::new(
            Arc::new(StaticSheetSource::new().with_status(URL, 500)),
            URL,
        );
        assert!(service.fetch_or_empty().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_papers() {
        let service = QuestionPaperService::new(
            Arc::new(StaticSheetSource::new().with_sheet(URL, CSV)),
            URL,
        );
        assert_eq!(service.fetch_papers().await.unwrap().papers().len(), 4);
    }
}
