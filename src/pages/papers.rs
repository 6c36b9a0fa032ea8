//! Question paper archive page.

use crate::models::QuestionPaper;
use crate::services::{ALL, PaperArchive};
use crate::utils::console;

/// Archive plus the current picker selections.
#[derive(Debug, Clone)]
pub struct PapersPage {
    pub archive: PaperArchive,
    pub department: String,
    pub year: String,
}

impl PapersPage {
    pub fn new(archive: PaperArchive) -> Self {
        Self {
            archive,
            department: ALL.to_string(),
            year: ALL.to_string(),
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn visible(&self) -> Vec<&QuestionPaper> {
        self.archive.filter(&self.department, &self.year)
    }

    pub fn render(&self) {
        console::header("Question Papers");
        console::line(&format!(
            "Departments: {}",
            self.archive.departments().join(", ")
        ));
        console::line(&format!("Years: {}", self.archive.years().join(", ")));

        let visible = self.visible();
        console::section(&format!(
            "{} papers (department: {}, year: {})",
            visible.len(),
            self.department,
            self.year
        ));
        if visible.is_empty() {
            console::line("No question papers found for the selected filters.");
            return;
        }
        for paper in visible {
            console::sub_item(&format!(
                "{} | {} | Sem {} | {} | {}",
                paper.title, paper.department, paper.semester, paper.year, paper.kind
            ));
            if !paper.file.is_empty() {
                console::line(&format!("      {} -> {}", paper.download_name(), paper.file));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_question_papers;

    const CSV: &str = "Title,Department,Semester,Year,Type,File\n\
                       Algebra,Mathematics,I,2022,Theory,https://f/a.pdf\n\
                       Optics,Physics,III,2023,Theory,https://f/o.pdf\n\
                       Calculus,Mathematics,II,2023,Theory,https://f/c.pdf\n";

    fn page() -> PapersPage {
        PapersPage::new(PaperArchive::new(parse_question_papers(CSV)))
    }

    #[test]
    fn test_defaults_show_everything() {
        assert_eq!(page().visible().len(), 3);
    }

    #[test]
    fn test_department_and_year_combine() {
        let page = page().with_department("Mathematics").with_year("2023");
        let titles: Vec<_> = page.visible().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Calculus"]);
    }

    #[test]
    fn test_all_is_case_insensitive() {
        let page = page().with_department("all").with_year("2022");
        assert_eq!(page.visible().len(), 1);
    }
}
