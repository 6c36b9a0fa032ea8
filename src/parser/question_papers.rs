//! Question paper sheet parser.

use super::{Row, non_blank_lines, parse_line};
use crate::models::QuestionPaper;

/// Parse the question paper CSV export.
///
/// Headers sit on the first line and are lower-cased before lookup, so
/// `Title` and `title` both fill the title field.
pub fn parse_question_papers(csv_text: &str) -> Vec<QuestionPaper> {
    let lines = non_blank_lines(csv_text);
    let Some((header_line, data)) = lines.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = parse_line(header_line)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();

    data.iter()
        .map(|line| {
            let row = Row::new(&headers, parse_line(line));
            QuestionPaper {
                title: row.get_or("title", "Untitled Paper"),
                department: row.get_or("department", "General"),
                semester: row.get_or("semester", ""),
                year: row.get_or("year", ""),
                kind: row.get_or("type", ""),
                file: row.get_or("file", ""),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_papers() {
        let text = "Title,Department,Semester,Year,Type,File\n\
                    Data Structures,Computer Science,III,2023,Theory,https://files/ds.pdf\n\
                    ,,,2022,,\n";
        let papers = parse_question_papers(text);

        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].department, "Computer Science");
        assert_eq!(papers[0].kind, "Theory");
        assert_eq!(papers[0].download_name(), "Data Structures.pdf");
        assert_eq!(papers[1].title, "Untitled Paper");
        assert_eq!(papers[1].department, "General");
        assert_eq!(papers[1].year, "2022");
    }

    #[test]
    fn test_header_only_and_empty() {
        assert!(parse_question_papers("").is_empty());
        assert!(parse_question_papers("title,year\n").is_empty());
    }
}
