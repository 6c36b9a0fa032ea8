//! Question paper archive record.

use serde::{Deserialize, Serialize};

/// A previous-year question paper listed in the archive sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionPaper {
    pub title: String,
    pub department: String,
    pub semester: String,
    pub year: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// PDF URL
    pub file: String,
}

impl QuestionPaper {
    /// File name offered when downloading the paper.
    pub fn download_name(&self) -> String {
        format!("{}.pdf", self.title)
    }
}
