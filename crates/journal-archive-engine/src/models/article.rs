use chrono::NaiveDate;
use serde::Serialize;

use super::IssueMonth;

/// A validated article entry with a successfully parsed publication date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub authors: String,
    pub issue_label: String,
    pub doi: String,
    /// File name of the PDF, `None` when the row has no paper attached
    pub paper_file: Option<String>,
    /// Date text exactly as it appeared in the source, kept for display
    pub published_raw: String,
    pub published: NaiveDate,
}

impl ArticleRecord {
    /// The calendar month this article was published in
    pub fn issue_month(&self) -> IssueMonth {
        IssueMonth::of(self.published)
    }

    pub fn has_paper(&self) -> bool {
        self.paper_file.is_some()
    }
}
