use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::ArticleRecord;
use crate::parsing::date::MONTH_ABBREVIATIONS;

/// Calendar month used as the grouping key for volumes.
///
/// `month` is zero-based (0 = January). Ordering is chronological because
/// `year` is compared before `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IssueMonth {
    pub year: i32,
    pub month: u32,
}

impl IssueMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Three-letter English month name, e.g. "Jan"
    pub fn month_name(&self) -> &'static str {
        MONTH_ABBREVIATIONS
            .get(self.month as usize)
            .copied()
            .unwrap_or("???")
    }
}

/// Articles published in the same calendar month, numbered as one journal volume.
///
/// `volume_number` is assigned from the chronological rank of the month
/// across the whole data set (oldest = 1), so it never depends on which
/// groups end up displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeGroup {
    pub year: i32,
    pub month: u32,
    pub volume_number: u32,
    /// Newest first
    pub articles: Vec<ArticleRecord>,
}

impl VolumeGroup {
    pub fn issue_month(&self) -> IssueMonth {
        IssueMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Display title, e.g. "Volume 2 Issue 2 • Feb 2025"
    pub fn title(&self) -> String {
        format!(
            "Volume {n} Issue {n} • {} {}",
            self.issue_month().month_name(),
            self.year,
            n = self.volume_number
        )
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
