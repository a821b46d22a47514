pub mod filter;
pub mod view;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ArticleRecord, IssueMonth, VolumeGroup};

pub use filter::ArchiveFilter;
pub use view::{ArchiveView, ArticleCard, ExpansionState, VolumeSection, render_archive};

/// Group records by publication month and number the groups chronologically.
///
/// The result is ordered oldest first, so `groups[i].volume_number == i + 1`.
/// Articles inside a group are ordered newest first; articles sharing a date
/// keep their input order.
pub fn group_volumes(records: &[ArticleRecord]) -> Vec<VolumeGroup> {
    let mut by_month: BTreeMap<IssueMonth, Vec<ArticleRecord>> = BTreeMap::new();
    for record in records {
        by_month
            .entry(record.issue_month())
            .or_default()
            .push(record.clone());
    }

    by_month
        .into_iter()
        .enumerate()
        .map(|(rank, (month, mut articles))| {
            articles.sort_by(|a, b| b.published.cmp(&a.published));
            VolumeGroup {
                year: month.year,
                month: month.month,
                volume_number: rank as u32 + 1,
                articles,
            }
        })
        .collect()
}

/// Summary shown next to the archive, e.g. "12 Articles | 4 Issues"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveStats {
    pub articles: usize,
    pub issues: usize,
}

impl ArchiveStats {
    pub fn of(groups: &[VolumeGroup]) -> Self {
        Self {
            articles: groups.iter().map(VolumeGroup::len).sum(),
            issues: groups.len(),
        }
    }
}

impl std::fmt::Display for ArchiveStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Articles | {} Issues", self.articles, self.issues)
    }
}

/// Distinct publication years, newest first
pub fn available_years(groups: &[VolumeGroup]) -> Vec<i32> {
    let mut years: Vec<i32> = groups.iter().map(|g| g.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Assigned volume numbers, newest first
pub fn available_volumes(groups: &[VolumeGroup]) -> Vec<u32> {
    groups.iter().rev().map(|g| g.volume_number).collect()
}
