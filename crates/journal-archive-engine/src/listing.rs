use std::ops::RangeInclusive;

use serde::Serialize;

use crate::archive::ArticleCard;
use crate::links::PaperLinks;
use crate::models::{ArticleRecord, VolumeGroup};

pub const DEFAULT_LATEST_COUNT: usize = 3;
pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_VISIBLE_PAGES: usize = 5;

/// The `count` most recently published articles, newest first.
///
/// Articles published on the same day keep their input order.
pub fn latest_articles(records: &[ArticleRecord], count: usize) -> Vec<ArticleRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.published.cmp(&a.published));
    sorted.truncate(count);
    sorted
}

/// The newest volume, which the site presents as the current issue
pub fn current_issue(groups: &[VolumeGroup]) -> Option<&VolumeGroup> {
    groups.iter().max_by_key(|group| group.volume_number)
}

/// One page of a longer listing. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            number: self.number,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Slice `items` into the requested page.
///
/// Page 0 is treated as page 1 and a `per_page` of 0 as 1. A page past the
/// end comes back empty but still reports the real `total_pages`.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let number = page.max(1);
    let per_page = per_page.max(1);
    let start = (number - 1).saturating_mul(per_page);

    Page {
        number,
        per_page,
        total_items: items.len(),
        total_pages: items.len().div_ceil(per_page),
        items: items.iter().skip(start).take(per_page).cloned().collect(),
    }
}

/// The run of page buttons shown around the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    pub first: usize,
    pub last: usize,
}

impl PageWindow {
    /// Centre up to `max_visible` page numbers on `current`, clamped to
    /// `1..=total`. `None` when there is at most one page.
    pub fn around(current: usize, total: usize, max_visible: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let max_visible = max_visible.max(1);
        let current = current.clamp(1, total);

        let mut first = current.saturating_sub(max_visible / 2).max(1);
        let last = (first + max_visible - 1).min(total);
        if last + 1 - first < max_visible {
            first = (last + 1).saturating_sub(max_visible).max(1);
        }

        Some(Self {
            current,
            total,
            first,
            last,
        })
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// What the current-issue page should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IssueView {
    /// There are no articles at all
    NoArticles,
    /// The issue has articles but the requested page is past the end
    EmptyPage { page: usize, total_pages: usize },
    Articles {
        title: String,
        page: Page<ArticleCard>,
        window: Option<PageWindow>,
    },
}

/// Page through the current issue, newest articles first
pub fn render_issue(
    groups: &[VolumeGroup],
    page: usize,
    per_page: usize,
    links: &PaperLinks,
) -> IssueView {
    let Some(issue) = current_issue(groups) else {
        return IssueView::NoArticles;
    };

    let page = paginate(&issue.articles, page, per_page);
    if page.is_empty() {
        return IssueView::EmptyPage {
            page: page.number,
            total_pages: page.total_pages,
        };
    }

    let window = PageWindow::around(page.number, page.total_pages, DEFAULT_VISIBLE_PAGES);
    IssueView::Articles {
        title: issue.title(),
        page: page.map(|record| ArticleCard::new(&record, links)),
        window,
    }
}
