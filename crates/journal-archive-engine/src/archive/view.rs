use std::collections::BTreeSet;

use serde::Serialize;

use super::ArchiveFilter;
use crate::links::PaperLinks;
use crate::models::{ArticleRecord, VolumeGroup};

/// Expanded/collapsed state of each volume section, keyed by volume number.
///
/// Every section starts collapsed and toggling one never affects another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<u32>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, volume_number: u32) -> bool {
        self.expanded.contains(&volume_number)
    }

    /// Flip one section and return whether it is now expanded
    pub fn toggle(&mut self, volume_number: u32) -> bool {
        if !self.expanded.remove(&volume_number) {
            self.expanded.insert(volume_number);
            return true;
        }
        false
    }

    pub fn expand(&mut self, volume_number: u32) {
        self.expanded.insert(volume_number);
    }

    pub fn collapse(&mut self, volume_number: u32) {
        self.expanded.remove(&volume_number);
    }

    pub fn expand_all(&mut self, groups: &[VolumeGroup]) {
        self.expanded
            .extend(groups.iter().map(|group| group.volume_number));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// One article as the rendering layer needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub title: String,
    pub authors: String,
    pub issue_label: String,
    pub doi: String,
    pub published: String,
    pub paper_link: Option<String>,
}

impl ArticleCard {
    pub fn new(record: &ArticleRecord, links: &PaperLinks) -> Self {
        Self {
            title: record.title.clone(),
            authors: record.authors.clone(),
            issue_label: record.issue_label.clone(),
            doi: record.doi.clone(),
            published: record.published_raw.clone(),
            paper_link: record
                .paper_file
                .as_deref()
                .and_then(|file| links.link_for(file)),
        }
    }
}

/// A collapsible volume in the archive listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeSection {
    pub volume_number: u32,
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub article_count: usize,
    pub expanded: bool,
    pub articles: Vec<ArticleCard>,
}

impl VolumeSection {
    pub fn new(group: &VolumeGroup, expanded: bool, links: &PaperLinks) -> Self {
        Self {
            volume_number: group.volume_number,
            year: group.year,
            month: group.month,
            title: group.title(),
            article_count: group.len(),
            expanded,
            articles: group
                .articles
                .iter()
                .map(|record| ArticleCard::new(record, links))
                .collect(),
        }
    }
}

/// What the archive page should show.
///
/// `NoArchives` and `NoMatches` occupy the same slot but carry different
/// messages: the first means there is no data at all, the second that the
/// active filters hide every volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ArchiveView {
    NoArchives,
    NoMatches,
    Volumes { sections: Vec<VolumeSection> },
}

impl ArchiveView {
    pub fn sections(&self) -> &[VolumeSection] {
        match self {
            ArchiveView::Volumes { sections } => sections.as_slice(),
            ArchiveView::NoArchives | ArchiveView::NoMatches => &[],
        }
    }

    /// Empty-state message, `None` when there are sections to show
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ArchiveView::NoArchives => Some("No Archives Found"),
            ArchiveView::NoMatches => Some("No Matches. Try adjusting your filters."),
            ArchiveView::Volumes { .. } => None,
        }
    }
}

/// Build the display list: matching groups newest first.
///
/// `groups` must come from [`super::group_volumes`] over the full data set so
/// that volume numbers stay the same whatever the filter.
pub fn render_archive(
    groups: &[VolumeGroup],
    filter: &ArchiveFilter,
    expansion: &ExpansionState,
    links: &PaperLinks,
) -> ArchiveView {
    if groups.is_empty() {
        return ArchiveView::NoArchives;
    }

    let sections: Vec<VolumeSection> = groups
        .iter()
        .rev()
        .filter(|group| filter.matches(group))
        .map(|group| {
            VolumeSection::new(group, expansion.is_expanded(group.volume_number), links)
        })
        .collect();

    if sections.is_empty() {
        ArchiveView::NoMatches
    } else {
        ArchiveView::Volumes { sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::group_volumes;
    use crate::tests::article;
    use pretty_assertions::assert_eq;

    fn sample_groups() -> Vec<VolumeGroup> {
        group_volumes(&[
            article("A", "01-Jan-25"),
            article("B", "15-Jan-25"),
            article("C", "01-Feb-25"),
        ])
    }

    fn volume_numbers(view: &ArchiveView) -> Vec<u32> {
        view.sections().iter().map(|s| s.volume_number).collect()
    }

    #[test]
    fn test_sections_newest_first_and_collapsed() {
        let view = render_archive(
            &sample_groups(),
            &ArchiveFilter::all(),
            &ExpansionState::new(),
            &PaperLinks::default(),
        );

        assert_eq!(volume_numbers(&view), vec![2, 1]);
        assert!(view.sections().iter().all(|s| !s.expanded));
        assert_eq!(view.sections()[0].title, "Volume 2 Issue 2 • Feb 2025");
        assert_eq!(view.sections()[1].article_count, 2);
    }

    #[test]
    fn test_filter_keeps_volume_numbers() {
        let groups = sample_groups();
        let filter = ArchiveFilter::all().with_volume(Some(2));

        let view = render_archive(&groups, &filter, &ExpansionState::new(), &PaperLinks::default());

        assert_eq!(volume_numbers(&view), vec![2]);
        assert_eq!(view.sections()[0].title, "Volume 2 Issue 2 • Feb 2025");
    }

    #[test]
    fn test_empty_data_is_no_archives() {
        let view = render_archive(
            &[],
            &ArchiveFilter::all().with_year(Some(1999)),
            &ExpansionState::new(),
            &PaperLinks::default(),
        );
        assert_eq!(view, ArchiveView::NoArchives);
        assert_eq!(view.message(), Some("No Archives Found"));
    }

    #[test]
    fn test_filtered_out_is_no_matches() {
        let view = render_archive(
            &sample_groups(),
            &ArchiveFilter::all().with_year(Some(2019)),
            &ExpansionState::new(),
            &PaperLinks::default(),
        );
        assert_eq!(view, ArchiveView::NoMatches);
        assert_ne!(view.message(), ArchiveView::NoArchives.message());
    }

    #[test]
    fn test_toggles_are_independent() {
        let groups = sample_groups();
        let mut expansion = ExpansionState::new();

        assert!(expansion.toggle(1));
        assert!(expansion.toggle(2));
        assert!(!expansion.toggle(1));

        let view = render_archive(&groups, &ArchiveFilter::all(), &expansion, &PaperLinks::default());
        let states: Vec<(u32, bool)> = view
            .sections()
            .iter()
            .map(|s| (s.volume_number, s.expanded))
            .collect();
        assert_eq!(states, vec![(2, true), (1, false)]);
    }

    #[test]
    fn test_expand_all_and_collapse_all() {
        let groups = sample_groups();
        let mut expansion = ExpansionState::new();

        expansion.expand_all(&groups);
        assert!(expansion.is_expanded(1) && expansion.is_expanded(2));

        expansion.collapse_all();
        assert!(!expansion.is_expanded(1) && !expansion.is_expanded(2));
    }

    #[test]
    fn test_article_card_links_paper() {
        let mut record = article("Trails", "24-Dec-26");
        record.paper_file = Some("trails.pdf".to_string());
        let card = ArticleCard::new(&record, &PaperLinks::new("/paper"));
        assert_eq!(card.paper_link.as_deref(), Some("/paper/trails.pdf"));
        assert_eq!(card.published, "24-Dec-26");

        record.paper_file = None;
        assert_eq!(ArticleCard::new(&record, &PaperLinks::default()).paper_link, None);
    }
}
