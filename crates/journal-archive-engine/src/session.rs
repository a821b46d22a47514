use crate::archive::{
    ArchiveFilter, ArchiveStats, ArchiveView, ArticleCard, ExpansionState, available_volumes,
    available_years, group_volumes, render_archive,
};
use crate::io::LoadError;
use crate::links::PaperLinks;
use crate::listing::{IssueView, latest_articles, render_issue};
use crate::models::{ArticleRecord, VolumeGroup};

/// Parsed archive data plus the view state a page keeps between renders.
///
/// Records and groups are fixed at construction; filters and expansion
/// change freely and every [`ArchiveSession::view`] call re-renders from
/// memory.
#[derive(Debug, Clone)]
pub struct ArchiveSession {
    records: Vec<ArticleRecord>,
    groups: Vec<VolumeGroup>,
    filter: ArchiveFilter,
    expansion: ExpansionState,
    links: PaperLinks,
}

impl ArchiveSession {
    pub fn new(records: Vec<ArticleRecord>, links: PaperLinks) -> Self {
        let groups = group_volumes(&records);
        Self {
            records,
            groups,
            filter: ArchiveFilter::all(),
            expansion: ExpansionState::new(),
            links,
        }
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    /// Volume groups, oldest first
    pub fn groups(&self) -> &[VolumeGroup] {
        &self.groups
    }

    pub fn filter(&self) -> ArchiveFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ArchiveFilter) {
        self.filter = filter;
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    /// Flip one volume section, returning whether it is now expanded
    pub fn toggle(&mut self, volume_number: u32) -> bool {
        self.expansion.toggle(volume_number)
    }

    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.groups);
    }

    pub fn view(&self) -> ArchiveView {
        render_archive(&self.groups, &self.filter, &self.expansion, &self.links)
    }

    pub fn stats(&self) -> ArchiveStats {
        ArchiveStats::of(&self.groups)
    }

    pub fn years(&self) -> Vec<i32> {
        available_years(&self.groups)
    }

    pub fn volumes(&self) -> Vec<u32> {
        available_volumes(&self.groups)
    }

    pub fn latest(&self, count: usize) -> Vec<ArticleCard> {
        latest_articles(&self.records, count)
            .iter()
            .map(|record| ArticleCard::new(record, &self.links))
            .collect()
    }

    pub fn issue_page(&self, page: usize, per_page: usize) -> IssueView {
        render_issue(&self.groups, page, per_page, &self.links)
    }
}

/// Lifecycle of one page load, owned by whoever drives the fetch
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(ArchiveSession),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Enter `Loading`. Returns `false` without changing anything when a
    /// load is already in progress.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = LoadState::Loading;
        true
    }

    /// Record the outcome of the load started by [`LoadState::begin`]
    pub fn finish(&mut self, result: Result<ArchiveSession, LoadError>) {
        *self = match result {
            Ok(session) => LoadState::Loaded(session),
            Err(error) => LoadState::Failed(error),
        };
    }

    pub fn session(&self) -> Option<&ArchiveSession> {
        match self {
            LoadState::Loaded(session) => Some(session),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Consume a finished state. `None` while idle or loading.
    pub fn into_result(self) -> Option<Result<ArchiveSession, LoadError>> {
        match self {
            LoadState::Loaded(session) => Some(Ok(session)),
            LoadState::Failed(error) => Some(Err(error)),
            LoadState::Idle | LoadState::Loading => None,
        }
    }
}
