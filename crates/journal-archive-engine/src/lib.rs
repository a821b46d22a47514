pub mod archive;
pub mod io;
pub mod links;
pub mod listing;
pub mod models;
pub mod parsing;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use archive::{
    ArchiveFilter, ArchiveStats, ArchiveView, ArticleCard, ExpansionState, VolumeSection,
    group_volumes, render_archive,
};
pub use io::*;
pub use links::PaperLinks;
pub use listing::{IssueView, Page, PageWindow, latest_articles, paginate};
pub use models::{ArticleRecord, IssueMonth, VolumeGroup};
pub use parsing::{ParseOptions, ParsedArticles, parse_articles, parse_articles_with};
pub use session::{ArchiveSession, LoadState};
