pub mod article;
pub mod volume;

pub use article::ArticleRecord;
pub use volume::{IssueMonth, VolumeGroup};
