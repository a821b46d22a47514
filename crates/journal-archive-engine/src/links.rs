use relative_path::RelativePath;

/// Builds link targets for paper PDFs under a configured base path.
///
/// Whether the file actually exists is up to whoever serves the base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperLinks {
    base: String,
}

impl PaperLinks {
    pub const DEFAULT_BASE: &'static str = "/paper";

    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `<base>/<paper_file>`, or `None` for an empty file name.
    ///
    /// Absolute URLs are passed through untouched; anything else is
    /// normalized lexically so `./` and `..` segments collapse.
    pub fn link_for(&self, paper_file: &str) -> Option<String> {
        let paper_file = paper_file.trim();
        if paper_file.contains("://") {
            return Some(paper_file.to_string());
        }

        let normalized = RelativePath::new(paper_file).normalize();
        if normalized.as_str().is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.base, normalized))
    }
}

impl Default for PaperLinks {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}
