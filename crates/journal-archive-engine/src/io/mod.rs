use crate::parsing::{ParseOptions, ParsedArticles, parse_articles_with};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Data file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },
}

impl LoadError {
    /// Whether another attempt could succeed. Missing files and local read
    /// failures are permanent; network failures are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, LoadError::Http { .. })
    }
}

/// Where the article data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Read the whole resource as text. Exactly one attempt; retrying is the caller's call.
pub fn read_source(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => read_file(path),
        DataSource::Url(url) => fetch_url(url),
    }
}

/// Read a data file and return its content.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
pub fn read_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn fetch_url(url: &str) -> Result<String, LoadError> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| LoadError::Http {
            url: url.to_string(),
            source,
        })
}

/// Read and parse the resource in one go
pub fn load_articles(
    source: &DataSource,
    options: &ParseOptions,
) -> Result<ParsedArticles, LoadError> {
    let text = read_source(source)?;
    let parsed = parse_articles_with(&text, options);
    log::info!(
        "Loaded {} articles from {source} ({} rows skipped)",
        parsed.records.len(),
        parsed.skipped.len()
    );
    Ok(parsed)
}
