pub mod date;
pub mod fields;
pub mod header;

use crate::models::ArticleRecord;

use date::{DateError, parse_published_date};
use fields::{detect_delimiter, split_fields};
use header::{ColumnMap, Field};

/// Rows with fewer fields than this are discarded.
pub const MIN_FIELDS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Field delimiter; detected from the header line when `None`
    pub delimiter: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("expected at least 6 fields, found {0}")]
    TooFewFields(usize),
    #[error("invalid published date: {0}")]
    InvalidDate(#[from] DateError),
}

/// A data row that did not make it into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source text
    pub line_number: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArticles {
    /// Surviving records, in source line order
    pub records: Vec<ArticleRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse delimited article data with default options, keeping only valid rows.
pub fn parse_articles(text: &str) -> Vec<ArticleRecord> {
    parse_articles_with(text, &ParseOptions::default()).records
}

/// Parse delimited article data.
///
/// The first non-blank line is the header and never becomes a record; it
/// picks the delimiter (unless configured) and, when it names every field,
/// the column layout. Blank lines are ignored. Malformed rows are logged and
/// reported in [`ParsedArticles::skipped`] without stopping the parse.
pub fn parse_articles_with(text: &str, options: &ParseOptions) -> ParsedArticles {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parsed = ParsedArticles::default();

    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return parsed;
    };
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| detect_delimiter(header));
    let columns = ColumnMap::from_header(&split_fields(header, delimiter));

    for (index, line) in lines {
        let line_number = index + 1;
        match parse_row(&split_fields(line, delimiter), &columns) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                log::warn!("Skipping row {line_number}: {reason}");
                parsed.skipped.push(SkippedRow {
                    line_number,
                    reason,
                });
            }
        }
    }

    parsed
}

fn parse_row(fields: &[String], columns: &ColumnMap) -> Result<ArticleRecord, SkipReason> {
    if fields.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields(fields.len()));
    }

    let published_raw = columns.get(fields, Field::Published);
    let published = parse_published_date(published_raw)?;
    let paper_file = columns.get(fields, Field::PaperFile);

    Ok(ArticleRecord {
        title: columns.get(fields, Field::Title).to_string(),
        authors: columns.get(fields, Field::Authors).to_string(),
        issue_label: columns.get(fields, Field::Issue).to_string(),
        doi: columns.get(fields, Field::Doi).to_string(),
        paper_file: (!paper_file.is_empty()).then(|| paper_file.to_string()),
        published_raw: published_raw.to_string(),
        published,
    })
}
