use crate::models::ArticleRecord;
use crate::parsing::date::parse_published_date;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header, four valid rows and one row with a bad date
pub const SAMPLE_CSV: &str = "\
Title,Author,Issue,DOI,Paper_File,Published_Date
Trails,\"Karan, Vishnu\",1,10.1007/s40430-020-02750-7,trails.pdf,24-Dec-26
Trail2,VVVV,1,10.1007/s40430-020-02750-8,trail2.pdf,11-Mar-26
Trail4,\"Ram, Ravi, Hari\",1,10.1007/s40430-020-02750-5,,19-Jun-26
Broken,Nobody,1,10.1/none,broken.pdf,31-Xyz-26
Trail5,Ravi,1,10.1007/s40430-020-02750-9,trail5.pdf,02-Dec-26
";

/// Create a temporary directory for data files
pub fn create_test_data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test data file with content
pub fn create_test_file(data_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = data_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Article with the given title and `DD-MMM-YY` date
pub fn article(title: &str, published: &str) -> ArticleRecord {
    ArticleRecord {
        title: title.to_string(),
        authors: "Test Author".to_string(),
        issue_label: "1".to_string(),
        doi: format!("10.1/{}", title.to_lowercase().replace(' ', "-")),
        paper_file: Some(format!("{}.pdf", title.to_lowercase().replace(' ', "-"))),
        published_raw: published.to_string(),
        published: parse_published_date(published).unwrap(),
    }
}
