use chrono::NaiveDate;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("expected day-month-year, got {0:?}")]
    WrongShape(String),
    #[error("invalid day {0:?}")]
    InvalidDay(String),
    #[error("unknown month {0:?}")]
    UnknownMonth(String),
    #[error("invalid year {0:?}")]
    InvalidYear(String),
    #[error("no such calendar date {0:?}")]
    OutOfRange(String),
}

/// Zero-based index of a three-letter month name, ignoring case
pub fn month_index(token: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(token))
        .map(|index| index as u32)
}

/// Parse a published date in `DD-MMM-YY` or `DD-MMM-YYYY` form.
///
/// Two-digit years (anything below 100) are taken as `2000 + year`.
pub fn parse_published_date(text: &str) -> Result<NaiveDate, DateError> {
    let text = text.trim();
    let parts: Vec<&str> = text.split('-').map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(DateError::WrongShape(text.to_string()));
    };

    let day: u32 = parse_digits(day).ok_or_else(|| DateError::InvalidDay(day.to_string()))?;
    let month = month_index(month).ok_or_else(|| DateError::UnknownMonth(month.to_string()))?;
    let mut year: i32 =
        parse_digits(year).ok_or_else(|| DateError::InvalidYear(year.to_string()))?;
    if year < 100 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month + 1, day)
        .ok_or_else(|| DateError::OutOfRange(text.to_string()))
}

/// Plain ASCII digits only; signs and other number syntax are rejected
fn parse_digits<T: std::str::FromStr>(token: &str) -> Option<T> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
