//! Publication date inference.
//!
//! Catalogers record publication dates in free text ("impr. 2004",
//! "cop. 1998-2001", "14..") and in fixed-length coded data ("20040315d2004").
//! The resolver tries an ordered list of candidate sources and keeps the first
//! one that yields a real calendar date:
//!
//! 1. 210$d: publication statement date
//! 2. 100$a: general processing data (fixed-length)
//! 3. 940$a: local date field
//! 4. 033$d: date of the archived copy
//!
//! A candidate that cannot be turned into a valid date is skipped. When no
//! candidate works the configured [`DateSentinel`] is used.

use crate::config::DateSentinel;
use crate::record::RawRecord;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// Candidate (tag, subfield code) sources in priority order.
pub const DATE_SOURCES: [(&str, char); 4] = [("210", 'd'), ("100", 'a'), ("940", 'a'), ("033", 'd')];

/// Tokens removed before scanning.
const NOISE_TOKENS: [&str; 2] = ["impr.", "cop."];

/// Characters catalogers use for unknown digits.
const PLACEHOLDERS: [char; 3] = ['X', '.', '?'];

/// Resolve the publication date of a record.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{dates, DateSentinel, Field, RawRecord};
///
/// let record = RawRecord::builder()
///     .field(Field::builder("210", ' ', ' ').subfield_str('d', "impr. 2004").build())
///     .build();
/// let date = dates::resolve_publication_date(&record, DateSentinel::YearOne);
/// assert_eq!(date.to_string(), "2004-01-01 00:00:00");
/// ```
#[must_use]
pub fn resolve_publication_date(record: &RawRecord, sentinel: DateSentinel) -> NaiveDateTime {
    DATE_SOURCES
        .iter()
        .filter_map(|&(tag, code)| record.subfield(tag, code).map(|text| (tag, code, text)))
        .find_map(|(tag, code, text)| {
            let date = parse_date_text(text);
            if date.is_none() {
                debug!(tag, %code, text, "date candidate rejected");
            }
            date
        })
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_else(|| sentinel.datetime())
}

/// Turn one candidate text into a date.
///
/// A 4-character token starting with `1` or `2` is read as a year. Failing
/// that, text of at least 8 characters starting with `1` or `2` is read as
/// `YYYYMMDD`. Placeholder characters are read as `0`.
#[must_use]
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let cleaned = clean(text);

    let composed = cleaned
        .split_whitespace()
        .find(|token| token.chars().count() == 4 && starts_with_century(token))
        .map(|year| format!("{year}-01-01"))
        .or_else(|| fixed_width_date(&cleaned))?;

    let composed: String = composed
        .chars()
        .map(|c| if PLACEHOLDERS.contains(&c) { '0' } else { c })
        .collect();

    NaiveDate::parse_from_str(&composed, "%Y-%m-%d").ok()
}

fn clean(text: &str) -> String {
    let mut cleaned = text.to_string();
    for noise in NOISE_TOKENS {
        cleaned = cleaned.replace(noise, "");
    }
    cleaned.replace(['-', ','], " ")
}

fn starts_with_century(text: &str) -> bool {
    text.starts_with(['1', '2'])
}

fn fixed_width_date(cleaned: &str) -> Option<String> {
    let trimmed = cleaned.trim_start();
    if !starts_with_century(trimmed) {
        return None;
    }
    let head: Vec<char> = trimmed.chars().take(8).collect();
    if head.len() < 8 {
        return None;
    }
    let year: String = head[0..4].iter().collect();
    let month: String = head[4..6].iter().collect();
    let day: String = head[6..8].iter().collect();
    Some(format!("{year}-{month}-{day}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    fn record_with(sources: &[(&str, char, &str)]) -> RawRecord {
        let mut record = RawRecord::new();
        for &(tag, code, value) in sources {
            record.add_field(Field::builder(tag, ' ', ' ').subfield_str(code, value).build());
        }
        record
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_token() {
        assert_eq!(parse_date_text("2004"), Some(ymd(2004, 1, 1)));
        assert_eq!(parse_date_text("impr. 1998"), Some(ymd(1998, 1, 1)));
        assert_eq!(parse_date_text("cop. 2001-2003"), Some(ymd(2001, 1, 1)));
        assert_eq!(parse_date_text("Paris, 1987"), Some(ymd(1987, 1, 1)));
    }

    #[test]
    fn test_placeholder_year() {
        assert_eq!(parse_date_text("14.."), Some(ymd(1400, 1, 1)));
        assert_eq!(parse_date_text("19XX"), Some(ymd(1900, 1, 1)));
        assert_eq!(parse_date_text("198?"), Some(ymd(1980, 1, 1)));
    }

    #[test]
    fn test_fixed_width_coded_date() {
        assert_eq!(
            parse_date_text("20040315d2004    m  y0frey50      ba"),
            Some(ymd(2004, 3, 15))
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        assert_eq!(parse_date_text("20041345"), None);
        assert_eq!(parse_date_text("2004XX15"), None);
    }

    #[test]
    fn test_no_usable_token() {
        assert_eq!(parse_date_text("s.d."), None);
        assert_eq!(parse_date_text("[ca 18..]"), None);
        assert_eq!(parse_date_text(""), None);
        assert_eq!(parse_date_text("3000"), None);
    }

    #[test]
    fn test_priority_order() {
        let record = record_with(&[("100", 'a', "20100101d2009"), ("210", 'd', "2008")]);
        let date = resolve_publication_date(&record, DateSentinel::YearOne);
        assert_eq!(date.date(), ymd(2008, 1, 1));
    }

    #[test]
    fn test_failed_candidate_advances_chain() {
        let record = record_with(&[
            ("210", 'd', "s.d."),
            ("100", 'a', "2010XX01d"),
            ("940", 'a', "1999"),
        ]);
        let date = resolve_publication_date(&record, DateSentinel::YearOne);
        assert_eq!(date.date(), ymd(1999, 1, 1));
    }

    #[test]
    fn test_sentinel_on_total_failure() {
        let record = record_with(&[("210", 'd', "sans date")]);
        assert_eq!(
            resolve_publication_date(&record, DateSentinel::YearOne),
            DateSentinel::YearOne.datetime()
        );
        assert_eq!(
            resolve_publication_date(&RawRecord::new(), DateSentinel::Year1900),
            DateSentinel::Year1900.datetime()
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let record = record_with(&[("033", 'd', "19850610")]);
        let first = resolve_publication_date(&record, DateSentinel::YearOne);
        let second = resolve_publication_date(&record, DateSentinel::YearOne);
        assert_eq!(first, second);
        assert_eq!(first.date(), ymd(1985, 6, 10));
    }
}
