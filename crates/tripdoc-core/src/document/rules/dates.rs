//! Date extraction for travel documents.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use regex::Captures;
use tracing::debug;

use super::patterns::{DATE_DMY, DATE_MONTH_NAME, DATE_YMD};
use super::{ExtractionMatch, FieldExtractor};

/// Date field extractor.
///
/// Scans the whole text for day-first numeric dates, English month-name
/// dates and year-first numeric dates. Tokens that do not form a real
/// calendar date are skipped.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // 25/12/2024, 25-12-24, 12.25.2024
        for caps in DATE_DMY.captures_iter(text) {
            push_match(&mut results, &caps, parse_dmy(&caps));
        }

        // Dec 25, 2024 / December 25th 2024
        for caps in DATE_MONTH_NAME.captures_iter(text) {
            push_match(&mut results, &caps, parse_month_name(&caps));
        }

        // 2024-12-25
        for caps in DATE_YMD.captures_iter(text) {
            push_match(&mut results, &caps, parse_ymd(&caps));
        }

        results
    }
}

/// Extract all dates from the text, deduplicated and in ascending order.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let unique: BTreeSet<NaiveDate> = DateExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect();

    unique.into_iter().collect()
}

fn push_match(
    results: &mut Vec<ExtractionMatch<NaiveDate>>,
    caps: &Captures<'_>,
    date: Option<NaiveDate>,
) {
    let Some(full_match) = caps.get(0) else {
        return;
    };

    match date {
        Some(date) => results.push(
            ExtractionMatch::new(date, full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        ),
        None => debug!("Skipping malformed date token: {:?}", full_match.as_str()),
    }
}

fn parse_dmy(caps: &Captures<'_>) -> Option<NaiveDate> {
    let mut day = parse_number(&caps[1])?;
    let mut month = parse_number(&caps[2])?;
    let year = parse_year(&caps[3])?;

    // Month-first input such as 12/25/2024
    if month > 12 {
        std::mem::swap(&mut day, &mut month);
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_month_name(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = english_month_to_number(&caps[1])?;
    let day = parse_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_ymd(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().ok()?;
    let month = parse_number(&caps[2])?;
    let day = parse_number(&caps[3])?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_number(s: &str) -> Option<u32> {
    s.parse().ok()
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    // Two-digit years are always 20xx
    if year < 100 {
        Some(2000 + year)
    } else {
        Some(year)
    }
}

fn english_month_to_number(month: &str) -> Option<u32> {
    let prefix: String = month.chars().take(3).collect::<String>().to_lowercase();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_extract_round_trip_dates() {
        let dates = extract_dates("Flight on 25/12/2024 returning 02/01/2025");
        assert_eq!(dates, vec![date(2024, 12, 25), date(2025, 1, 2)]);
        assert_eq!(dates[0].to_string(), "2024-12-25");
        assert_eq!(dates[1].to_string(), "2025-01-02");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "Depart 2025-03-10, return Mar 17th, 2025, booked 01.02.25";
        assert_eq!(extract_dates(text), extract_dates(text));
    }

    #[test]
    fn test_extract_date_ymd() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("2024-01-15");
        assert!(result.is_some());
        assert_eq!(result.unwrap().value, date(2024, 1, 15));
    }

    #[test]
    fn test_extract_month_name_dates() {
        assert_eq!(extract_dates("Check-in: Dec 25, 2024"), vec![date(2024, 12, 25)]);
        assert_eq!(extract_dates("on january 3rd 2025"), vec![date(2025, 1, 3)]);
        assert_eq!(extract_dates("SEPTEMBER 1ST, 2024"), vec![date(2024, 9, 1)]);
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(extract_dates("15.01.24"), vec![date(2024, 1, 15)]);
        assert_eq!(extract_dates("15.01.99"), vec![date(2099, 1, 15)]);
    }

    #[test]
    fn test_month_over_twelve_swaps_day_and_month() {
        assert_eq!(extract_dates("12/25/2024"), vec![date(2024, 12, 25)]);
    }

    #[test]
    fn test_invalid_calendar_dates_are_skipped() {
        assert!(extract_dates("31/02/2024").is_empty());
        assert!(extract_dates("45/45/2024").is_empty());
        assert_eq!(
            extract_dates("bad 2024-13-40 good 2024-06-01"),
            vec![date(2024, 6, 1)]
        );
    }

    #[test]
    fn test_duplicates_collapse_and_sort() {
        let text = "2025-01-02 then 25/12/2024 and again Jan 2, 2025";
        assert_eq!(extract_dates(text), vec![date(2024, 12, 25), date(2025, 1, 2)]);
    }

    #[test]
    fn test_day_first_separators() {
        assert_eq!(extract_dates("25-12-2024"), vec![date(2024, 12, 25)]);
        assert_eq!(extract_dates("25.12.2024"), vec![date(2024, 12, 25)]);
        assert_eq!(extract_dates("2-1-25"), vec![date(2025, 1, 2)]);
    }

    #[test]
    fn test_year_first_separators() {
        assert_eq!(extract_dates("2024/1/5"), vec![date(2024, 1, 5)]);
        assert_eq!(extract_dates("2024.01.05"), vec![date(2024, 1, 5)]);
        assert_eq!(extract_dates("2024-1-05"), vec![date(2024, 1, 5)]);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert!(extract_dates("٢٥/١٢/٢٠٢٤").is_empty());
        assert!(extract_dates("Dec ٢٥, ٢٠٢٤").is_empty());
    }

    #[test]
    fn test_no_dates() {
        assert!(extract_dates("").is_empty());
        assert!(extract_dates("Passenger: John Smith").is_empty());
    }

    #[test]
    fn test_match_positions() {
        let text = "Depart 25/12/2024";
        let found = DateExtractor::new().extract(text).unwrap();
        assert_eq!(found.position, Some((7, 17)));
        assert_eq!(found.source, "25/12/2024");
    }
}
