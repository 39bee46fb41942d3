use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::model::month::MonthId;

pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    month_start(year, month).map(|start| first_day_of_next_month(start) - Duration::days(1))
}

pub fn first_day_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Display label like "February 2024".
pub fn month_label(year: i32, month: u32) -> Option<String> {
    month_start(year, month).map(|d| d.format("%B %Y").to_string())
}

pub fn current_month() -> MonthId {
    let today = Local::now().date_naive();
    MonthId {
        year: today.year(),
        month: today.month(),
    }
}

/// Month argument as typed on the command line: "YYYY-MM" or "current".
pub fn parse_month(input: &str) -> Result<MonthId> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("current") {
        return Ok(current_month());
    }

    let (year_str, month_str) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Could not parse month '{}': expected YYYY-MM or 'current'", input))?;
    let year: i32 = year_str
        .parse()
        .map_err(|_| anyhow!("Invalid year in '{}'", input))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| anyhow!("Invalid month in '{}'", input))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be between 1 and 12, got {}", month));
    }

    Ok(MonthId { year, month })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!(parse_month("2024-02").unwrap(), MonthId { year: 2024, month: 2 });
        assert_eq!(parse_month("2024-2").unwrap(), MonthId { year: 2024, month: 2 });
        assert_eq!(parse_month(" 2025-12 ").unwrap(), MonthId { year: 2025, month: 12 });
    }

    #[test]
    fn current_keyword_matches_clock() {
        assert_eq!(parse_month("current").unwrap(), current_month());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_month("2024").is_err());
        assert!(parse_month("2024-0").is_err());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("feb").is_err());
    }

    #[test]
    fn next_month_rolls_over_december() {
        let dec = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(
            first_day_of_next_month(dec),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn month_end_handles_leap_years() {
        assert_eq!(month_end(2024, 2).unwrap().day(), 29);
        assert_eq!(month_end(2023, 2).unwrap().day(), 28);
        assert_eq!(month_end(2024, 12).unwrap().day(), 31);
    }
}
