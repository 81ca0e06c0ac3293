//! Shared enums and calendar helpers for tracker primitives.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Classifies a transaction or category as money in or money out.
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Named reporting cadences selectable in the UI.
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TimePeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimePeriod::Daily => "Daily",
            TimePeriod::Weekly => "Weekly",
            TimePeriod::Monthly => "Monthly",
            TimePeriod::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

/// Returns the Monday that opens the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let delta = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(delta)
}

/// Returns the first and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap();
    let last = NaiveDate::from_ymd_opt(
        date.year(),
        date.month(),
        days_in_month(date.year(), date.month()),
    )
    .unwrap();
    (first, last)
}

/// Returns January 1st and December 31st of the year containing `date`.
pub fn year_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap();
    (first, last)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_anchors_to_monday() {
        // 2024-06-13 is a Thursday.
        assert_eq!(week_start(date(2024, 6, 13)), date(2024, 6, 10));
        assert_eq!(week_start(date(2024, 6, 10)), date(2024, 6, 10));
        // Sunday still belongs to the week opened the previous Monday.
        assert_eq!(week_start(date(2024, 6, 16)), date(2024, 6, 10));
    }

    #[test]
    fn month_bounds_respect_leap_years() {
        assert_eq!(
            month_bounds(date(2024, 2, 15)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_bounds(date(2023, 2, 15)),
            (date(2023, 2, 1), date(2023, 2, 28))
        );
        assert_eq!(
            month_bounds(date(2024, 12, 31)),
            (date(2024, 12, 1), date(2024, 12, 31))
        );
    }

    #[test]
    fn year_bounds_cover_the_full_year() {
        assert_eq!(
            year_bounds(date(2024, 6, 13)),
            (date(2024, 1, 1), date(2024, 12, 31))
        );
    }
}
