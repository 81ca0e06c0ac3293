//! Reporting windows derived from UI time selections.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{self, TimePeriod};
use crate::errors::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// An inclusive date interval covering start-of-day `start` through
/// end-of-day `end`.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `end == start` is a valid single-day window; a reversed range is not.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if end < start {
            return Err(CoreError::InvalidWindow);
        }
        Ok(Self { start, end })
    }

    /// Single-day window covering `date`.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Window for the named period containing `today`.
    ///
    /// Weeks run Monday through Sunday; months and years follow the
    /// calendar.
    pub fn for_period(period: TimePeriod, today: NaiveDate) -> Self {
        match period {
            TimePeriod::Daily => Self::single_day(today),
            TimePeriod::Weekly => {
                let start = common::week_start(today);
                Self {
                    start,
                    end: start + Duration::days(6),
                }
            }
            TimePeriod::Monthly => {
                let (start, end) = common::month_bounds(today);
                Self { start, end }
            }
            TimePeriod::Yearly => {
                let (start, end) = common::year_bounds(today);
                Self { start, end }
            }
        }
    }

    /// Both day boundaries are inclusive.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        let date = at.date_naive();
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Raw window selection as supplied by the presentation layer.
///
/// An explicit range always beats the named period; with neither present no
/// filtering applies.
pub struct WindowSelection {
    pub period: Option<TimePeriod>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl WindowSelection {
    pub fn period(period: TimePeriod) -> Self {
        Self {
            period: Some(period),
            ..Self::default()
        }
    }

    pub fn range(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            period: None,
            start: Some(start),
            end,
        }
    }

    /// Resolves the selection into a concrete window, `today` anchoring the
    /// named periods. Returns `Ok(None)` when nothing is selected.
    ///
    /// An explicit start without an end yields a single-day window.
    pub fn resolve(&self, today: NaiveDate) -> CoreResult<Option<DateWindow>> {
        if let Some(start) = self.start {
            let end = self.end.unwrap_or(start);
            return DateWindow::new(start, end).map(Some);
        }
        Ok(self
            .period
            .map(|period| DateWindow::for_period(period, today)))
    }
}
