use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::time;

/// A contiguous date range within one month. The first week of a month
/// starts on the 1st whatever the weekday; every later week starts on a
/// Monday; every week ends on a Sunday except the last, which ends on the
/// month's last day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub index: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    /// Derives the week sequence for a month. Pure: the same (year, month)
    /// always yields the same sequence, ordered and covering every day of
    /// the month exactly once.
    pub fn for_month(year: i32, month: u32) -> StoreResult<Vec<Week>> {
        let start = time::month_start(year, month)
            .ok_or(StoreError::InvalidMonth { year, month })?;
        let end = time::month_end(year, month)
            .ok_or(StoreError::InvalidMonth { year, month })?;

        let mut weeks = Vec::new();
        let mut cursor = start;
        let mut index = 1u32;
        while cursor <= end {
            let days_to_sunday = 6 - cursor.weekday().num_days_from_monday() as i64;
            let sunday = cursor + Duration::days(days_to_sunday);
            let week_end = sunday.min(end);
            weeks.push(Week {
                index,
                start: cursor,
                end: week_end,
            });
            cursor = week_end + Duration::days(1);
            index += 1;
        }
        Ok(weeks)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Display label like "Feb 01 - Feb 04".
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%b %d"), self.end.format("%b %d"))
    }
}
