use crate::month_summary::MonthKey;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of the source table: the calendar date and its temperature extremes
/// in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub max_temp: f64,
    pub min_temp: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, max_temp: f64, min_temp: f64) -> Self {
        DailyRecord {
            date,
            max_temp,
            min_temp,
        }
    }

    /// Calendar year of the record.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The matrix cell this record belongs to.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.date.year(), self.date.month0())
    }
}
