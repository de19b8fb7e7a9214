use crate::daily_record::DailyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one matrix cell: a calendar year and a zero-based month (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        MonthKey { year, month }
    }
}

/// Formats as "YYYY-MM" with a one-based month.
impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month + 1)
    }
}

/// Aggregate of all daily records that fall in one `(year, month)`.
///
/// `days` is never empty and is sorted ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub monthly_max: f64,
    pub monthly_min: f64,
    pub days: Vec<DailyRecord>,
}

impl MonthSummary {
    /// Summarize one month of records.
    ///
    /// Returns `None` for an empty group; months without records have no cell.
    /// The input slice is left untouched: `days` is a sorted copy.
    pub fn summarize(key: MonthKey, records: &[DailyRecord]) -> Option<MonthSummary> {
        if records.is_empty() {
            return None;
        }
        let monthly_max = records
            .iter()
            .map(|r| r.max_temp)
            .fold(f64::NEG_INFINITY, f64::max);
        let monthly_min = records
            .iter()
            .map(|r| r.min_temp)
            .fold(f64::INFINITY, f64::min);

        let mut days = records.to_vec();
        // sort_by_key is stable
        days.sort_by_key(|r| r.date);

        Some(MonthSummary {
            year: key.year,
            month: key.month,
            monthly_max,
            monthly_min,
            days,
        })
    }

    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(2023, 1, d).unwrap(), max, min)
    }

    #[test]
    fn test_summarize_extremes() {
        let records = vec![day(1, 10.0, 2.0), day(2, 14.0, 4.0)];
        let summary = MonthSummary::summarize(MonthKey::new(2023, 0), &records).unwrap();
        assert_eq!(summary.monthly_max, 14.0);
        assert_eq!(summary.monthly_min, 2.0);
        assert_eq!(summary.days, records);
        assert_eq!(summary.key(), MonthKey::new(2023, 0));
    }

    #[test]
    fn test_summarize_sorts_every_permutation() {
        let base = [day(1, 5.0, -3.0), day(2, 8.5, 1.0), day(3, 7.0, 0.5), day(4, 12.0, 3.5)];
        let permutations: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [3, 2, 1, 0],
            [1, 3, 0, 2],
            [2, 0, 3, 1],
            [3, 0, 2, 1],
            [1, 0, 3, 2],
        ];
        for order in permutations {
            let shuffled: Vec<DailyRecord> = order.iter().map(|&i| base[i]).collect();
            let summary = MonthSummary::summarize(MonthKey::new(2023, 0), &shuffled).unwrap();
            assert_eq!(summary.days, base.to_vec());
            assert_eq!(summary.monthly_max, 12.0);
            assert_eq!(summary.monthly_min, -3.0);
            // caller's collection keeps its order
            assert_eq!(shuffled[0], base[order[0]]);
        }
    }

    #[test]
    fn test_max_and_min_come_from_different_fields() {
        // the warmest night can be colder than the coldest afternoon
        let records = vec![day(1, 20.0, 15.0), day(2, 25.0, 9.0)];
        let summary = MonthSummary::summarize(MonthKey::new(2023, 0), &records).unwrap();
        assert_eq!(summary.monthly_max, 25.0);
        assert_eq!(summary.monthly_min, 9.0);
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert!(MonthSummary::summarize(MonthKey::new(2023, 5), &[]).is_none());
    }

    #[test]
    fn test_month_key_display_and_order() {
        assert_eq!(MonthKey::new(2023, 0).to_string(), "2023-01");
        assert_eq!(MonthKey::new(2019, 11).to_string(), "2019-12");
        assert!(MonthKey::new(2019, 11) < MonthKey::new(2020, 0));
        assert!(MonthKey::new(2020, 1) < MonthKey::new(2020, 2));
    }

    #[test]
    fn test_summary_serializes_dates_as_iso() {
        let summary =
            MonthSummary::summarize(MonthKey::new(2023, 0), &[day(1, 10.0, 2.0)]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["days"][0]["date"], "2023-01-01");
        assert_eq!(json["monthly_max"], 10.0);
    }
}
