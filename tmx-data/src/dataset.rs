use crate::daily_record::DailyRecord;
use crate::month_summary::{MonthKey, MonthSummary};
use log::info;
use std::collections::{BTreeMap, BTreeSet};

/// The month summaries for the most recent window of years.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Selected years, ascending.
    pub years: Vec<i32>,
    summaries: BTreeMap<MonthKey, MonthSummary>,
}

impl Dataset {
    /// Build the dataset from parsed records, keeping the `years_count` most
    /// recent distinct years.
    ///
    /// Records are filtered by exact membership in the selected years.
    pub fn from_records(records: &[DailyRecord], years_count: usize) -> Dataset {
        let years = Dataset::select_years(records, years_count);
        let selected: BTreeSet<i32> = years.iter().copied().collect();

        let mut groups: BTreeMap<MonthKey, Vec<DailyRecord>> = BTreeMap::new();
        for record in records.iter().filter(|r| selected.contains(&r.year())) {
            groups.entry(record.month_key()).or_default().push(*record);
        }

        let summaries: BTreeMap<MonthKey, MonthSummary> = groups
            .into_iter()
            .filter_map(|(key, days)| MonthSummary::summarize(key, &days).map(|s| (key, s)))
            .collect();

        info!(
            "dataset: {} years ({:?}..{:?}), {} month cells",
            years.len(),
            years.first(),
            years.last(),
            summaries.len()
        );
        Dataset { years, summaries }
    }

    /// The `years_count` most recent distinct years present in `records`, ascending.
    pub fn select_years(records: &[DailyRecord], years_count: usize) -> Vec<i32> {
        let distinct: BTreeSet<i32> = records.iter().map(|r| r.year()).collect();
        let skip = distinct.len().saturating_sub(years_count);
        distinct.into_iter().skip(skip).collect()
    }

    pub fn get(&self, key: MonthKey) -> Option<&MonthSummary> {
        self.summaries.get(&key)
    }

    /// Summaries in `(year, month)` order.
    pub fn iter(&self) -> impl Iterator<Item = &MonthSummary> {
        self.summaries.values()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    #[test]
    fn test_select_most_recent_ten_years() {
        let records: Vec<DailyRecord> = (2010..=2023).map(|y| rec(y, 6, 1, 25.0, 12.0)).collect();
        let years = Dataset::select_years(&records, 10);
        assert_eq!(years, (2014..=2023).collect::<Vec<_>>());
    }

    #[test]
    fn test_fewer_years_than_window() {
        let records = vec![rec(2022, 1, 1, 5.0, 0.0), rec(2021, 1, 1, 6.0, 1.0)];
        let dataset = Dataset::from_records(&records, 10);
        assert_eq!(dataset.years, vec![2021, 2022]);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_gap_years_outside_window() {
        // only the two most recent years survive
        let records = vec![
            rec(2000, 3, 1, 10.0, 1.0),
            rec(2005, 3, 1, 11.0, 2.0),
            rec(2020, 3, 1, 12.0, 3.0),
            rec(2021, 3, 1, 13.0, 4.0),
        ];
        let dataset = Dataset::from_records(&records, 2);
        assert_eq!(dataset.years, vec![2020, 2021]);
        assert!(dataset.get(MonthKey::new(2005, 2)).is_none());
        assert!(dataset.get(MonthKey::new(2000, 2)).is_none());
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_groups_by_year_and_month() {
        let records = vec![
            rec(2023, 1, 2, 14.0, 4.0),
            rec(2023, 1, 1, 10.0, 2.0),
            rec(2023, 2, 1, 18.0, 6.0),
            rec(2022, 1, 1, 9.0, -2.0),
        ];
        let dataset = Dataset::from_records(&records, 10);
        let january = dataset.get(MonthKey::new(2023, 0)).unwrap();
        assert_eq!(january.monthly_max, 14.0);
        assert_eq!(january.monthly_min, 2.0);
        assert_eq!(january.days.len(), 2);
        assert!(january.days[0].date < january.days[1].date);

        let keys: Vec<MonthKey> = dataset.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2022, 0),
                MonthKey::new(2023, 0),
                MonthKey::new(2023, 1)
            ]
        );
    }

    #[test]
    fn test_month_without_records_has_no_summary() {
        let records = vec![rec(2023, 1, 1, 10.0, 2.0), rec(2023, 3, 1, 20.0, 8.0)];
        let dataset = Dataset::from_records(&records, 10);
        assert!(dataset.get(MonthKey::new(2023, 1)).is_none());
        assert!(dataset.iter().all(|s| !s.days.is_empty()));
    }

    #[test]
    fn test_empty_input() {
        let dataset = Dataset::from_records(&[], 10);
        assert!(dataset.is_empty());
        assert!(dataset.years.is_empty());
    }
}
