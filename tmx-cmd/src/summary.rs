//! `summary`: print the monthly aggregates as a table or JSON.

use crate::source::load_source;
use tmx_data::{Dataset, MonthSummary, YEARS_COUNT};

/// One line per month: key, monthly max, monthly min and day count.
pub fn format_table(dataset: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>8} {:>8} {:>5}\n",
        "month", "max °C", "min °C", "days"
    ));
    for summary in dataset.iter() {
        out.push_str(&format!(
            "{:<8} {:>8.1} {:>8.1} {:>5}\n",
            summary.key().to_string(),
            summary.monthly_max,
            summary.monthly_min,
            summary.days.len()
        ));
    }
    out
}

/// The ordered list of month summaries, days included.
pub fn format_json(dataset: &Dataset) -> serde_json::Result<String> {
    let summaries: Vec<&MonthSummary> = dataset.iter().collect();
    serde_json::to_string_pretty(&summaries)
}

pub async fn run_summary(input: &str, json: bool) -> anyhow::Result<()> {
    let report = load_source(input, YEARS_COUNT).await?;
    if json {
        println!("{}", format_json(&report.dataset)?);
    } else {
        print!("{}", format_table(&report.dataset));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmx_data::loader::load_str;

    const SAMPLE: &str = "date,max_temperature,min_temperature
2023-01-01,10,2
2023-01-02,14,4
2023-03-15,21.25,9.5
";

    #[test]
    fn test_table_rows_in_month_order() {
        let dataset = load_str(SAMPLE, 10).unwrap().dataset;
        let table = format_table(&dataset);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("month"));
        assert_eq!(lines[1], "2023-01      14.0      2.0     2");
        assert!(lines[2].starts_with("2023-03"));
    }

    #[test]
    fn test_json_lists_summaries() {
        let dataset = load_str(SAMPLE, 10).unwrap().dataset;
        let json = format_json(&dataset).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let months = value.as_array().unwrap();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0]["monthly_max"], 14.0);
        assert_eq!(months[0]["days"].as_array().unwrap().len(), 2);
        assert_eq!(months[1]["month"], 2);
    }
}
