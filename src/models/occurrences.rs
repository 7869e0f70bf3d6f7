use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Months, NaiveDate};
use serde::Deserialize;

use super::selection::DrillDownTarget;
use crate::config::Config;

/// One month of keyword counts. Keyword names arrive as dynamic field names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OccurrenceRecord {
    pub year_month: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, f64>,
}

impl OccurrenceRecord {
    pub fn count(&self, keyword: &str) -> Option<f64> {
        self.counts.get(keyword).copied()
    }
}

/// Monthly keyword counts, sorted by month with no gaps between the first and last month
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OccurrenceSeries {
    records: Vec<OccurrenceRecord>,
}

/// A single keyword line ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub keyword: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Everything the trend chart needs: shared x-axis months plus one line per keyword
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendChartData {
    pub periods: Vec<String>,
    pub lines: Vec<TrendLine>,
}

impl TrendChartData {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() || self.periods.is_empty()
    }

    /// Maps a click on the line at `series_index` and x category `year_month` to a drill-down target
    pub fn target_for(&self, series_index: usize, year_month: &str) -> Option<DrillDownTarget> {
        self.lines
            .get(series_index)
            .map(|line| DrillDownTarget::new(line.keyword.clone(), year_month))
    }
}

impl OccurrenceSeries {
    pub fn new(mut records: Vec<OccurrenceRecord>) -> Self {
        records.sort_by(|a, b| a.year_month.cmp(&b.year_month));
        Self {
            records: fill_missing_months(records),
        }
    }

    /// Keywords that appear as a column in at least one record
    fn keywords(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| r.counts.keys().map(String::as_str))
            .collect()
    }

    /// Builds one line per requested keyword that is present in the data.
    ///
    /// Line order follows `keywords`; the color is picked by the keyword's
    /// position in `keywords`, not by its position among the drawn lines.
    pub fn chart_data(&self, keywords: &[String]) -> TrendChartData {
        let present = self.keywords();
        let lines = keywords
            .iter()
            .enumerate()
            .filter(|(_, keyword)| present.contains(keyword.as_str()))
            .map(|(index, keyword)| TrendLine {
                keyword: keyword.clone(),
                color: Config::palette_color(index),
                values: self
                    .records
                    .iter()
                    .map(|r| r.count(keyword).unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        TrendChartData {
            periods: self.records.iter().map(|r| r.year_month.clone()).collect(),
            lines,
        }
    }
}

fn parse_month(year_month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{year_month}-01"), "%Y-%m-%d").ok()
}

/// Inserts zero-count records for every month missing between consecutive records.
/// Records whose month does not parse are kept as they are.
fn fill_missing_months(records: Vec<OccurrenceRecord>) -> Vec<OccurrenceRecord> {
    let columns: BTreeSet<String> = records
        .iter()
        .flat_map(|r| r.counts.keys().cloned())
        .collect();

    let mut filled: Vec<OccurrenceRecord> = Vec::with_capacity(records.len());
    for record in records {
        let gap_start = filled
            .last()
            .and_then(|prev| parse_month(&prev.year_month))
            .and_then(|month| month.checked_add_months(Months::new(1)));

        if let (Some(mut month), Some(current)) = (gap_start, parse_month(&record.year_month)) {
            while month < current {
                filled.push(OccurrenceRecord {
                    year_month: format!("{:04}-{:02}", month.year(), month.month()),
                    counts: columns.iter().map(|k| (k.clone(), 0.0)).collect(),
                });
                match month.checked_add_months(Months::new(1)) {
                    Some(next) => month = next,
                    None => break,
                }
            }
        }
        filled.push(record);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> OccurrenceSeries {
        let records: Vec<OccurrenceRecord> = serde_json::from_str(json).unwrap();
        OccurrenceSeries::new(records)
    }

    #[test]
    fn test_dynamic_keyword_fields() {
        let series = parse(r#"[{"year_month":"2024-01","rust":3,"golang":5.0}]"#);
        let record = &series.records[0];
        assert_eq!(record.year_month, "2024-01");
        assert_eq!(record.count("rust"), Some(3.0));
        assert_eq!(record.count("golang"), Some(5.0));
        assert_eq!(record.count("python"), None);
    }

    #[test]
    fn test_records_sorted_and_gaps_filled() {
        let series = parse(
            r#"[
                {"year_month":"2024-03","rust":1},
                {"year_month":"2023-12","rust":4}
            ]"#,
        );
        let months: Vec<&str> = series
            .records
            .iter()
            .map(|r| r.year_month.as_str())
            .collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02", "2024-03"]);
        assert_eq!(series.records[1].count("rust"), Some(0.0));
        assert_eq!(series.records[3].count("rust"), Some(1.0));
    }

    #[test]
    fn test_chart_data_follows_selection_order() {
        let series = parse(r#"[{"year_month":"2024-01","rust":3,"golang":5}]"#);
        let data = series.chart_data(&["golang".to_string(), "rust".to_string()]);

        assert_eq!(data.periods, vec!["2024-01"]);
        assert_eq!(data.lines.len(), 2);
        assert_eq!(data.lines[0].keyword, "golang");
        assert_eq!(data.lines[0].values, vec![5.0]);
        assert_eq!(data.lines[0].color, Config::PALETTE[0]);
        assert_eq!(data.lines[1].keyword, "rust");
        assert_eq!(data.lines[1].color, Config::PALETTE[1]);
    }

    #[test]
    fn test_chart_data_skips_keywords_missing_from_data() {
        let series = parse(r#"[{"year_month":"2024-01","rust":3}]"#);
        let data = series.chart_data(&["python".to_string(), "rust".to_string()]);

        assert_eq!(data.lines.len(), 1);
        assert_eq!(data.lines[0].keyword, "rust");
        // color stays bound to the selection index
        assert_eq!(data.lines[0].color, Config::PALETTE[1]);
    }

    #[test]
    fn test_target_for_click() {
        let series = parse(r#"[{"year_month":"2024-01","rust":3,"golang":5}]"#);
        let data = series.chart_data(&["rust".to_string(), "golang".to_string()]);

        let target = data.target_for(1, "2024-01").unwrap();
        assert_eq!(target.keyword, "golang");
        assert_eq!(target.year_month, "2024-01");
        assert!(data.target_for(2, "2024-01").is_none());
    }
}
