use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which aggregate history a graph displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySource {
    /// Daily submission count, seven day moving average
    Submissions,
    /// Monthly comment count on the "Who is hiring" thread
    Hiring { toplevel_only: bool },
}

impl HistorySource {
    /// Hiring comment counts, from the "Include only top-level comments." checkbox state
    pub const fn hiring(toplevel_only: bool) -> Self {
        Self::Hiring { toplevel_only }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Submissions => "Number of submissions on HN (seven day moving average)",
            Self::Hiring { .. } => "Number of comments per month",
        }
    }

    pub fn value_label(&self) -> &'static str {
        match self {
            Self::Submissions => "Moving average",
            Self::Hiring { .. } => "No. comments",
        }
    }
}

/// A single point of an aggregate series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub period: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySeries {
    points: Vec<HistoryPoint>,
}

impl HistorySeries {
    pub fn new(points: Vec<HistoryPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Splits the series into x-axis categories and y values, in API order
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        self.points
            .iter()
            .map(|p| (p.period.clone(), p.value))
            .unzip()
    }
}

/// Formats a period key for display on an axis.
///
/// Accepts `YYYY-MM-DD` (optionally followed by a time part) and `YYYY-MM`;
/// anything else is returned unchanged.
pub fn period_label(period: &str) -> String {
    let date_part = period.get(..10).unwrap_or(period);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    period.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiring_source_follows_checkbox() {
        assert_eq!(
            HistorySource::hiring(true),
            HistorySource::Hiring {
                toplevel_only: true
            }
        );
        assert_ne!(HistorySource::hiring(true), HistorySource::hiring(false));
        assert_ne!(HistorySource::hiring(true), HistorySource::Submissions);
    }

    #[test]
    fn test_period_label_formats() {
        assert_eq!(period_label("2024-01-15"), "15 Jan 2024");
        assert_eq!(period_label("2024-01-15T00:00:00"), "15 Jan 2024");
        assert_eq!(period_label("2024-03"), "Mar 2024");
        assert_eq!(period_label("unknown"), "unknown");
    }
}
