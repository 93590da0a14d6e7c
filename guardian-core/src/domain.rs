//! Domain records shown by the dashboard.
//!
//! Every record here is immutable once the dataset is built. The only
//! runtime state in the system (current view, expanded anomaly) lives in
//! the TUI's `AppState`, never on these types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an anomaly. Unique within a dataset.
pub type AnomalyId = u32;

/// Headline statistics for the dashboard cards.
///
/// The four issue/record counts are authored independently; nothing ties
/// `critical_issues + warning_issues + clean_records` to `total_records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_records: u64,
    pub critical_issues: u64,
    pub warning_issues: u64,
    pub clean_records: u64,
    /// Percentage, 0..=100.
    pub quality_score: f64,
}

impl DashboardStats {
    /// Records accounted for by the issue and clean counts, saturating at `u64::MAX`.
    pub fn accounted_records(&self) -> u64 {
        self.critical_issues
            .saturating_add(self.warning_issues)
            .saturating_add(self.clean_records)
    }

    /// Signed difference between `total_records` and the accounted records.
    ///
    /// Zero means the counts tally. Positive means records are unaccounted for.
    /// Clamped to the `i64` range for counts too large to subtract exactly.
    pub fn tally_gap(&self) -> i64 {
        let accounted = self.critical_issues as i128
            + self.warning_issues as i128
            + self.clean_records as i128;
        let gap = self.total_records as i128 - accounted;
        i64::try_from(gap).unwrap_or(if gap < 0 { i64::MIN } else { i64::MAX })
    }
}

/// Anomaly severity (shown as the card badge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
        }
    }
}

/// One category of detected data-quality issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: AnomalyId,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub category: String,
    pub count: u64,
    pub description: String,
    /// `"<level> - <text>"`, e.g. `"High - Data integrity issue"`.
    pub impact: String,
    pub ai_explanation: String,
    pub recommendation: String,
}

impl Anomaly {
    /// Impact level, the part of `impact` before `" - "`.
    pub fn impact_level(&self) -> &str {
        match self.impact.split_once(" - ") {
            Some((level, _)) => level.trim(),
            None => self.impact.trim(),
        }
    }
}

/// One month of the quality trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    /// Percentage, 0..=100.
    pub quality: f64,
    pub issues: u64,
}

/// Banner text above the navigation tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Priority,
    PositiveTrend,
}

/// A key finding in the narrative report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub title: String,
    pub body: String,
}

/// Static weekly narrative report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub executive_summary: String,
    pub actions: Vec<String>,
    pub generated_by: String,
    pub data_as_of: NaiveDate,
    pub next_analysis: NaiveDate,
    pub findings: Vec<Finding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anomaly(impact: &str) -> Anomaly {
        Anomaly {
            id: 1,
            severity: Severity::Warning,
            category: "Duplicate Records".into(),
            count: 15,
            description: "Potential duplicate patient entries".into(),
            impact: impact.into(),
            ai_explanation: String::new(),
            recommendation: String::new(),
        }
    }

    #[test]
    fn impact_level_splits_on_dash() {
        assert_eq!(anomaly("High - Data integrity issue").impact_level(), "High");
        assert_eq!(anomaly("Medium - Traceability concerns").impact_level(), "Medium");
    }

    #[test]
    fn impact_level_without_separator_is_whole_text() {
        assert_eq!(anomaly("Low").impact_level(), "Low");
    }

    #[test]
    fn tally_gap_is_signed() {
        let stats = DashboardStats {
            total_records: 100,
            critical_issues: 5,
            warning_issues: 10,
            clean_records: 90,
            quality_score: 90.0,
        };
        assert_eq!(stats.accounted_records(), 105);
        assert_eq!(stats.tally_gap(), -5);
    }

    #[test]
    fn tally_gap_survives_huge_counts() {
        let stats = DashboardStats {
            total_records: u64::MAX,
            critical_issues: 0,
            warning_issues: 0,
            clean_records: u64::MAX,
            quality_score: 100.0,
        };
        assert_eq!(stats.accounted_records(), u64::MAX);
        assert_eq!(stats.tally_gap(), 0);

        let short = DashboardStats {
            total_records: 0,
            critical_issues: u64::MAX,
            warning_issues: u64::MAX,
            clean_records: 1,
            quality_score: 0.0,
        };
        assert_eq!(short.accounted_records(), u64::MAX);
        assert_eq!(short.tally_gap(), i64::MIN);

        let over = DashboardStats {
            total_records: u64::MAX,
            critical_issues: 0,
            warning_issues: 0,
            clean_records: 0,
            quality_score: 0.0,
        };
        assert_eq!(over.tally_gap(), i64::MAX);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Critical.label(), "Critical");
        assert_eq!(Severity::Warning.label(), "Warning");
    }
}
