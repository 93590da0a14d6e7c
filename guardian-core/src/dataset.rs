//! The dataset the dashboard renders, and the built-in demonstration tables.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Anomaly, AnomalyId, DashboardStats, Finding, FindingKind, Header, Report, Severity, TrendPoint,
};
use crate::provider::DataError;

/// Everything one dashboard session displays. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Year label appended to each trend month.
    pub trend_year: i32,
    pub header: Header,
    pub stats: DashboardStats,
    pub anomalies: Vec<Anomaly>,
    /// Chronological by authoring order.
    pub trend: Vec<TrendPoint>,
    pub report: Report,
}

impl Dataset {
    pub fn anomaly(&self, id: AnomalyId) -> Option<&Anomaly> {
        self.anomalies.iter().find(|a| a.id == id)
    }

    /// Quality change between the last two trend points, in percentage points.
    pub fn quality_delta(&self) -> Option<f64> {
        match self.trend.as_slice() {
            [.., prev, last] => Some(last.quality - prev.quality),
            _ => None,
        }
    }

    /// Check the invariants the renderer relies on.
    ///
    /// The built-in dataset always passes; file-loaded datasets go through
    /// here before anything draws them.
    pub fn validate(&self) -> Result<(), DataError> {
        if !(0.0..=100.0).contains(&self.stats.quality_score) {
            return Err(DataError::Invalid(format!(
                "quality score {} is outside 0..=100",
                self.stats.quality_score
            )));
        }

        let mut seen = HashSet::new();
        for anomaly in &self.anomalies {
            if !seen.insert(anomaly.id) {
                return Err(DataError::DuplicateAnomalyId { id: anomaly.id });
            }
        }

        if self.trend.is_empty() {
            return Err(DataError::Invalid("trend has no points".into()));
        }
        for point in &self.trend {
            if !(0.0..=100.0).contains(&point.quality) {
                return Err(DataError::Invalid(format!(
                    "trend quality {} for {} is outside 0..=100",
                    point.quality, point.month
                )));
            }
        }

        Ok(())
    }

    /// The authored demonstration dataset.
    pub fn builtin() -> Self {
        Self {
            header: Header {
                title: "Public Health Data Quality Guardian".into(),
                subtitle: "AI-powered vaccination data monitoring • Powered by Snowflake Intelligence"
                    .into(),
                last_updated: "2 minutes ago".into(),
            },
            stats: DashboardStats {
                total_records: 45_821,
                critical_issues: 23,
                warning_issues: 47,
                clean_records: 45_751,
                quality_score: 97.8,
            },
            anomalies: builtin_anomalies(),
            trend: vec![
                trend_point("Aug", 94.2, 89),
                trend_point("Sep", 95.8, 67),
                trend_point("Oct", 96.5, 54),
                trend_point("Nov", 97.1, 42),
                trend_point("Dec", 97.8, 23),
            ],
            trend_year: 2024,
            report: builtin_report(),
        }
    }
}

fn trend_point(month: &str, quality: f64, issues: u64) -> TrendPoint {
    TrendPoint {
        month: month.into(),
        quality,
        issues,
    }
}

#[allow(clippy::too_many_arguments)]
fn anomaly(
    id: AnomalyId,
    severity: Severity,
    category: &str,
    count: u64,
    description: &str,
    impact: &str,
    ai_explanation: &str,
    recommendation: &str,
) -> Anomaly {
    Anomaly {
        id,
        severity,
        category: category.into(),
        count,
        description: description.into(),
        impact: impact.into(),
        ai_explanation: ai_explanation.into(),
        recommendation: recommendation.into(),
    }
}

fn builtin_anomalies() -> Vec<Anomaly> {
    vec![
        anomaly(
            1,
            Severity::Critical,
            "Missing Second Dose",
            12,
            "Patients overdue for second dose by >30 days",
            "High - Incomplete vaccination coverage",
            "These 12 patients received their first dose but are significantly overdue for the \
             second dose. Analysis shows 8 were due to follow-up failures, 3 to address changes, \
             and 1 to data entry error.",
            "Immediate outreach required. Priority contact list generated.",
        ),
        anomaly(
            2,
            Severity::Critical,
            "Age Mismatch",
            8,
            "Vaccination age conflicts with birth records",
            "High - Data integrity issue",
            "Detected inconsistencies between vaccination dates and ages. 5 cases show impossible \
             timelines (vaccination before birth), 3 cases have data entry errors in birth year.",
            "Manual review required. Likely data entry errors in patient ID or DOB fields.",
        ),
        anomaly(
            3,
            Severity::Warning,
            "Duplicate Records",
            15,
            "Potential duplicate patient entries",
            "Medium - Inflated coverage statistics",
            "Found 15 patient records with matching names and similar DOBs across different IDs. \
             Pattern suggests potential duplicate registrations during high-volume vaccination \
             events.",
            "De-duplication workflow recommended. May affect coverage rate by 0.3%.",
        ),
        anomaly(
            4,
            Severity::Warning,
            "Dose Interval Too Short",
            11,
            "Second dose given earlier than recommended",
            "Medium - Clinical protocol deviation",
            "These patients received second doses 7-14 days early. All cases occurred at the same \
             clinic during week of 12/15, suggesting systematic scheduling issue.",
            "Notify clinic of protocol deviation. Clinical review to determine if revaccination \
             needed.",
        ),
        anomaly(
            5,
            Severity::Warning,
            "Incomplete Data",
            21,
            "Missing batch numbers or lot IDs",
            "Medium - Traceability concerns",
            "Batch information missing from 21 recent entries. All from mobile vaccination unit \
             operations. Prevents recall traceability.",
            "Update mobile unit data entry protocol. Batch information must be mandatory field.",
        ),
    ]
}

fn builtin_report() -> Report {
    Report {
        title: "Weekly AI-Generated Summary Report".into(),
        executive_summary: "Overall data quality continues to improve, reaching 97.8% this week. \
            However, 23 critical issues require immediate attention, primarily related to \
            follow-up scheduling and data entry accuracy. Two systematic issues were identified \
            that affect multiple records."
            .into(),
        findings: vec![
            Finding {
                kind: FindingKind::Priority,
                title: "Priority 1: Missing Second Doses".into(),
                body: "12 patients are significantly overdue for their second vaccination dose. \
                    AI analysis reveals this is primarily due to follow-up system failures rather \
                    than patient non-compliance. Automated contact lists have been generated for \
                    immediate outreach."
                    .into(),
            },
            Finding {
                kind: FindingKind::Priority,
                title: "Priority 2: Systematic Scheduling Error".into(),
                body: "A pattern of early second-dose administration was detected at one clinic \
                    location during a specific week. This represents a systematic protocol \
                    deviation requiring clinical review and staff retraining."
                    .into(),
            },
            Finding {
                kind: FindingKind::PositiveTrend,
                title: "Positive Trend: Mobile Unit Improvement".into(),
                body: "Data quality from mobile vaccination units has improved by 15% over the \
                    past month following the implementation of mandatory field validation. \
                    Continue this approach."
                    .into(),
            },
        ],
        actions: vec![
            "Immediately contact 12 patients overdue for second doses using generated priority list"
                .into(),
            "Conduct clinical review of 11 early second-dose cases for efficacy assessment".into(),
            "Implement mandatory batch number fields for all vaccination entries".into(),
            "Review and update patient matching algorithm to reduce duplicate entries".into(),
            "Schedule training session for clinic staff on proper scheduling protocols".into(),
        ],
        generated_by: "Snowflake Cortex AI".into(),
        data_as_of: ymd(2026, 1, 4),
        next_analysis: ymd(2026, 1, 11),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Only called with the report dates above, all valid calendar days.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
