//! Export — Markdown report, CSV anomaly list, JSON records.
//!
//! The CLI prints these; the TUI never calls them.

use crate::dataset::Dataset;
use crate::domain::{Anomaly, FindingKind};
use crate::format;

// ─── Markdown ───────────────────────────────────────────────────────

/// Render the narrative report (with the headline stats) as Markdown.
pub fn report_markdown(data: &Dataset) -> String {
    let report = &data.report;
    let mut out = format!(
        "# {}\n\n\
## Executive Summary\n\n\
{}\n\n\
## Headline Numbers\n\n\
- Data Quality Score: {}\n\
- Total Records: {}\n\
- Critical Issues: {}\n\
- Warnings: {}\n",
        report.title,
        report.executive_summary,
        format::percent(data.stats.quality_score),
        format::thousands(data.stats.total_records),
        data.stats.critical_issues,
        data.stats.warning_issues,
    );

    out.push_str("\n## Key Findings\n");
    for finding in &report.findings {
        let marker = match finding.kind {
            FindingKind::Priority => "⚠",
            FindingKind::PositiveTrend => "✓",
        };
        out.push_str(&format!("\n### {marker} {}\n\n{}\n", finding.title, finding.body));
    }

    out.push_str("\n## Recommended Actions\n\n");
    for (i, action) in report.actions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, action));
    }

    out.push_str(&format!(
        "\n---\n\n**Report generated by:** {} | **Data as of:** {} | **Next automated analysis:** {}\n",
        report.generated_by,
        long_date(report.data_as_of),
        long_date(report.next_analysis),
    ));
    out
}

/// `January 4, 2026`.
pub fn long_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// ─── CSV ────────────────────────────────────────────────────────────

/// Export anomalies as CSV.
///
/// Columns: id, type, category, count, impact_level, description, impact,
/// ai_explanation, recommendation
pub fn anomalies_csv(anomalies: &[Anomaly]) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "type",
        "category",
        "count",
        "impact_level",
        "description",
        "impact",
        "ai_explanation",
        "recommendation",
    ])?;

    for a in anomalies {
        let id = a.id.to_string();
        let count = a.count.to_string();
        wtr.write_record([
            id.as_str(),
            a.severity.label(),
            a.category.as_str(),
            count.as_str(),
            a.impact_level(),
            a.description.as_str(),
            a.impact.as_str(),
            a.ai_explanation.as_str(),
            a.recommendation.as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ─── JSON ───────────────────────────────────────────────────────────

pub fn anomalies_json(anomalies: &[Anomaly]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(anomalies)
}

pub fn dataset_json(data: &Dataset) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
