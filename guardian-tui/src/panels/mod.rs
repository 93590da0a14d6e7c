//! The three view panels, one widget each.
//!
//! - Dashboard: stat cards, quality trend bars, issue counts per month
//! - AnomalyList: one card per anomaly, detail block on the expanded card
//! - Report: the static weekly narrative

pub mod anomalies;
pub mod dashboard;
pub mod report;

pub use anomalies::AnomalyListPanel;
pub use dashboard::{DashboardPanel, StatCard};
pub use report::ReportPanel;
