//! Guardian Core — domain types and data plumbing for the data quality dashboard.
//!
//! This crate holds everything the terminal UI and the CLI share:
//! - Domain records (stats, anomalies, trend points, the narrative report)
//! - The built-in demonstration dataset
//! - The data-provider boundary (built-in or file-backed)
//! - Display formatting (thousands separators, percentages, bar widths)
//! - Configuration, telemetry, and Markdown/CSV/JSON export

pub mod config;
pub mod dataset;
pub mod domain;
pub mod export;
pub mod format;
pub mod provider;
pub mod telemetry;

pub use config::{AppConfig, ConfigError};
pub use dataset::Dataset;
pub use domain::{
    Anomaly, AnomalyId, DashboardStats, Finding, FindingKind, Header, Report, Severity, TrendPoint,
};
pub use provider::{BuiltinProvider, DataError, DataProvider, FileProvider};
