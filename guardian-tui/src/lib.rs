//! Guardian TUI — terminal dashboard for vaccination-record data quality.
//!
//! Three mutually exclusive views driven by `AppState`:
//! - Dashboard: headline stats and the quality trend
//! - Anomaly Detection: anomaly cards with an expand/collapse toggle
//! - AI Summary: the weekly narrative report

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{AppState, View};
pub use input::{handle_key, handle_mouse};
pub use theme::Theme;
