//! Application state — single-owner, main-thread only.
//!
//! The dataset is immutable for the lifetime of the app. The only state that
//! changes is the current view, the expanded anomaly, and a few cursors, all
//! updated through the transition methods below.

use std::collections::BTreeSet;

use tracing::debug;

use guardian_core::{Anomaly, AnomalyId, Dataset};

use crate::theme::Theme;

/// Which top-level view is shown. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Anomalies,
    Report,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::Anomalies, View::Report];

    pub fn index(self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Anomalies => 1,
            View::Report => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Anomalies => "Anomaly Detection",
            View::Report => "AI Summary",
        }
    }

    pub fn next(self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> View {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
}

/// Popup drawn over the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
}

pub struct AppState {
    pub dataset: Dataset,
    /// Where the dataset came from, for the status bar.
    pub source: String,
    pub theme: Theme,
    pub view: View,
    /// At most one anomaly shows its detail block.
    pub expanded: Option<AnomalyId>,
    /// Keyboard cursor into `dataset.anomalies`.
    pub cursor: usize,
    pub report_scroll: u16,
    /// Session-only; never written anywhere.
    pub resolved: BTreeSet<AnomalyId>,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(dataset: Dataset, source: impl Into<String>) -> Self {
        Self {
            dataset,
            source: source.into(),
            theme: Theme::default(),
            view: View::Dashboard,
            expanded: None,
            cursor: 0,
            report_scroll: 0,
            resolved: BTreeSet::new(),
            overlay: Overlay::None,
            status_message: None,
            running: true,
        }
    }

    // ── View selector ──────────────────────────────────────────────

    /// Unconditional transition to `view`.
    pub fn select_view(&mut self, view: View) {
        if self.view != view {
            debug!(from = ?self.view, to = ?view, "view selected");
        }
        self.view = view;
    }

    pub fn next_view(&mut self) {
        self.select_view(self.view.next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.view.prev());
    }

    // ── Anomaly expansion ──────────────────────────────────────────

    /// Collapse `id` if it is expanded, otherwise expand it (collapsing any other).
    pub fn toggle_anomaly(&mut self, id: AnomalyId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        debug!(id, expanded = ?self.expanded, "anomaly toggled");
    }

    pub fn is_expanded(&self, id: AnomalyId) -> bool {
        self.expanded == Some(id)
    }

    pub fn cursor_anomaly(&self) -> Option<&Anomaly> {
        self.dataset.anomalies.get(self.cursor)
    }

    pub fn toggle_cursor_anomaly(&mut self) {
        if let Some(id) = self.cursor_anomaly().map(|a| a.id) {
            self.toggle_anomaly(id);
        }
    }

    /// Move the cursor to card `index` and toggle it (mouse click).
    pub fn click_anomaly(&mut self, index: usize) {
        if index < self.dataset.anomalies.len() {
            self.cursor = index;
            self.toggle_cursor_anomaly();
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.dataset.anomalies.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    // ── Resolution ─────────────────────────────────────────────────

    pub fn mark_cursor_resolved(&mut self) {
        let Some(anomaly) = self.cursor_anomaly() else {
            return;
        };
        let (id, category) = (anomaly.id, anomaly.category.clone());
        if self.resolved.insert(id) {
            debug!(id, category = %category, "anomaly marked resolved");
            self.set_success("✓ Issue marked as resolved!");
        } else {
            self.set_warning(format!("{category} is already resolved"));
        }
    }

    pub fn is_resolved(&self, id: AnomalyId) -> bool {
        self.resolved.contains(&id)
    }

    // ── Report scrolling ───────────────────────────────────────────

    pub fn scroll_report_down(&mut self) {
        self.report_scroll = self.report_scroll.saturating_add(1);
    }

    pub fn scroll_report_up(&mut self) {
        self.report_scroll = self.report_scroll.saturating_sub(1);
    }

    // ── Status / lifecycle ─────────────────────────────────────────

    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Success));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
