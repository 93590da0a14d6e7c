//! Top-level UI layout — header, navigation tabs, active view, status bar.
//!
//! `draw` is a pure function of `AppState`. The same layout helpers are
//! used by the mouse handler to map a click back to a tab or a card.

pub mod header;
pub mod help;
pub mod nav;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Overlay, View};
use crate::panels::{AnomalyListPanel, DashboardPanel, ReportPanel};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        nav: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let r = regions(f.area());

    header::render(f, r.header, app);
    nav::render(f, r.nav, app);

    let data = &app.dataset;
    match app.view {
        View::Dashboard => {
            f.render_widget(DashboardPanel::new(data, &app.theme), r.body);
        }
        View::Anomalies => {
            f.render_widget(
                AnomalyListPanel::new(
                    &data.anomalies,
                    app.expanded,
                    app.cursor,
                    &app.resolved,
                    &app.theme,
                ),
                r.body,
            );
        }
        View::Report => {
            f.render_widget(
                ReportPanel::new(&data.report, app.report_scroll, &app.theme),
                r.body,
            );
        }
    }

    status_bar::render(f, r.status, app);

    if app.overlay == Overlay::Help {
        help::render(f, r.body, app);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// True if the cell at (`column`, `row`) lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
