//! Bottom status bar — key hints, dataset source, last status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel, View};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Dashboard 2:Anomalies 3:Summary ?:Help q:Quit",
        theme.caption(),
    ));

    let view_hint = match app.view {
        View::Dashboard => "",
        View::Anomalies => " | j/k:Move Enter:Expand r:Resolve",
        View::Report => " | j/k:Scroll",
    };
    spans.push(Span::styled(view_hint, theme.caption()));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(format!("data: {}", app.source), theme.caption()));

    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Success => theme.positive,
            StatusLevel::Warning => theme.warning,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
