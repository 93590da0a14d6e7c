//! Banner: title, subtitle, "last updated".

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let header = &app.dataset.header;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(theme.accent)),
            Span::styled(header.title.as_str(), theme.heading()),
        ]),
        Line::from(Span::styled(header.subtitle.as_str(), theme.caption())),
    ]);
    f.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::from(Span::styled("Last Updated", theme.caption())).right_aligned(),
        Line::from(Span::styled(header.last_updated.as_str(), theme.heading())).right_aligned(),
    ]);
    f.render_widget(right, cols[1]);
}
