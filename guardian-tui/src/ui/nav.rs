//! Navigation tabs — one bordered button per view.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, View};

/// Button rects in `View::ALL` order.
pub fn tab_rects(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// The view whose tab covers (`column`, `row`), if any.
pub fn view_at(area: Rect, column: u16, row: u16) -> Option<View> {
    tab_rects(area)
        .iter()
        .position(|rect| super::contains(*rect, column, row))
        .and_then(View::from_index)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;

    for (view, rect) in View::ALL.into_iter().zip(tab_rects(area)) {
        let active = view == app.view;
        let label_style = if active {
            Style::default()
                .fg(theme.text_primary)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.body()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.focus_border(active));
        let label = format!(" {} {} ", view.index() + 1, view.label());
        let para = Paragraph::new(Line::styled(label, label_style))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_split_evenly() {
        let rects = tab_rects(Rect::new(0, 4, 90, 3));
        assert_eq!(rects[0], Rect::new(0, 4, 30, 3));
        assert_eq!(rects[1], Rect::new(30, 4, 30, 3));
        assert_eq!(rects[2], Rect::new(60, 4, 30, 3));
    }

    #[test]
    fn view_at_maps_columns() {
        let area = Rect::new(0, 4, 90, 3);
        assert_eq!(view_at(area, 5, 5), Some(View::Dashboard));
        assert_eq!(view_at(area, 45, 4), Some(View::Anomalies));
        assert_eq!(view_at(area, 89, 6), Some(View::Report));
        assert_eq!(view_at(area, 45, 7), None);
        assert_eq!(view_at(area, 45, 3), None);
    }
}
