//! Key-binding overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// (keys, description) pairs, grouped by section.
pub const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("1 / 2 / 3", "Dashboard / Anomaly Detection / AI Summary"),
            ("Tab / Shift+Tab", "Cycle views forward / back"),
            ("Mouse click", "Select a tab or toggle an anomaly card"),
            ("?", "Show this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Anomaly Detection",
        &[
            ("j / k", "Move cursor down / up"),
            ("Enter / Space", "Expand or collapse the card"),
            ("r", "Mark the card resolved (this session only)"),
        ],
    ),
    ("AI Summary", &[("j / k", "Scroll down / up")]),
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.focus_border(true))
        .title(" Keys ")
        .title_style(theme.accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    for (title, keys) in SECTIONS {
        section(&mut lines, title, theme);
        for (k, desc) in keys.iter() {
            key(&mut lines, k, desc, theme);
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("Press any key to close", theme.caption())));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str, theme: &Theme) {
    lines.push(Line::from(Span::styled(title, theme.accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &'a str, theme: &Theme) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme.accent_bold()),
        Span::styled(desc, theme.body()),
    ]));
}
