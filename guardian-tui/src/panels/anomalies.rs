//! Anomaly list panel — one card per anomaly, in dataset order.
//!
//! Each card shows severity badge, category, description, affected record
//! count, and impact. The detail block (AI analysis + recommended action) is
//! drawn only on the expanded card.
//!
//! Card heights depend on expansion and width, so layout is computed by
//! `card_rects`, which the mouse handler shares to resolve clicks.

use std::collections::BTreeSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

use guardian_core::format::wrap;
use guardian_core::{Anomaly, AnomalyId};

use crate::theme::Theme;

/// Border plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
/// Top and bottom border.
const VERTICAL_CHROME: u16 = 2;

/// Unstyled card content. Styling happens at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum CardLine {
    Title,
    Text(String),
    Labeled { label: &'static str, value: String },
    Continuation(String),
    Rule,
    Heading(&'static str),
    Analysis(String),
    Action(String),
    Blank,
}

/// Content lines for one card at text width `width`.
pub fn card_lines(anomaly: &Anomaly, expanded: bool, width: u16) -> Vec<CardLine> {
    let width = width.max(1) as usize;
    let mut lines = vec![CardLine::Title];

    lines.extend(wrap(&anomaly.description, width).into_iter().map(CardLine::Text));
    lines.push(CardLine::Labeled {
        label: "Affected Records: ",
        value: anomaly.count.to_string(),
    });

    let impact_label = "Impact: ";
    for (i, line) in wrap(&format!("{impact_label}{}", anomaly.impact), width)
        .into_iter()
        .enumerate()
    {
        match line.strip_prefix(impact_label) {
            Some(value) if i == 0 => lines.push(CardLine::Labeled {
                label: impact_label,
                value: value.to_string(),
            }),
            _ => lines.push(CardLine::Continuation(line)),
        }
    }

    if expanded {
        lines.push(CardLine::Rule);
        lines.push(CardLine::Heading("AI Analysis"));
        lines.extend(
            wrap(&anomaly.ai_explanation, width)
                .into_iter()
                .map(CardLine::Analysis),
        );
        lines.push(CardLine::Blank);
        lines.push(CardLine::Heading("Recommended Action"));
        lines.extend(
            wrap(&anomaly.recommendation, width)
                .into_iter()
                .map(CardLine::Action),
        );
    }
    lines
}

/// Total card height, borders included.
pub fn card_height(anomaly: &Anomaly, expanded: bool, width: u16) -> u16 {
    let text_width = width.saturating_sub(HORIZONTAL_CHROME);
    u16::try_from(card_lines(anomaly, expanded, text_width).len())
        .unwrap_or(u16::MAX)
        .saturating_add(VERTICAL_CHROME)
}

/// Visible cards as `(index, rect)`, scrolled so the cursor card fits.
///
/// The last visible card may be clipped at the bottom of `area`.
pub fn card_rects(
    anomalies: &[Anomaly],
    expanded: Option<AnomalyId>,
    cursor: usize,
    area: Rect,
) -> Vec<(usize, Rect)> {
    if anomalies.is_empty() || area.height == 0 {
        return Vec::new();
    }

    let heights: Vec<u16> = anomalies
        .iter()
        .map(|a| card_height(a, expanded == Some(a.id), area.width))
        .collect();

    let cursor = cursor.min(anomalies.len() - 1);
    let mut start = 0;
    while start < cursor && span_height(&heights[start..=cursor]) > area.height {
        start += 1;
    }

    let mut rects = Vec::new();
    let mut y = area.y;
    for (i, h) in heights.iter().enumerate().skip(start) {
        if y >= area.bottom() {
            break;
        }
        let height = (*h).min(area.bottom() - y);
        rects.push((i, Rect::new(area.x, y, area.width, height)));
        y += height;
    }
    rects
}

fn span_height(heights: &[u16]) -> u16 {
    heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h))
}

/// Index of the card under (`column`, `row`), if any.
pub fn card_at(
    anomalies: &[Anomaly],
    expanded: Option<AnomalyId>,
    cursor: usize,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    card_rects(anomalies, expanded, cursor, area)
        .into_iter()
        .find(|(_, rect)| crate::ui::contains(*rect, column, row))
        .map(|(i, _)| i)
}

pub struct AnomalyListPanel<'a> {
    anomalies: &'a [Anomaly],
    expanded: Option<AnomalyId>,
    cursor: usize,
    resolved: &'a BTreeSet<AnomalyId>,
    theme: &'a Theme,
}

impl<'a> AnomalyListPanel<'a> {
    pub fn new(
        anomalies: &'a [Anomaly],
        expanded: Option<AnomalyId>,
        cursor: usize,
        resolved: &'a BTreeSet<AnomalyId>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            anomalies,
            expanded,
            cursor,
            resolved,
            theme,
        }
    }

    fn styled_line(&self, anomaly: &Anomaly, line: CardLine, width: u16) -> Line<'a> {
        let t = self.theme;
        match line {
            CardLine::Title => {
                let mut spans = vec![
                    Span::styled(
                        format!(" {} ", anomaly.severity.label()),
                        t.badge(anomaly.severity),
                    ),
                    Span::raw(" "),
                    Span::styled(anomaly.category.clone(), t.heading()),
                ];
                if self.resolved.contains(&anomaly.id) {
                    spans.push(Span::styled(
                        "  ✓ RESOLVED",
                        Style::default().fg(t.positive).add_modifier(Modifier::BOLD),
                    ));
                }
                Line::from(spans)
            }
            CardLine::Text(text) => Line::from(Span::styled(text, t.body())),
            CardLine::Labeled { label, value } => Line::from(vec![
                Span::styled(label, t.caption().add_modifier(Modifier::BOLD)),
                Span::styled(value, t.caption()),
            ]),
            CardLine::Continuation(text) => Line::from(Span::styled(text, t.caption())),
            CardLine::Rule => Line::from(Span::styled("─".repeat(width as usize), t.caption())),
            CardLine::Heading(title) => {
                let color = if title == "AI Analysis" { t.info } else { t.positive };
                Line::from(Span::styled(
                    title,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            CardLine::Analysis(text) => Line::from(Span::styled(text, Style::default().fg(t.info))),
            CardLine::Action(text) => {
                Line::from(Span::styled(text, Style::default().fg(t.positive)))
            }
            CardLine::Blank => Line::from(""),
        }
    }
}

impl<'a> Widget for AnomalyListPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = area.width.saturating_sub(HORIZONTAL_CHROME);

        for (i, rect) in card_rects(self.anomalies, self.expanded, self.cursor, area) {
            let anomaly = &self.anomalies[i];
            let expanded = self.expanded == Some(anomaly.id);
            let focused = i == self.cursor;

            let border_style = if expanded {
                Style::default()
                    .fg(self.theme.severity_color(anomaly.severity))
                    .add_modifier(Modifier::BOLD)
            } else {
                self.theme.focus_border(focused)
            };
            let marker = if expanded { "▾" } else { "▸" };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(format!(" {marker} "), border_style))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(self.theme.background));

            let lines: Vec<Line> = card_lines(anomaly, expanded, text_width)
                .into_iter()
                .map(|line| self.styled_line(anomaly, line, text_width))
                .collect();

            Paragraph::new(lines).block(block).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_core::Dataset;

    #[test]
    fn collapsed_card_has_no_detail() {
        let data = Dataset::builtin();
        let lines = card_lines(&data.anomalies[0], false, 200);
        assert_eq!(lines[0], CardLine::Title);
        assert!(!lines.iter().any(|l| matches!(l, CardLine::Heading(_))));
        assert!(lines.contains(&CardLine::Labeled {
            label: "Affected Records: ",
            value: "12".into()
        }));
        assert!(lines.contains(&CardLine::Labeled {
            label: "Impact: ",
            value: "High - Incomplete vaccination coverage".into()
        }));
    }

    #[test]
    fn expanded_card_has_both_headings() {
        let data = Dataset::builtin();
        let lines = card_lines(&data.anomalies[0], true, 200);
        assert!(lines.contains(&CardLine::Heading("AI Analysis")));
        assert!(lines.contains(&CardLine::Heading("Recommended Action")));
        assert!(lines.contains(&CardLine::Action(
            "Immediate outreach required. Priority contact list generated.".into()
        )));
    }

    #[test]
    fn narrow_width_wraps_impact() {
        let data = Dataset::builtin();
        let lines = card_lines(&data.anomalies[0], false, 20);
        assert!(lines
            .iter()
            .any(|l| matches!(l, CardLine::Continuation(_))));
    }

    #[test]
    fn expansion_grows_card() {
        let data = Dataset::builtin();
        let a = &data.anomalies[1];
        assert!(card_height(a, true, 80) > card_height(a, false, 80));
    }

    #[test]
    fn rects_stack_without_overlap() {
        let data = Dataset::builtin();
        let area = Rect::new(0, 7, 100, 60);
        let rects = card_rects(&data.anomalies, None, 0, area);
        assert_eq!(rects.len(), 5);
        for pair in rects.windows(2) {
            assert_eq!(pair[0].1.bottom(), pair[1].1.y);
        }
        assert_eq!(rects[0].1.y, 7);
    }

    #[test]
    fn cursor_card_scrolls_into_view() {
        let data = Dataset::builtin();
        let area = Rect::new(0, 0, 100, 12);
        let rects = card_rects(&data.anomalies, None, 4, area);
        let (last, rect) = rects.iter().find(|(i, _)| *i == 4).copied().unwrap();
        assert_eq!(last, 4);
        assert!(rect.bottom() <= area.bottom());
        assert_ne!(rects[0].0, 0);
    }

    #[test]
    fn click_maps_to_card() {
        let data = Dataset::builtin();
        let area = Rect::new(0, 7, 100, 60);
        let rects = card_rects(&data.anomalies, None, 0, area);
        let (_, third) = rects[2];
        assert_eq!(
            card_at(&data.anomalies, None, 0, area, 10, third.y + 1),
            Some(2)
        );
        assert_eq!(card_at(&data.anomalies, None, 0, area, 10, 6), None);
    }

    #[test]
    fn very_tall_card_saturates_height() {
        let mut anomaly = Dataset::builtin().anomalies[0].clone();
        anomaly.ai_explanation = "word ".repeat(70_000);
        assert_eq!(card_height(&anomaly, true, 10), u16::MAX);
        assert!(card_height(&anomaly, false, 10) < 40);

        let area = Rect::new(0, 0, 10, 30);
        let rects = card_rects(std::slice::from_ref(&anomaly), Some(anomaly.id), 0, area);
        assert_eq!(rects, vec![(0, area)]);
    }

    #[test]
    fn empty_list_has_no_rects() {
        assert!(card_rects(&[], None, 0, Rect::new(0, 0, 80, 20)).is_empty());
    }
}
