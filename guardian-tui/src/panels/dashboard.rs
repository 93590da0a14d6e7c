//! Dashboard panel — headline stats and the quality trend.
//!
//! Displays:
//! - Four stat cards: quality score, total records, critical issues, warnings
//! - One row per trend month with a bar sized by its quality percentage
//! - Issue counts per month as a bar chart (when there is room)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph, Widget},
};

use guardian_core::format;
use guardian_core::Dataset;

use crate::theme::Theme;

/// One headline card, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub caption: String,
    pub color: Color,
}

/// Build the four cards in their fixed order.
pub fn stat_cards(data: &Dataset, theme: &Theme) -> [StatCard; 4] {
    let stats = &data.stats;
    let quality_caption = data
        .quality_delta()
        .map(format::delta_caption)
        .unwrap_or_default();

    [
        StatCard {
            label: "Data Quality Score",
            value: format::percent(stats.quality_score),
            caption: quality_caption,
            color: theme.positive,
        },
        StatCard {
            label: "Total Records",
            value: format::thousands(stats.total_records),
            caption: "Across all facilities".to_string(),
            color: theme.accent,
        },
        StatCard {
            label: "Critical Issues",
            value: stats.critical_issues.to_string(),
            caption: "Requires immediate action".to_string(),
            color: theme.critical,
        },
        StatCard {
            label: "Warnings",
            value: stats.warning_issues.to_string(),
            caption: "Review recommended".to_string(),
            color: theme.warning,
        },
    ]
}

/// Two rows per trend point plus the block border, saturating at `u16::MAX`.
fn trend_block_height(points: usize) -> u16 {
    u16::try_from(points)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(2)
}

pub struct DashboardPanel<'a> {
    data: &'a Dataset,
    theme: &'a Theme,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(data: &'a Dataset, theme: &'a Theme) -> Self {
        Self { data, theme }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (card, rect) in stat_cards(self.data, self.theme).into_iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(card.color))
                .style(Style::default().bg(self.theme.background));
            let lines = vec![
                Line::from(Span::styled(card.label, self.theme.caption())),
                Line::from(Span::styled(card.value, self.theme.heading())),
                Line::from(Span::styled(card.caption, Style::default().fg(card.color))),
            ];
            Paragraph::new(lines).block(block).render(*rect, buf);
        }
    }

    fn render_trend(&self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Quality Trend ({} Months) ", self.data.trend.len());
        let block = Block::default()
            .title(title)
            .title_style(self.theme.heading())
            .borders(Borders::ALL)
            .border_style(self.theme.caption())
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_width = inner.width;
        let mut lines: Vec<Line> = Vec::with_capacity(self.data.trend.len() * 2);
        for point in &self.data.trend {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<10}", format!("{} {}", point.month, self.data.trend_year)),
                    self.theme.heading(),
                ),
                Span::styled(
                    format!("{:>7}", format::percent(point.quality)),
                    Style::default().fg(self.theme.positive),
                ),
                Span::styled(format!("  {} issues", point.issues), self.theme.caption()),
            ]));

            let filled = format::bar_cells(point.quality, bar_width);
            lines.push(Line::from(vec![
                Span::styled(
                    "█".repeat(filled as usize),
                    Style::default().fg(self.theme.positive),
                ),
                Span::styled(
                    "░".repeat(bar_width.saturating_sub(filled) as usize),
                    self.theme.caption(),
                ),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_issues_chart(&self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<(&str, u64)> = self
            .data
            .trend
            .iter()
            .map(|p| (p.month.as_str(), p.issues))
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(" Issues per Month ")
                    .title_style(self.theme.heading())
                    .borders(Borders::ALL)
                    .border_style(self.theme.caption()),
            )
            .data(bars.as_slice())
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(self.theme.critical))
            .value_style(Style::default().fg(self.theme.background).bg(self.theme.critical))
            .label_style(self.theme.body());
        chart.render(area, buf);
    }
}

impl<'a> Widget for DashboardPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let trend_height = trend_block_height(self.data.trend.len());
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(trend_height),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_cards(rows[0], buf);
        self.render_trend(rows[1], buf);
        if rows[2].height >= 6 {
            self.render_issues_chart(rows[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_block_height_saturates() {
        assert_eq!(trend_block_height(5), 12);
        assert_eq!(trend_block_height(40_000), u16::MAX);
        assert_eq!(trend_block_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn cards_in_authored_order() {
        let theme = Theme::default();
        let cards = stat_cards(&Dataset::builtin(), &theme);
        let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["Data Quality Score", "Total Records", "Critical Issues", "Warnings"]
        );
    }

    #[test]
    fn card_values_are_formatted() {
        let theme = Theme::default();
        let cards = stat_cards(&Dataset::builtin(), &theme);
        assert_eq!(cards[0].value, "97.8%");
        assert_eq!(cards[1].value, "45,821");
        assert_eq!(cards[2].value, "23");
        assert_eq!(cards[3].value, "47");
    }

    #[test]
    fn quality_caption_from_trend() {
        let theme = Theme::default();
        let cards = stat_cards(&Dataset::builtin(), &theme);
        assert_eq!(cards[0].caption, "↑ 0.7% from last month");
        assert_eq!(cards[0].color, theme.positive);
        assert_eq!(cards[2].color, theme.critical);
    }
}
