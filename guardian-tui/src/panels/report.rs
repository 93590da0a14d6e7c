//! Report panel — the weekly narrative, rendered the same way every time.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use guardian_core::export::long_date;
use guardian_core::Report;

use crate::theme::Theme;

pub struct ReportPanel<'a> {
    report: &'a Report,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> ReportPanel<'a> {
    pub fn new(report: &'a Report, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            report,
            scroll,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let t = self.theme;
        let r = self.report;
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled("Executive Summary", t.accent_bold())));
        lines.push(Line::from(Span::styled(
            r.executive_summary.as_str(),
            Style::default().fg(t.info),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("Key Findings", t.heading())));
        for finding in &r.findings {
            let color = t.finding_color(finding.kind);
            lines.push(Line::from(Span::styled(
                finding.title.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(finding.body.as_str(), t.body())));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("Recommended Actions", t.heading())));
        for (i, action) in r.actions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), t.accent_bold()),
                Span::styled(action.as_str(), t.body()),
            ]));
        }
        lines.push(Line::from(""));

        let label = t.caption().add_modifier(Modifier::BOLD);
        lines.push(Line::from(vec![
            Span::styled("Report generated by: ", label),
            Span::styled(r.generated_by.as_str(), t.caption()),
            Span::styled(" | Data as of: ", label),
            Span::styled(long_date(r.data_as_of), t.caption()),
            Span::styled(" | Next automated analysis: ", label),
            Span::styled(long_date(r.next_analysis), t.caption()),
        ]));
        lines
    }
}

impl<'a> Widget for ReportPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.report.title))
            .title_style(self.theme.heading())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.theme.background));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
