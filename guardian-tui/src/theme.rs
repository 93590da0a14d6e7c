//! Clinical dashboard theme tokens.
//!
//! # Color Palette
//! - **Background**: Deep navy (base layer)
//! - **Accent**: Clinical blue (active tab, headings, focus)
//! - **Positive**: Green (quality score, recommended actions)
//! - **Critical**: Red (critical anomalies, priority findings)
//! - **Warning**: Amber (warning anomalies)
//! - **Muted**: Slate (captions, secondary text)

use ratatui::style::{Color, Modifier, Style};

use guardian_core::{FindingKind, Severity};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep navy background (primary surface)
    pub background: Color,
    /// Clinical blue (active tab, headings)
    pub accent: Color,
    /// Green (quality, clean records, recommendations)
    pub positive: Color,
    /// Red (critical severity)
    pub critical: Color,
    /// Amber (warning severity)
    pub warning: Color,
    /// Light blue (AI analysis blocks)
    pub info: Color,
    /// Slate (captions, disabled)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::clinical()
    }
}

impl Theme {
    pub fn clinical() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(37, 99, 235),
            positive: Color::Rgb(16, 185, 129),
            critical: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(245, 158, 11),
            info: Color::Rgb(96, 165, 250),
            muted: Color::Rgb(107, 114, 128),
            text_primary: Color::White,
            text_secondary: Color::Rgb(209, 213, 219),
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
        }
    }

    pub fn finding_color(&self, kind: FindingKind) -> Color {
        match kind {
            FindingKind::Priority => self.critical,
            FindingKind::PositiveTrend => self.positive,
        }
    }

    /// Badge style: severity color background, dark bold text.
    pub fn badge(&self, severity: Severity) -> Style {
        Style::default()
            .bg(self.severity_color(severity))
            .fg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn caption(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border for the focused card / active tab.
    pub fn focus_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(37, 99, 235));
        assert_eq!(theme.positive, Color::Rgb(16, 185, 129));
    }

    #[test]
    fn test_severity_color() {
        let theme = Theme::default();
        assert_eq!(theme.severity_color(Severity::Critical), theme.critical);
        assert_eq!(theme.severity_color(Severity::Warning), theme.warning);
    }

    #[test]
    fn test_finding_color() {
        let theme = Theme::default();
        assert_eq!(theme.finding_color(FindingKind::Priority), theme.critical);
        assert_eq!(theme.finding_color(FindingKind::PositiveTrend), theme.positive);
    }

    #[test]
    fn test_focus_border() {
        let theme = Theme::default();
        assert_eq!(theme.focus_border(true).fg, Some(theme.accent));
        assert_eq!(theme.focus_border(false).fg, Some(theme.muted));
    }
}
