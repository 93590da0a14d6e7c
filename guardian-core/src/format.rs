//! Display formatting shared by the TUI and the CLI.

/// Integer with `,` thousands separators: `45821` -> `"45,821"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with one decimal place: `97.8` -> `"97.8%"`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Month-over-month caption for the quality card, e.g. `"↑ 0.7% from last month"`.
pub fn delta_caption(delta: f64) -> String {
    let arrow = if delta >= 0.0 { '↑' } else { '↓' };
    format!("{arrow} {:.1}% from last month", delta.abs())
}

/// Fraction of a bar filled by a 0..=100 percentage, clamped to 0..=1.
pub fn quality_ratio(quality: f64) -> f64 {
    (quality / 100.0).clamp(0.0, 1.0)
}

/// Filled cells of a `width`-cell bar for a 0..=100 percentage.
pub fn bar_cells(quality: f64, width: u16) -> u16 {
    (quality_ratio(quality) * f64::from(width)).round() as u16
}

/// Text bar for plain output: `text_bar(50.0, 10)` -> `"█████░░░░░"`.
pub fn text_bar(quality: f64, width: u16) -> String {
    let filled = bar_cells(quality, width) as usize;
    let empty = width as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Greedy word wrap at `width` columns.
///
/// Words longer than `width` get a line of their own. Width 0 is treated as 1.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let current_len = current.chars().count();
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
