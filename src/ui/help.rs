use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(app: &App) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "i: More information",
        "r: New colors and layout",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Slider"));
    lines.extend(section_lines(&[
        "Left/Right (h/l): Move by 1",
        "Up/Down (PgUp/PgDn): Move by 10",
        "Enter/space: Apply to every non-white cell",
        "esc: Cancel the current slide",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Palette"));
    lines.push(Line::from(Span::styled(
        format!(
            "  {} cells, {} per row",
            app.grid.items(),
            app.grid.columns()
        ),
        Style::default().fg(Theme::text()),
    )));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
