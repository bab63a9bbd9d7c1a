mod help;
mod palette;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, LineGauge, Paragraph},
};

use crate::app::{App, MOMA_URL, Overlay, SLIDER_MAX};
use help::build_help_text;
use theme::Theme;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 4;

fn screen_layout(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area)
}

/// Part of the screen covered by palette cells.
pub fn palette_area(area: Rect) -> Rect {
    screen_layout(area)[1]
}

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let [header_area, palette_area, footer_area] = screen_layout(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Modern Art UI  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "palette",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(rounded_block());
    frame.render_widget(header, header_area);

    palette::render(frame, app, palette_area);
    render_footer(frame, app, footer_area);

    match app.overlay {
        Overlay::Help => render_help_popup(frame, app),
        Overlay::Info => render_info_popup(frame),
        Overlay::None => {}
    }
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = rounded_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let [gauge_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .areas(inner);

    let gauge_style = if app.slider.is_tracking() {
        Style::default()
            .fg(Theme::active())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::accent())
    };
    let gauge = LineGauge::default()
        .filled_style(gauge_style)
        .unfilled_style(Style::default().fg(Theme::dim()))
        .label(format!("{:>3}/{SLIDER_MAX} ", app.slider.position()))
        .ratio(app.slider.ratio());
    frame.render_widget(gauge, gauge_area);

    let hint = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Theme::warn()),
        )),
        None => Line::from(Span::styled(
            "Left/Right: slide  Enter: apply  Esc: cancel  r: new palette  i: info  ?: help  q: quit",
            Style::default().fg(Theme::dim()),
        )),
    };
    frame.render_widget(Paragraph::new(hint), hint_area);
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(build_help_text(app))
        .alignment(Alignment::Left)
        .block(rounded_block().title(" Help "));
    frame.render_widget(popup, area);
}

fn render_info_popup(frame: &mut Frame) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        "More information",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Inspired by the works of artists such as Piet Mondrian and Ben Nicholson.",
        Style::default().fg(Theme::text()),
    )));
    lines.push(Line::from(Span::styled(
        "Click below to learn more!",
        Style::default().fg(Theme::text()),
    )));
    lines.push(Line::from(Span::styled(
        MOMA_URL,
        Style::default().fg(Theme::dim()),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Theme::dim())),
        Span::styled(
            "Y",
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to visit MoMA or ", Style::default().fg(Theme::dim())),
        Span::styled(
            "N",
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" for not now", Style::default().fg(Theme::dim())),
    ]));

    let popup = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(rounded_block().title(" Info "));
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(area);
    let [_, center, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(middle);
    center
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::app::{AppEvent, Options};
    use crate::layout::Grid;

    fn app() -> App {
        App::new(Options {
            grid: Grid::new(12, 3).unwrap(),
            seed: Some(3),
        })
    }

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                app.fit_to(palette_area(frame.area()));
                draw(frame, app);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn contains(buffer: &Buffer, needle: &str) -> bool {
        let area = buffer.area;
        (area.top()..area.bottom()).any(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.contains(needle)
        })
    }

    #[test]
    fn palette_area_sits_between_header_and_footer() {
        let area = palette_area(Rect::new(0, 0, 80, 30));
        assert_eq!(area, Rect::new(0, HEADER_HEIGHT, 80, 30 - HEADER_HEIGHT - FOOTER_HEIGHT));
    }

    #[test]
    fn every_palette_color_is_painted() {
        let mut app = app();
        let buffer = render(&mut app, 90, 31);
        for color in app.palette.colors() {
            let painted = buffer
                .content()
                .iter()
                .any(|cell| cell.bg == Color::from(*color));
            assert!(painted, "{} is missing", color.to_hex());
        }
    }

    #[test]
    fn small_terminal_shows_message() {
        let mut app = app();
        let buffer = render(&mut app, 60, 9);
        assert!(contains(&buffer, "too small"));
    }

    #[test]
    fn popups_render() {
        let mut app = app();
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        assert!(contains(&render(&mut app, 100, 40), "Key bindings"));

        app.update(AppEvent::KeyPress(KeyCode::Esc));
        app.update(AppEvent::KeyPress(KeyCode::Char('i')));
        assert!(contains(&render(&mut app, 100, 40), "More information"));
    }

    #[test]
    fn footer_shows_slider_position() {
        let mut app = app();
        app.update(AppEvent::KeyPress(KeyCode::Up));
        assert!(contains(&render(&mut app, 100, 30), "10/100"));
    }
}
