use ratatui::{
    Frame,
    layout::Rect,
    prelude::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::theme::Theme;
use crate::app::App;

/// Paints one colored block per palette cell, row by row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(layout) = app.layout.as_ref().filter(|layout| layout.area == area) else {
        return;
    };
    let rows = match &layout.rows {
        Ok(rows) => rows,
        Err(err) => {
            let message = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Terminal too small for the palette",
                    Style::default().fg(Theme::warn()),
                )),
                Line::from(Span::styled(err.to_string(), Style::default().fg(Theme::dim()))),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(message, area);
            return;
        }
    };

    let mut y = area.y;
    let mut index = 0;
    for row in rows {
        let mut x = area.x;
        let mut row_height = 0;
        for size in row {
            if let Some(color) = app.palette.get(index) {
                let cell = with_gap(Rect::new(x, y, size.width, size.height));
                let block = Block::default().style(Style::default().bg(Color::from(color)));
                frame.render_widget(block, cell.intersection(area));
            }
            x = x.saturating_add(size.width);
            row_height = row_height.max(size.height);
            index += 1;
        }
        y = y.saturating_add(row_height);
    }
}

/// Leaves one blank column and row between neighbouring cells when there is room.
fn with_gap(cell: Rect) -> Rect {
    let width = if cell.width > 2 { cell.width - 1 } else { cell.width };
    let height = if cell.height > 2 { cell.height - 1 } else { cell.height };
    Rect { width, height, ..cell }
}
