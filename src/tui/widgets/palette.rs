//! Palette widget showing one swatch per slot.

use palette::Srgb;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::generate::PaletteSlot;
use crate::tui::view::View;

/// Draw the active palette as side-by-side swatches.
pub fn draw_palette(frame: &mut Frame, area: Rect, view: &View) {
    let title = format!(" Palette ({}) ", view.palette.mode.display_name());
    let block = Block::default().title(title).borders(Borders::ALL);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = &view.palette.slots;
    if slots.is_empty() {
        frame.render_widget(Paragraph::new("No palette generated"), inner);
        return;
    }

    let count = slots.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(slots.iter().map(|_| Constraint::Ratio(1, count)))
        .split(inner);

    let values = view.palette.display_values();
    for (index, (slot, value)) in slots.iter().zip(&values).enumerate() {
        draw_swatch(frame, cols[index], index, slot, value);
    }
}

/// Black or white, whichever reads better on `rgb`.
pub fn contrast_color(rgb: Srgb<u8>) -> Color {
    let luminance =
        0.299 * f32::from(rgb.red) + 0.587 * f32::from(rgb.green) + 0.114 * f32::from(rgb.blue);
    if luminance > 128.0 {
        Color::Black
    } else {
        Color::White
    }
}

fn draw_swatch(frame: &mut Frame, area: Rect, index: usize, slot: &PaletteSlot, value: &str) {
    let rgb = slot.color;
    let bg_color = Color::Rgb(rgb.red, rgb.green, rgb.blue);
    let style = Style::default().bg(bg_color).fg(contrast_color(rgb));

    let label = if slot.locked {
        format!("{} [locked]", index + 1)
    } else {
        format!("{}", index + 1)
    };

    let mut lines = vec![Line::from(Span::styled(label, style.add_modifier(Modifier::BOLD)))];
    if area.height >= 3 {
        lines.push(Line::from(Span::styled(value.to_string(), style)));
    }

    let paragraph = Paragraph::new(lines).style(style);
    frame.render_widget(paragraph, area);
}
