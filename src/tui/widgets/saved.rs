//! Saved palette list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::format_color;
use crate::tui::view::View;

/// Draw the saved palettes, one row each, with the selected row highlighted.
pub fn draw_saved(frame: &mut Frame, area: Rect, view: &View, selected: usize) {
    let title = format!(" Saved ({}) ", view.saved.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.saved.is_empty() {
        let msg = Paragraph::new("Nothing saved yet. Press s to save the current palette.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    // Keep the selection visible when the list is taller than the pane
    let visible = usize::from(inner.height).max(1);
    let skip = selected.saturating_sub(visible - 1);

    let lines: Vec<Line> = view
        .saved
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(row, saved)| {
            let marker_style = if row == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if row == selected { ">" } else { " " };

            let mut spans = vec![Span::styled(
                format!("{marker} {:>3} ", saved.index),
                marker_style,
            )];
            for &color in &saved.colors {
                spans.push(Span::styled(
                    "    ",
                    Style::default().bg(Color::Rgb(color.red, color.green, color.blue)),
                ));
            }
            let values: Vec<String> = saved
                .colors
                .iter()
                .map(|&color| format_color(color, view.palette.format))
                .collect();
            spans.push(Span::raw(format!("  {}", values.join(" "))));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
