//! Help overlay widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Draw the help overlay.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center the dialog
    let dialog_width = 55;
    let dialog_height = 24;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(
        x,
        y,
        dialog_width.min(area.width),
        dialog_height.min(area.height),
    );

    // Clear background
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let keybindings = [
        ("Space / r", "Generate new palette"),
        ("1-9", "Toggle lock on color"),
        ("m / M", "Next / previous harmony mode"),
        ("f", "Cycle display format"),
        ("b", "Set base color"),
        ("y then 1-9", "Copy color"),
        ("c", "Copy CSS variables"),
        ("j", "Copy JSON"),
        ("s", "Save palette"),
        ("?", "Toggle help"),
        ("q / Ctrl+C", "Quit"),
        ("", ""),
        ("Saved palettes:", ""),
        ("  l then 0-9", "Load by index"),
        ("  d then 0-9", "Delete by index"),
        ("  Up / Down", "Select"),
        ("  Enter", "Load selected"),
        ("  Delete / x", "Delete selected"),
    ];

    let mut lines = Vec::new();
    for (key, desc) in keybindings {
        if key.is_empty() {
            lines.push(Line::from(Span::raw("")));
        } else if desc.is_empty() {
            lines.push(Line::from(Span::styled(
                key,
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:20}"), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(desc),
            ]));
        }
    }

    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let content = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), content[0]);
}
