//! UI layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::input::{InputState, Pending};
use super::view::View;
use super::widgets::{draw_help_overlay, draw_palette, draw_saved};

/// Main draw function for the TUI.
pub fn draw(frame: &mut Frame, view: &View, input: &InputState) {
    let area = frame.area();

    // Main layout: title, content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    draw_title(frame, main_layout[0], view);

    // Content: swatches on top, saved list below
    let content_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[1]);

    draw_palette(frame, content_layout[0], view);
    let selected = input.selected_saved.min(view.saved.len().saturating_sub(1));
    draw_saved(frame, content_layout[1], view, selected);

    draw_status_bar(frame, main_layout[2], view, input);

    // Modals (on top)
    if let Some(text) = &input.base_input {
        draw_base_color_dialog(frame, text);
    }
    if input.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, view: &View) {
    let title = format!(
        " hueloom [{} | {}] ",
        view.palette.mode.display_name(),
        view.palette.format.display_name()
    );

    let block = Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, view: &View, input: &InputState) {
    let status_text = if input.base_input.is_some() {
        "BASE COLOR | Enter: Apply | Esc: Cancel"
    } else if let Some(pending) = input.pending {
        match pending {
            Pending::Copy => "COPY | 1-9: Pick color | any other key: Cancel",
            Pending::Load => "LOAD | 0-9: Pick saved palette | any other key: Cancel",
            Pending::Delete => "DELETE | 0-9: Pick saved palette | any other key: Cancel",
        }
    } else {
        "Space: Generate | 1-9: Lock | m: Mode | f: Format | s: Save | ?: Help | q: Quit"
    };

    let message = view.message.as_deref().unwrap_or("");

    let spans = if message.is_empty() {
        vec![Span::raw(status_text)]
    } else {
        vec![
            Span::styled(message, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::raw(status_text),
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn draw_base_color_dialog(frame: &mut Frame, text: &str) {
    let area = frame.area();

    // Center the dialog
    let dialog_width = 50;
    let dialog_height = 7;
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
        .title(" Base Color ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(Paragraph::new("Color (#hex, rgb(), hsl() or name):"), content[0]);

    let input_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    frame.render_widget(Paragraph::new(text).style(input_style), content[1]);

    let hint =
        Paragraph::new("Enter: Apply | Esc: Cancel").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, content[2]);
}
