//! Key handling: turns key presses into session commands.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::convert::parse_color;
use crate::format::ExportFormat;
use crate::state::Command;

use super::view::View;

/// Actions that can be returned from event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply a command to the session.
    Apply(Command),
    /// Show a status message without touching the palette.
    Message(String),
    /// Quit the application.
    Quit,
    /// No action needed.
    None,
}

/// Prefix keys that take a digit argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// `y`: digit 1-9 picks the slot to copy
    Copy,
    /// `l`: digit 0-9 picks the saved palette to load
    Load,
    /// `d`: digit 0-9 picks the saved palette to delete
    Delete,
}

impl Pending {
    /// Prompt shown while waiting for the digit.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Copy => "Copy which color? (1-9)",
            Self::Load => "Load which saved palette? (0-9)",
            Self::Delete => "Delete which saved palette? (0-9)",
        }
    }
}

/// UI-only state: overlays, pending prefixes, text entry and list selection.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub show_help: bool,
    /// Prefix key waiting for its digit
    pub pending: Option<Pending>,
    /// Base color text being typed, when the prompt is open
    pub base_input: Option<String>,
    /// Highlighted row of the saved-palette list
    pub selected_saved: usize,
}

impl InputState {
    /// Handle a key event and return the resulting action.
    pub fn handle(&mut self, key: KeyEvent, view: &View) -> Action {
        // If showing help overlay, any key closes it
        if self.show_help {
            self.show_help = false;
            return Action::None;
        }

        if self.base_input.is_some() {
            return self.handle_base_input(key);
        }

        if let Some(pending) = self.pending.take() {
            return match (pending, key.code) {
                (Pending::Copy, code) => slot_digit(code)
                    .map_or(Action::None, |index| Action::Apply(Command::Copy(index))),
                (Pending::Load, KeyCode::Char(c)) => c
                    .to_digit(10)
                    .map_or(Action::None, |d| Action::Apply(Command::Load(d as usize))),
                (Pending::Delete, KeyCode::Char(c)) => c
                    .to_digit(10)
                    .map_or(Action::None, |d| Action::Apply(Command::Delete(d as usize))),
                _ => Action::None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        self.clamp_selection(view.saved.len());

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => {
                self.show_help = true;
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Char('r') => Action::Apply(Command::Generate),
            KeyCode::Char('m') => Action::Apply(Command::ChangeMode(view.palette.mode.next())),
            KeyCode::Char('M') => Action::Apply(Command::ChangeMode(view.palette.mode.prev())),
            KeyCode::Char('f') => Action::Apply(Command::ChangeFormat(view.palette.format.next())),
            KeyCode::Char('s') => Action::Apply(Command::Save),
            KeyCode::Char('c') => Action::Apply(Command::Export(ExportFormat::Css)),
            KeyCode::Char('j') => Action::Apply(Command::Export(ExportFormat::Json)),
            KeyCode::Char('y') => self.start_prefix(Pending::Copy),
            KeyCode::Char('l') => self.start_prefix(Pending::Load),
            KeyCode::Char('d') => self.start_prefix(Pending::Delete),
            KeyCode::Char('b') => {
                self.base_input = Some(String::new());
                Action::None
            }
            KeyCode::Up => {
                self.selected_saved = self.selected_saved.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if self.selected_saved + 1 < view.saved.len() {
                    self.selected_saved += 1;
                }
                Action::None
            }
            KeyCode::Enter if !view.saved.is_empty() => {
                Action::Apply(Command::Load(self.selected_saved))
            }
            KeyCode::Delete | KeyCode::Char('x') if !view.saved.is_empty() => {
                Action::Apply(Command::Delete(self.selected_saved))
            }
            code => match slot_digit(code) {
                Some(index) => Action::Apply(Command::ToggleLock(index)),
                None => Action::None,
            },
        }
    }

    fn start_prefix(&mut self, pending: Pending) -> Action {
        self.pending = Some(pending);
        Action::Message(pending.prompt().to_string())
    }

    /// Keep the saved-list selection inside a list of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_saved = self.selected_saved.min(len.saturating_sub(1));
    }

    fn handle_base_input(&mut self, key: KeyEvent) -> Action {
        let Some(text) = self.base_input.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Char(c) => {
                text.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                text.pop();
                Action::None
            }
            KeyCode::Esc => {
                self.base_input = None;
                Action::None
            }
            KeyCode::Enter => {
                let text = self.base_input.take().unwrap_or_default();
                match parse_color(text.trim()) {
                    Ok(color) => Action::Apply(Command::SetBaseColor(color)),
                    Err(e) => Action::Message(e.to_string()),
                }
            }
            _ => Action::None,
        }
    }
}

/// Map `1`-`9` to a zero-based slot index.
fn slot_digit(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
