//! Session state and the commands that drive it.
//!
//! [`PaletteState`] is the single source of truth for the active palette. Front ends turn
//! user events into [`Command`]s, hand them to a [`Session`], and redraw from whatever the
//! session pushes into their [`RenderSink`].

use palette::Srgb;
use rand::Rng;
use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::error::PaletteError;
use crate::format::{DisplayFormat, ExportFormat, export, format_color};
use crate::generate::{PaletteSlot, generate, with_base_color};
use crate::harmony::HarmonyMode;
use crate::store::{PaletteStore, SavedPalette, Storage};

/// The active palette plus the selections that shape it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub mode: HarmonyMode,
    pub format: DisplayFormat,
    pub slots: Vec<PaletteSlot>,
}

impl PaletteState {
    /// Empty state; call [`PaletteState::regenerate`] to fill it.
    pub fn new(mode: HarmonyMode, format: DisplayFormat) -> Self {
        Self {
            mode,
            format,
            slots: Vec::new(),
        }
    }

    /// Colors of the active palette, in slot order.
    pub fn colors(&self) -> Vec<Srgb<u8>> {
        self.slots.iter().map(|slot| slot.color).collect()
    }

    /// Display string of every slot in the active format.
    pub fn display_values(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| format_color(slot.color, self.format))
            .collect()
    }

    /// Display string of one slot.
    pub fn display_value(&self, index: usize) -> Option<String> {
        self.slots
            .get(index)
            .map(|slot| format_color(slot.color, self.format))
    }

    /// Regenerate for the current mode, keeping locked slots that still fit.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.slots = generate(self.mode, &self.slots, rng);
    }

    /// Flip the lock on `index`. Returns the new flag, or `None` if there is no such slot.
    pub fn toggle_lock(&mut self, index: usize) -> Option<bool> {
        let slot = self.slots.get_mut(index)?;
        slot.locked = !slot.locked;
        Some(slot.locked)
    }

    /// Replace the base color (slot 0) without touching the companions.
    pub fn set_base_color(&mut self, color: Srgb<u8>) -> bool {
        with_base_color(&mut self.slots, color)
    }
}

/// Discrete user intents applied to a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Regenerate, keeping locked slots
    Generate,
    /// Flip the lock on a slot
    ToggleLock(usize),
    /// Switch how colors are displayed
    ChangeFormat(DisplayFormat),
    /// Switch harmony mode and regenerate
    ChangeMode(HarmonyMode),
    /// Replace the base color (slot 0)
    SetBaseColor(Srgb<u8>),
    /// Persist the active palette
    Save,
    /// Remove a saved palette
    Delete(usize),
    /// Make a saved palette the active one
    Load(usize),
    /// Copy one slot's display string
    Copy(usize),
    /// Copy the whole palette as CSS or JSON
    Export(ExportFormat),
}

/// Where computed results go. Implemented by the front end.
pub trait RenderSink {
    fn display_palette(&mut self, state: &PaletteState);
    fn display_saved_palettes(&mut self, saved: &[SavedPalette]);
    fn notify(&mut self, message: &str);
}

/// Owns the palette state together with its storage, clipboard, render sink and RNG.
pub struct Session<S, C, R, G> {
    state: PaletteState,
    store: PaletteStore<S>,
    clipboard: C,
    render: R,
    rng: G,
}

impl<S, C, R, G> Session<S, C, R, G>
where
    S: Storage,
    C: Clipboard,
    R: RenderSink,
    G: Rng,
{
    pub fn new(
        state: PaletteState,
        store: PaletteStore<S>,
        clipboard: C,
        render: R,
        rng: G,
    ) -> Self {
        Self {
            state,
            store,
            clipboard,
            render,
            rng,
        }
    }

    /// Generate the first palette and push both views to the render sink.
    pub fn start(&mut self) {
        self.state.regenerate(&mut self.rng);
        self.render.display_palette(&self.state);
        self.refresh_saved();
    }

    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn store(&self) -> &PaletteStore<S> {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Apply one command and push the results to the sinks.
    pub fn apply(&mut self, command: Command) {
        debug!(?command, "Applying command");

        match command {
            Command::Generate => {
                self.state.regenerate(&mut self.rng);
                self.render.display_palette(&self.state);
            }
            Command::ToggleLock(index) => {
                if self.state.toggle_lock(index).is_some() {
                    self.render.display_palette(&self.state);
                }
            }
            Command::ChangeFormat(format) => {
                self.state.format = format;
                self.render.display_palette(&self.state);
            }
            Command::ChangeMode(mode) => {
                self.state.mode = mode;
                self.state.regenerate(&mut self.rng);
                self.render.display_palette(&self.state);
            }
            Command::SetBaseColor(color) => {
                if self.state.set_base_color(color) {
                    self.render.display_palette(&self.state);
                }
            }
            Command::Save => match self.store.save(&self.state.colors()) {
                Ok(_) => {
                    self.refresh_saved();
                    self.render.notify("Palette saved!");
                }
                Err(e) => self.report("save palette", &e),
            },
            Command::Delete(index) => match self.store.delete(index) {
                Ok(true) => {
                    self.refresh_saved();
                    self.render.notify("Palette deleted!");
                }
                Ok(false) => {}
                Err(e) => self.report("delete palette", &e),
            },
            Command::Load(index) => match self.store.load(index) {
                Ok(Some(slots)) => {
                    self.state.slots = slots;
                    self.render.display_palette(&self.state);
                }
                Ok(None) => {}
                Err(e) => self.report("load palette", &e),
            },
            Command::Copy(index) => {
                if let Some(text) = self.state.display_value(index) {
                    self.copy(&text, "Color copied to clipboard!");
                }
            }
            Command::Export(shape) => {
                match export(&self.state.colors(), self.state.format, shape) {
                    Ok(text) => {
                        let message = match shape {
                            ExportFormat::Css => "CSS variables copied to clipboard!",
                            ExportFormat::Json => "JSON copied to clipboard!",
                        };
                        self.copy(&text, message);
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to serialize export");
                        self.render.notify(&format!("Could not export palette: {e}"));
                    }
                }
            }
        }
    }

    fn copy(&mut self, text: &str, success: &str) {
        match self.clipboard.copy_text(text) {
            Ok(()) => self.render.notify(success),
            Err(e) => self.report("copy to clipboard", &e),
        }
    }

    fn refresh_saved(&mut self) {
        match self.store.list() {
            Ok(saved) => self.render.display_saved_palettes(&saved),
            Err(e) => self.report("read saved palettes", &e),
        }
    }

    fn report(&mut self, action: &str, error: &PaletteError) {
        warn!(action, %error, "Operation failed");
        self.render.notify(&format!("Could not {action}: {error}"));
    }
}

impl<S, C, R, G> std::fmt::Debug for Session<S, C, R, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
