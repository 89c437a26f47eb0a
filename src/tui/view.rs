//! Render sink backing the TUI.

use crate::state::{PaletteState, RenderSink};
use crate::store::SavedPalette;

/// Latest data pushed by the session; drawing reads only from here.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub palette: PaletteState,
    pub saved: Vec<SavedPalette>,
    pub message: Option<String>,
}

impl RenderSink for View {
    fn display_palette(&mut self, state: &PaletteState) {
        self.palette = state.clone();
    }

    fn display_saved_palettes(&mut self, saved: &[SavedPalette]) {
        self.saved = saved.to_vec();
    }

    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}
