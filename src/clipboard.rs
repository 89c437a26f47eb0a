//! Clipboard sinks for copied colors and exports.

use tracing::warn;

use crate::error::PaletteError;

/// Destination for copied text. Failures are reported, never retried.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), PaletteError>;
}

/// System clipboard via `arboard`.
///
/// The handle is opened on first use and kept alive, since some platforms drop the
/// selection once the owning handle goes away.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for ArboardClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArboardClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl Clipboard for ArboardClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), PaletteError> {
        let opened = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| {
                warn!(error = %e, "Failed to open system clipboard");
                PaletteError::ClipboardDenied(e.to_string())
            })?,
        };
        let clipboard = self.inner.insert(opened);

        clipboard.set_text(text).map_err(|e| {
            warn!(error = %e, "Failed to copy to clipboard");
            PaletteError::ClipboardDenied(e.to_string())
        })
    }
}

/// In-process clipboard that records the last copied text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    /// A clipboard that rejects every copy.
    pub fn denying() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    /// Last successfully copied text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), PaletteError> {
        if self.denied {
            return Err(PaletteError::ClipboardDenied(
                "clipboard access denied".to_string(),
            ));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
